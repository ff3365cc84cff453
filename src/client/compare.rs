//! Helpers for comparing REST responses with direct provider results.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

/// Strip the keys from a list of row objects, keeping each row's values in
/// field order. Lets a list of rows be compared against lists of plain values.
///
/// Non-object rows are kept as they are.
#[must_use]
pub fn just_values(rows: &[Value]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| match row {
            Value::Object(map) => map.values().cloned().collect(),
            other => vec![other.clone()],
        })
        .collect()
}

/// Serialize typed rows to JSON values, the shape a REST response decodes to
///
/// # Errors
///
/// Returns an error if a row cannot be serialized.
pub fn rows_as_values<T: Serialize>(rows: &[T]) -> Result<Vec<Value>, serde_json::Error> {
    rows.iter().map(serde_json::to_value).collect()
}

/// True when both slices hold the same items with the same multiplicities, in
/// any order. Works for items that are neither hashable nor orderable.
#[must_use]
pub fn equal_regardless_of_order<T: PartialEq>(items: &[T], other: &[T]) -> bool {
    if items.len() != other.len() {
        return false;
    }
    let mut unmatched: Vec<&T> = other.iter().collect();
    for item in items {
        match unmatched.iter().position(|candidate| *candidate == item) {
            Some(pos) => {
                unmatched.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

/// Parse an ISO-8601 timestamp as sent on the wire (e.g. `GeneInfo::added`)
///
/// # Errors
///
/// Returns an error if `text` is not a `YYYY-MM-DDTHH:MM:SS[.fraction]` timestamp.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_just_values_keeps_field_order() {
        let rows = vec![
            json!({"tx_ac": "NM_1", "alt_ac": "NC_1", "alt_aln_method": "splign"}),
            json!({"tx_ac": "NM_2", "alt_ac": "NC_1", "alt_aln_method": "blat"}),
        ];
        assert_eq!(
            just_values(&rows),
            vec![
                vec![json!("NM_1"), json!("NC_1"), json!("splign")],
                vec![json!("NM_2"), json!("NC_1"), json!("blat")],
            ]
        );
    }

    #[test]
    fn test_equal_regardless_of_order() {
        assert!(equal_regardless_of_order(&[1, 2, 2, 3], &[2, 3, 2, 1]));
        assert!(!equal_regardless_of_order(&[1, 2, 2], &[1, 1, 2]));
        assert!(!equal_regardless_of_order(&[1, 2], &[1, 2, 3]));
        assert!(equal_regardless_of_order::<Value>(&[], &[]));
    }

    #[test]
    fn test_parse_timestamp_with_and_without_fraction() {
        let ts = parse_timestamp("2014-02-04T22:39:32.57125").unwrap();
        assert_eq!(ts.to_string(), "2014-02-04 22:39:32.571250");
        assert!(parse_timestamp("2014-02-04T22:39:32").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_rows_as_values_matches_wire_shape() {
        #[derive(Serialize)]
        struct Row {
            b: i32,
            a: &'static str,
        }
        let values = rows_as_values(&[Row { b: 1, a: "x" }]).unwrap();
        assert_eq!(just_values(&values), vec![vec![json!(1), json!("x")]]);
    }
}
