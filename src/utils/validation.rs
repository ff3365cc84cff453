//! Centralized validation and sequence helper functions.

use crate::core::error::ProviderError;

/// Normalize a sequence for digesting: drop whitespace and `*`, upper-case.
///
/// # Errors
///
/// Returns `ProviderError::Invalid` if the normalized sequence contains
/// anything other than ASCII letters.
///
/// # Examples
///
/// ```
/// use uta_rest::utils::validation::normalize_sequence;
///
/// assert_eq!(normalize_sequence("mrak wrk*").unwrap(), "MRAKWRK");
/// assert!(normalize_sequence("123").is_err());
/// ```
pub fn normalize_sequence(seq: &str) -> Result<String, ProviderError> {
    let normalized: String = seq
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '*')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(normalized)
    } else {
        Err(ProviderError::Invalid(format!(
            "normalized sequence contains non-alphabetic characters: {seq}"
        )))
    }
}

/// MD5 digest (lowercase hex) of the normalized sequence, the UTA `seq_id`.
///
/// # Errors
///
/// See [`normalize_sequence`].
pub fn seq_md5(seq: &str) -> Result<String, ProviderError> {
    let normalized = normalize_sequence(seq)?;
    let digest = md5::compute(normalized.as_bytes());
    Ok(format!("{digest:x}"))
}

/// Slice `seq` to the interbase interval `[start, end)`.
///
/// Missing bounds default to the sequence ends, bounds past the end clamp to the
/// length, and an empty or inverted interval yields the empty string.
#[must_use]
pub fn slice_sequence(seq: &str, start: Option<i64>, end: Option<i64>) -> String {
    let len = seq.len();
    let clamp = |pos: i64| usize::try_from(pos.max(0)).map_or(len, |p| p.min(len));
    let start = start.map_or(0, clamp);
    let end = end.map_or(len, clamp);
    if start >= end {
        return String::new();
    }
    seq.get(start..end).unwrap_or_default().to_string()
}

/// Check that a PostgreSQL schema name is a plain identifier, safe to inline in SQL.
///
/// # Examples
///
/// ```
/// use uta_rest::utils::validation::is_valid_schema_name;
///
/// assert!(is_valid_schema_name("uta_20210129b"));
/// assert!(!is_valid_schema_name("uta; drop table gene"));
/// ```
#[must_use]
pub fn is_valid_schema_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && name.len() <= 63
}
