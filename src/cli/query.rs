use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::cli::{open_backend, OutputFormat};
use crate::client::UtaRestClient;
use crate::core::operation::{Invocation, Operation};
use crate::provider::dispatch;
use crate::web::serializer::{status_for, ErrorResponse};

#[derive(Args)]
pub struct QueryArgs {
    /// Operation name, e.g. `get_tx_exons` or `tx_exons`
    #[arg(required = true)]
    pub operation: Operation,

    /// Positional arguments of the operation
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Base URL of the uta-rest server [default: $UTAREST_URL or http://127.0.0.1:8000]
    #[arg(long, conflicts_with_all = ["fixture", "db_url"])]
    pub url: Option<String>,

    /// Run directly against a JSON fixture instead of a server
    #[arg(long, conflicts_with = "db_url")]
    pub fixture: Option<PathBuf>,

    /// Run directly against a UTA database instead of a server
    #[arg(long)]
    pub db_url: Option<String>,
}

/// Run a single operation and print its result
///
/// # Errors
///
/// Returns an error if the arguments do not fit the operation, the backend or
/// server cannot be reached, or the operation fails.
pub fn run(args: QueryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let value = rt.block_on(async move {
        if args.fixture.is_some() || args.db_url.is_some() {
            query_direct(&args).await
        } else {
            query_server(&args).await
        }
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Text => print!("{}", render_text(&value)),
    }
    Ok(())
}

async fn query_direct(args: &QueryArgs) -> anyhow::Result<Value> {
    let positional: Vec<&str> = args.args.iter().map(String::as_str).collect();
    let invocation = Invocation::from_positional(args.operation, &positional)?;

    let connector = open_backend(args.db_url.as_deref(), args.fixture.as_deref())?
        .ok_or_else(|| anyhow::anyhow!("no backend given"))?;
    let provider = connector.connect().await?;

    dispatch(provider.as_ref(), &invocation).await.map_err(|err| {
        anyhow::anyhow!(
            "{} ({}): {err}",
            status_for(&err).as_u16(),
            err.error_type()
        )
    })
}

async fn query_server(args: &QueryArgs) -> anyhow::Result<Value> {
    let client = match &args.url {
        Some(url) => UtaRestClient::new(url)?,
        None => UtaRestClient::from_env()?,
    };
    let positional: Vec<&str> = args.args.iter().map(String::as_str).collect();
    let response = client.call(args.operation, &positional).await?;

    if response.is_success() {
        return Ok(response.json()?);
    }
    match response.json::<ErrorResponse>() {
        Ok(body) => anyhow::bail!("{} ({}): {}", response.status(), body.error_type, body.error),
        Err(_) => anyhow::bail!("{}: {}", response.status(), response.text()),
    }
}

/// Plain-text rendering: scalars as-is, one `key<TAB>value` line per object
/// field, and rows of objects as a tab-separated table with a header line.
#[must_use]
pub fn render_text(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Array(rows) if rows.iter().all(Value::is_object) => {
            if let Some(Value::Object(first)) = rows.first() {
                let header: Vec<&str> = first.keys().map(String::as_str).collect();
                out.push_str(&header.join("\t"));
                out.push('\n');
            }
            for row in rows {
                if let Value::Object(map) = row {
                    let cells: Vec<String> = map.values().map(cell).collect();
                    out.push_str(&cells.join("\t"));
                    out.push('\n');
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                out.push_str(&cell(item));
                out.push('\n');
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                out.push_str(&format!("{key}\t{}\n", cell(item)));
            }
        }
        other => {
            out.push_str(&cell(other));
            out.push('\n');
        }
    }
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_rows_as_table() {
        let value = json!([
            {"tx_ac": "NM_1", "alt_ac": "NC_1", "cds_start_i": null},
            {"tx_ac": "NM_2", "alt_ac": "NC_1", "cds_start_i": 5},
        ]);
        assert_eq!(
            render_text(&value),
            "tx_ac\talt_ac\tcds_start_i\nNM_1\tNC_1\t\nNM_2\tNC_1\t5\n"
        );
    }

    #[test]
    fn test_render_scalars_and_objects() {
        assert_eq!(render_text(&json!("uta_20210129b")), "uta_20210129b\n");
        assert_eq!(render_text(&Value::Null), "\n");
        assert_eq!(
            render_text(&json!({"NC_000001.11": "1", "NC_000002.12": "2"})),
            "NC_000001.11\t1\nNC_000002.12\t2\n"
        );
        assert_eq!(render_text(&json!(["NP_1", "XP_1"])), "NP_1\nXP_1\n");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_text(&json!([])), "");
    }
}
