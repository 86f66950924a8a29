//! Source document loading.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::listings::Record;

/// Top-level shape of the source file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceDocument {
    Listings(Vec<Record>),
    Other(Value),
}

/// Read the source file and parse it into records.
///
/// Only I/O failures are errors. Invalid UTF-8 is replaced rather than
/// rejected.
pub async fn load_records(path: &Path) -> std::io::Result<Vec<Record>> {
    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_records(&text))
}

/// Parse a JSON array of records. Anything else yields an empty set.
pub fn parse_records(text: &str) -> Vec<Record> {
    match serde_json::from_str::<SourceDocument>(text) {
        Ok(SourceDocument::Listings(records)) => records,
        Ok(SourceDocument::Other(other)) => {
            tracing::debug!(kind = value_kind(&other), "Source is not a JSON array, using empty set");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Source is not valid JSON, using empty set");
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
