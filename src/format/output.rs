use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::text::format_value;
use crate::storage::TableDump;

/// Result of `add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedArticle {
    pub id: i64,
}

/// Result of `import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub batches: usize,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
}

/// Result of `export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub exported: usize,
    pub path: PathBuf,
}

/// Table dump for `dump --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl From<&TableDump> for DumpOutput {
    fn from(dump: &TableDump) -> Self {
        Self {
            columns: dump.columns.clone(),
            rows: dump
                .rows
                .iter()
                .map(|row| row.iter().map(value_to_json).collect())
                .collect(),
        }
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Real(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Blob(_) => serde_json::Value::String(format_value(value)),
    }
}
