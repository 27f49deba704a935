//! Output formatting for `articles`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Stdout carries command output only; diagnostics go through logging.
//!
//! # JSON Output Types
//!
//! - [`AddedArticle`] - Row identifier assigned by `add`
//! - [`ImportSummary`] - Counts for `import`
//! - [`ExportSummary`] - Counts for `export`
//! - [`DumpOutput`] - Columns and rows for `dump`

mod output;
mod text;

pub use output::{AddedArticle, DumpOutput, ExportSummary, ImportSummary};
pub use text::{NULL_TEXT, format_article_line, format_dump_row, format_score, format_value};
