//! Dump command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::format::{DumpOutput, format_dump_row};
use crate::storage::SqliteStorage;

/// Print every column of every row, header first.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the query fails.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let storage = SqliteStorage::open(&config.db_path)?;
    let dump = storage.dump_table()?;

    if json {
        println!("{}", serde_json::to_string(&DumpOutput::from(&dump))?);
    } else {
        println!("{}", dump.columns.join(", "));
        for row in &dump.rows {
            println!("{}", format_dump_row(row));
        }
    }

    storage.close()
}
