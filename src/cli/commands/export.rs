//! Export command implementation.

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::ExportSummary;
use crate::storage::SqliteStorage;
use crate::sync::write_jsonl;

/// Execute the export command.
///
/// # Errors
///
/// Returns an error if the database cannot be read or the file cannot be written.
pub fn execute(args: &ExportArgs, config: &Config, json: bool) -> Result<()> {
    let storage = SqliteStorage::open(&config.db_path)?;
    let articles = storage.list_articles()?;
    storage.close()?;

    write_jsonl(&args.file, &articles)?;

    if json {
        let summary = ExportSummary {
            exported: articles.len(),
            path: args.file.clone(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "Exported {} article(s) to {}",
            articles.len(),
            args.file.display()
        );
    }

    Ok(())
}
