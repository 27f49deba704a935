//! List command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::format::format_article_line;
use crate::storage::SqliteStorage;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the query fails.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let storage = SqliteStorage::open(&config.db_path)?;
    let articles = storage.list_articles()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        for article in &articles {
            println!("{}", format_article_line(article));
        }
    }

    storage.close()
}
