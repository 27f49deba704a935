//! Import command implementation.

use tracing::info;

use crate::cli::ImportArgs;
use crate::config::Config;
use crate::error::{ArticlesError, Result, ValidationError};
use crate::format::ImportSummary;
use crate::storage::SqliteStorage;
use crate::sync::read_jsonl;
use crate::validation::ArticleValidator;

/// Execute the import command.
///
/// Every record is validated before anything is written. Rows are then
/// inserted in transactions of `config.batch_size`; a failing batch is
/// rolled back while earlier batches stay committed.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed, a record is invalid, or
/// an insert fails.
pub fn execute(args: &ImportArgs, config: &Config, json: bool) -> Result<()> {
    let articles = read_jsonl(&args.file)?;

    let mut errors = Vec::new();
    for (idx, article) in articles.iter().enumerate() {
        if let Err(record_errors) = ArticleValidator::validate(article) {
            errors.extend(record_errors.into_iter().map(|e| {
                ValidationError::new(format!("record {}: {}", idx + 1, e.field), e.message)
            }));
        }
    }
    if !errors.is_empty() {
        return Err(ArticlesError::from_validation_errors(errors));
    }

    let mut storage = SqliteStorage::open(&config.db_path)?;
    let ids = storage.insert_many(&articles, config.batch_size)?;

    let summary = ImportSummary {
        imported: ids.len(),
        batches: ids.len().div_ceil(config.batch_size),
        first_id: ids.first().copied(),
        last_id: ids.last().copied(),
    };
    info!(
        imported = summary.imported,
        batches = summary.batches,
        "Import complete"
    );

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("Imported {} article(s)", summary.imported);
    }

    storage.close()
}
