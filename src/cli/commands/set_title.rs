//! Set-title command implementation.

use crate::cli::SetTitleArgs;
use crate::config::Config;
use crate::error::{ArticlesError, Result};
use crate::format::format_article_line;
use crate::storage::SqliteStorage;
use crate::validation::ArticleValidator;

/// Execute the set-title command.
///
/// # Errors
///
/// Returns `Validation` for a blank or over-long title, `ArticleNotFound`
/// when no row has the given ID, or a database error.
pub fn execute(args: &SetTitleArgs, config: &Config) -> Result<()> {
    ArticleValidator::validate_title(&args.title).map_err(ArticlesError::from_validation_errors)?;

    let mut storage = SqliteStorage::open(&config.db_path)?;
    storage.update_title(args.id, &args.title)?;

    if let Some(article) = storage.get_article(args.id)? {
        println!("{}", format_article_line(&article));
    }

    storage.close()
}
