//! Add command implementation.

use tracing::info;

use crate::cli::AddArgs;
use crate::config::Config;
use crate::error::{ArticlesError, Result};
use crate::format::AddedArticle;
use crate::model::NewArticle;
use crate::storage::SqliteStorage;
use crate::validation::ArticleValidator;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the insert cannot be committed.
pub fn execute(args: &AddArgs, config: &Config, json: bool) -> Result<()> {
    let article = NewArticle::new(args.title.clone(), args.author.clone(), args.score);
    ArticleValidator::validate(&article).map_err(ArticlesError::from_validation_errors)?;

    let mut storage = SqliteStorage::open(&config.db_path)?;
    let id = storage.insert_article(&article)?;
    info!(id, "Added article");

    if json {
        println!("{}", serde_json::to_string(&AddedArticle { id })?);
    } else {
        println!("Added ID = {id}");
    }

    storage.close()
}
