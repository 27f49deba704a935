//! The article session: seed two rows, rename one, commit, print all rows.
//!
//! Every run inserts the seed rows again; only the table creation is
//! idempotent. The rename always targets row identifier 2, so later runs
//! leave their own second row with its original title.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::format::format_article_line;
use crate::model::{Article, NewArticle};
use crate::storage::{SqliteStorage, insert_article, update_title};

/// Database file used when no path is configured.
pub const DEFAULT_DB_PATH: &str = "test.db";

/// Rows inserted by every session, as `(title, author, score)`.
pub const SEED_ARTICLES: [(&str, &str, i64); 2] =
    [("Title_1", "Author_1", 10), ("Title_2", "Author_2", 20)];

/// Row identifier the session renames.
pub const UPDATE_ROWID: i64 = 2;

/// Title written by the rename.
pub const NEW_TITLE: &str = "New title";

/// Run the session against the database file at `path`, writing one line
/// per row to `out`.
///
/// The connection is closed before returning on success, and dropped
/// (closing it) on any error.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, any statement fails,
/// the commit fails, or `out` cannot be written.
pub fn run_session<W: Write>(path: &Path, out: &mut W) -> Result<Vec<Article>> {
    let mut storage = SqliteStorage::open(path)?;
    let articles = run_session_on(&mut storage, out)?;
    storage.close()?;
    Ok(articles)
}

/// Run the session against already-open storage.
///
/// # Errors
///
/// See [`run_session`].
pub fn run_session_on<W: Write>(storage: &mut SqliteStorage, out: &mut W) -> Result<Vec<Article>> {
    storage.with_transaction(|tx| {
        for (title, author, score) in SEED_ARTICLES {
            insert_article(tx, &NewArticle::new(title, author, Some(score)))?;
        }
        update_title(tx, UPDATE_ROWID, NEW_TITLE)?;
        Ok(())
    })?;

    let articles = storage.list_articles()?;
    for article in &articles {
        writeln!(out, "{}", format_article_line(article))?;
    }
    info!(rows = articles.len(), "Session complete");

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArticlesError;
    use crate::logging::init_test_logging;
    use tempfile::TempDir;

    fn output_lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_fresh_database_session() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_DB_PATH);

        let mut out = Vec::new();
        let articles = run_session(&path, &mut out).unwrap();

        assert!(path.exists());
        assert_eq!(articles.len(), 2);
        assert_eq!(
            articles[0],
            Article {
                id: 1,
                title: "Title_1".to_string(),
                author: "Author_1".to_string(),
                score: Some(10),
            }
        );
        assert_eq!(
            articles[1],
            Article {
                id: 2,
                title: "New title".to_string(),
                author: "Author_2".to_string(),
                score: Some(20),
            }
        );
        assert_eq!(
            output_lines(&out),
            vec![
                "ID = 1, Title_1, Author_1, 10",
                "ID = 2, New title, Author_2, 20",
            ]
        );
    }

    #[test]
    fn test_second_run_appends_rows() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_DB_PATH);

        run_session(&path, &mut Vec::new()).unwrap();
        let mut out = Vec::new();
        let articles = run_session(&path, &mut out).unwrap();

        let ids: Vec<i64> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(articles[2].title, "Title_1");
        assert_eq!(articles[3].title, "Title_2");
        assert_eq!(
            output_lines(&out),
            vec![
                "ID = 1, Title_1, Author_1, 10",
                "ID = 2, New title, Author_2, 20",
                "ID = 3, Title_1, Author_1, 10",
                "ID = 4, Title_2, Author_2, 20",
            ]
        );
    }

    #[test]
    fn test_constraint_violation_leaves_committed_rows() {
        init_test_logging();
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        run_session_on(&mut storage, &mut Vec::new()).unwrap();

        let err = storage
            .insert_article(&NewArticle {
                title: None,
                author: Some("Author_3".to_string()),
                score: Some(30),
            })
            .unwrap_err();
        assert!(matches!(err, ArticlesError::ConstraintViolation { .. }));

        let err = storage
            .insert_article(&NewArticle {
                title: Some("Title_3".to_string()),
                author: None,
                score: None,
            })
            .unwrap_err();
        assert!(err.is_constraint_violation());

        let articles = storage.list_articles().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, NEW_TITLE);
    }

    #[test]
    fn test_open_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join(DEFAULT_DB_PATH);

        let mut out = Vec::new();
        assert!(run_session(&path, &mut out).is_err());
        assert!(out.is_empty());
    }
}
