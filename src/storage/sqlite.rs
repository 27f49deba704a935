//! `SqliteStorage`: the owned connection and its transaction discipline.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction};
use tracing::{debug, warn};

use crate::error::{ArticlesError, Result};
use crate::model::{Article, NewArticle};
use crate::storage::articles::{self, TableDump};

/// SQLite-backed article storage.
///
/// Owns a single connection. Dropping the storage closes the connection,
/// so it is released on every exit path; `close()` does the same but
/// reports close errors.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStorage {
    /// Open (creating if absent) the database file and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns `Open` if the file cannot be opened or created, or a
    /// database error if the schema cannot be applied.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Open database");
        let conn = Connection::open(path).map_err(|source| ArticlesError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        articles::init_articles_table(&conn)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        articles::init_articles_table(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, `None` for in-memory storage.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` inside a transaction and commit it.
    ///
    /// If `f` fails the transaction is rolled back and nothing it did is
    /// visible.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or `Commit` if the commit fails.
    pub fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self.conn.transaction()?;
        debug!("BEGIN TRANSACTION");

        match f(&tx) {
            Ok(value) => {
                tx.commit().map_err(ArticlesError::Commit)?;
                debug!("COMMIT TRANSACTION");
                Ok(value)
            }
            Err(err) => {
                // Dropping `tx` rolls back.
                drop(tx);
                debug!(error = %err, "ROLLBACK TRANSACTION");
                Err(err)
            }
        }
    }

    /// Insert one article in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` for missing required fields.
    pub fn insert_article(&mut self, article: &NewArticle) -> Result<i64> {
        self.with_transaction(|tx| articles::insert_article(tx, article))
    }

    /// Insert many articles, committing every `batch_size` rows.
    ///
    /// A failing batch is rolled back; batches committed before it remain.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when `batch_size` is zero, or the first
    /// insert error encountered.
    pub fn insert_many(&mut self, batch: &[NewArticle], batch_size: usize) -> Result<Vec<i64>> {
        if batch_size == 0 {
            return Err(ArticlesError::validation("batch_size", "must be > 0"));
        }

        let mut ids = Vec::with_capacity(batch.len());
        for chunk in batch.chunks(batch_size) {
            let chunk_ids = self.with_transaction(|tx| {
                chunk
                    .iter()
                    .map(|article| articles::insert_article(tx, article))
                    .collect::<Result<Vec<_>>>()
            })?;
            debug!(count = chunk_ids.len(), "Inserted batch");
            ids.extend(chunk_ids);
        }
        Ok(ids)
    }

    /// Set the title of one row, in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns `ArticleNotFound` when no row has this identifier.
    pub fn update_title(&mut self, id: i64, title: &str) -> Result<()> {
        let changed = self.with_transaction(|tx| articles::update_title(tx, id, title))?;
        if changed == 0 {
            return Err(ArticlesError::ArticleNotFound { id });
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_article(&self, id: i64) -> Result<Option<Article>> {
        articles::get_article(&self.conn, id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_articles(&self) -> Result<Vec<Article>> {
        articles::list_articles(&self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_articles(&self) -> Result<usize> {
        articles::count_articles(&self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn dump_table(&self) -> Result<TableDump> {
        articles::dump_table(&self.conn)
    }

    /// Close the connection, surfacing any error SQLite reports.
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection cannot be closed cleanly.
    pub fn close(self) -> Result<()> {
        debug!("Close database");
        self.conn.close().map_err(|(_, err)| {
            warn!(error = %err, "Failed to close database");
            ArticlesError::Database(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fresh.db");
        assert!(!path.exists());

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.count_articles().unwrap(), 0);
        assert_eq!(storage.path(), Some(path.as_path()));
        storage.close().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no").join("such").join("dir.db");

        assert!(SqliteStorage::open(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_transaction_rolls_back() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .insert_article(&NewArticle::new("Kept", "A", Some(1)))
            .unwrap();

        let result = storage.with_transaction(|tx| {
            articles::insert_article(tx, &NewArticle::new("Discarded", "A", None))?;
            articles::insert_article(tx, &NewArticle::default())
        });
        assert!(result.unwrap_err().is_constraint_violation());

        let articles = storage.list_articles().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
    }

    #[test]
    fn test_insert_many_commits_batches_before_failure() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let batch = vec![
            NewArticle::new("T1", "A1", None),
            NewArticle::new("T2", "A2", None),
            NewArticle::new("T3", "A3", None),
            NewArticle {
                title: None,
                author: Some("A4".to_string()),
                score: None,
            },
        ];

        let err = storage.insert_many(&batch, 2).unwrap_err();
        assert!(err.is_constraint_violation());

        // First batch committed, second (T3 + invalid) rolled back.
        let titles: Vec<String> = storage
            .list_articles()
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["T1", "T2"]);
    }

    #[test]
    fn test_insert_many_returns_ids_in_order() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let batch: Vec<NewArticle> = (1..=5)
            .map(|n| NewArticle::new(format!("T{n}"), "A", Some(n)))
            .collect();

        let ids = storage.insert_many(&batch, 2).unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_many_rejects_zero_batch_size() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let err = storage
            .insert_many(&[NewArticle::new("T", "A", None)], 0)
            .unwrap_err();
        assert!(matches!(err, ArticlesError::Validation { .. }));
        assert_eq!(storage.count_articles().unwrap(), 0);
    }

    #[test]
    fn test_update_title_missing_row() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let err = storage.update_title(3, "Nope").unwrap_err();
        assert!(matches!(err, ArticlesError::ArticleNotFound { id: 3 }));
    }

    #[test]
    fn test_rows_persist_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("persist.db");

        let mut storage = SqliteStorage::open(&path).unwrap();
        storage
            .insert_article(&NewArticle::new("Durable", "A", Some(5)))
            .unwrap();
        drop(storage);

        let reopened = SqliteStorage::open(&path).unwrap();
        let article = reopened.get_article(1).unwrap().expect("row 1");
        assert_eq!(article.title, "Durable");
        assert_eq!(article.score, Some(5));
    }
}
