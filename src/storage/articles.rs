//! Article row storage (schema, insertion, update, retrieval).
//!
//! These functions take a plain `&Connection` so they run equally against
//! a connection or an open `Transaction` (which derefs to one).

use crate::error::{ArticlesError, Result};
use crate::model::{Article, NewArticle};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Idempotent DDL for the `articles` table. Rows are addressed by the
/// implicit `rowid`.
pub const ARTICLES_TABLE_SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS articles (
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    score INTEGER
)
";

const SELECT_ARTICLES: &str = "SELECT rowid, title, author, score FROM articles";

/// Every column of a table together with the rows, dynamically typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDump {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Create the `articles` table if it does not exist.
///
/// # Errors
///
/// Returns an error if the DDL fails.
pub fn init_articles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(ARTICLES_TABLE_SCHEMA)?;
    Ok(())
}

/// Insert one article and return the row identifier the engine assigned.
///
/// # Errors
///
/// Returns `ConstraintViolation` when `title` or `author` is missing.
pub fn insert_article(conn: &Connection, article: &NewArticle) -> Result<i64> {
    conn.execute(
        "INSERT INTO articles (title, author, score) VALUES (?1, ?2, ?3)",
        params![article.title, article.author, article.score],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the title of the row with the given row identifier.
///
/// Returns the number of rows changed: `0` when no row matches.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn update_title(conn: &Connection, id: i64, title: &str) -> Result<usize> {
    let changed = conn.execute(
        "UPDATE articles SET title = ?1 WHERE rowid = ?2",
        params![title, id],
    )?;
    Ok(changed)
}

/// Fetch a single article by row identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_article(conn: &Connection, id: i64) -> Result<Option<Article>> {
    let raw = conn
        .query_row(
            &format!("{SELECT_ARTICLES} WHERE rowid = ?1"),
            [id],
            raw_from_row,
        )
        .optional()?;
    raw.map(RawArticle::into_article).transpose()
}

/// All articles in row identifier order.
///
/// # Errors
///
/// Returns `NullColumn` for a row whose title or author is NULL (possible
/// in tables created without the `NOT NULL` constraints), or an error if
/// the query fails.
pub fn list_articles(conn: &Connection) -> Result<Vec<Article>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ARTICLES} ORDER BY rowid"))?;
    let rows = stmt.query_map([], raw_from_row)?;

    let mut articles = Vec::new();
    for row in rows {
        articles.push(row?.into_article()?);
    }
    Ok(articles)
}

/// Count stored articles.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_articles(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// `SELECT rowid, * FROM articles`, keeping every value's storage class.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn dump_table(conn: &Connection) -> Result<TableDump> {
    let mut stmt = conn.prepare("SELECT rowid, * FROM articles ORDER BY rowid")?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let column_count = columns.len();

    let mut rows = stmt.query([])?;
    let mut dump_rows = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(row.get::<_, Value>(idx)?);
        }
        dump_rows.push(values);
    }

    Ok(TableDump {
        columns,
        rows: dump_rows,
    })
}

/// A row as read, before the required columns are checked for NULL.
struct RawArticle {
    id: i64,
    title: Option<String>,
    author: Option<String>,
    score: Option<i64>,
}

impl RawArticle {
    fn into_article(self) -> Result<Article> {
        let id = self.id;
        let title = self
            .title
            .ok_or(ArticlesError::NullColumn { id, column: "title" })?;
        let author = self
            .author
            .ok_or(ArticlesError::NullColumn { id, column: "author" })?;
        Ok(Article {
            id,
            title,
            author,
            score: self.score,
        })
    }
}

fn raw_from_row(row: &Row<'_>) -> rusqlite::Result<RawArticle> {
    Ok(RawArticle {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        score: row.get(3)?,
    })
}
