//! `SQLite` storage layer for `articles`.
//!
//! This module provides the persistence layer using `SQLite` with:
//! - Idempotent schema creation on open
//! - Transaction discipline for atomic writes (rollback on failure)
//! - Batched inserts with a commit per batch
//!
//! # Submodules
//!
//! - [`articles`] - Article row statements (schema, insert, update, queries)
//! - [`sqlite`] - The owned connection wrapper

pub mod articles;
pub mod sqlite;

pub use articles::{
    ARTICLES_TABLE_SCHEMA, TableDump, count_articles, dump_table, get_article, init_articles_table,
    insert_article, list_articles, update_title,
};
pub use sqlite::SqliteStorage;
