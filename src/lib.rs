//! `articles` - article session tool library
//!
//! This crate provides the core functionality for the `articles` CLI: a
//! session over a local SQLite file that seeds two article rows, renames
//! one by row identifier, commits, and prints every row.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`session`] - The seed/rename/commit/print session
//! - [`model`] - Data types (Article, NewArticle)
//! - [`storage`] - `SQLite` database layer
//! - [`sync`] - JSONL import/export
//! - [`config`] - Configuration resolution
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`validation`] - Field checks for submitted rows

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod sync;
pub mod validation;

pub use error::{ArticlesError, Result};
pub use model::{Article, NewArticle};
pub use session::run_session;
pub use storage::SqliteStorage;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
