//! JSONL import/export for `articles`.
//!
//! Import reads one article object per line; export writes every stored
//! row (including its row identifier) one per line.

pub mod jsonl;

pub use jsonl::{read_jsonl, write_jsonl};
