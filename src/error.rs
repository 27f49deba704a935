//! Error types for `articles`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `articles` operations.
#[derive(Error, Debug)]
pub enum ArticlesError {
    // === Storage Errors ===
    /// The database file could not be opened or created.
    #[error("Failed to open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A schema constraint (e.g. `NOT NULL`) rejected a statement.
    #[error("Constraint violation: {reason}")]
    ConstraintViolation { reason: String },

    /// The transaction could not be committed; its changes are not durable.
    #[error("Commit failed: {0}")]
    Commit(#[source] rusqlite::Error),

    /// Any other SQLite failure.
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    // === Article Errors ===
    /// No row carries the given row identifier.
    #[error("Article not found: ID = {id}")]
    ArticleNotFound { id: i64 },

    /// A stored row lacks a required column (tables created without `NOT NULL`).
    #[error("Article ID = {id} has NULL {column}")]
    NullColumn { id: i64, column: &'static str },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Import Errors ===
    /// Failed to parse a line of a JSONL import file.
    #[error("JSONL parse error at line {line}: {reason}")]
    ImportParse { line: usize, reason: String },

    // === Operational Errors ===
    /// One or more `doctor` checks reported an error.
    #[error("Health check failed: {errors} check(s) in error")]
    HealthCheckFailed { errors: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for ArticlesError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation {
                    reason: message.unwrap_or_else(|| failure.to_string()),
                }
            }
            other => Self::Database(other),
        }
    }
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ArticlesError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// True when the error came from a schema constraint.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

/// Result type using `ArticlesError`.
pub type Result<T> = std::result::Result<T, ArticlesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_not_null_failure_maps_to_constraint_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL)")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t (name) VALUES (NULL)", [])
            .unwrap_err();

        let mapped = ArticlesError::from(err);
        assert!(mapped.is_constraint_violation());
        assert!(mapped.to_string().contains("NOT NULL constraint failed"));
    }

    #[test]
    fn test_syntax_error_maps_to_database() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute_batch("SELEC nonsense").unwrap_err();

        let mapped = ArticlesError::from(err);
        assert!(matches!(mapped, ArticlesError::Database(_)));
    }

    #[test]
    fn test_single_validation_error_is_flattened() {
        let err = ArticlesError::from_validation_errors(vec![ValidationError::new(
            "title",
            "cannot be empty",
        )]);
        assert_eq!(err.to_string(), "Validation failed: title: cannot be empty");
    }
}
