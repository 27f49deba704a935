//! Configuration management for `articles`.
//!
//! Values come from CLI flags (clap also reads `ARTICLES_DB` for the
//! database path) layered over built-in defaults.

use std::path::PathBuf;

use crate::error::{ArticlesError, Result};
use crate::session::DEFAULT_DB_PATH;

/// Rows per committed transaction during bulk import.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub batch_size: Option<usize>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Apply overrides on top of the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the database path is empty or the batch size is zero.
    pub fn resolve(overrides: &CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(db) = &overrides.db {
            if db.as_os_str().is_empty() {
                return Err(ArticlesError::Config(
                    "database path cannot be empty".to_string(),
                ));
            }
            config.db_path.clone_from(db);
        }

        if let Some(batch_size) = overrides.batch_size {
            if batch_size == 0 {
                return Err(ArticlesError::Config("batch size must be > 0".to_string()));
            }
            config.batch_size = batch_size;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&CliOverrides::default()).unwrap();
        assert_eq!(config.db_path, PathBuf::from("test.db"));
        assert_eq!(config.batch_size, 1000);
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = CliOverrides {
            db: Some(PathBuf::from("other.db")),
            batch_size: Some(5),
        };
        let config = Config::resolve(&overrides).unwrap();
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.batch_size, 5);
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let empty_path = CliOverrides {
            db: Some(PathBuf::new()),
            batch_size: None,
        };
        assert!(matches!(
            Config::resolve(&empty_path),
            Err(ArticlesError::Config(_))
        ));

        let zero_batch = CliOverrides {
            db: None,
            batch_size: Some(0),
        };
        assert!(matches!(
            Config::resolve(&zero_batch),
            Err(ArticlesError::Config(_))
        ));
    }
}
