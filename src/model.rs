//! Data types for `articles`.

use serde::{Deserialize, Serialize};

/// A stored row of the `articles` table.
///
/// `id` is the engine-assigned row identifier (`rowid`). It is stable for
/// the row's lifetime and is the only key updates address rows by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub score: Option<i64>,
}

/// A row submitted for insertion.
///
/// `title` and `author` are optional here so that incomplete records (for
/// example from an import file) can be represented; the schema rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

impl NewArticle {
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, score: Option<i64>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            score,
        }
    }
}

impl From<&Article> for NewArticle {
    fn from(article: &Article) -> Self {
        Self::new(article.title.clone(), article.author.clone(), article.score)
    }
}
