//! Text formatting functions for `articles`.
//!
//! Plain, uncoloured lines suitable for piping.

use rusqlite::types::Value;

use crate::model::Article;

/// Rendering of a SQL `NULL`.
pub const NULL_TEXT: &str = "NULL";

/// Format an optional score, `NULL` when absent.
#[must_use]
pub fn format_score(score: Option<i64>) -> String {
    score.map_or_else(|| NULL_TEXT.to_string(), |s| s.to_string())
}

/// Format a single article line.
///
/// Format: `ID = {id}, {title}, {author}, {score}`
#[must_use]
pub fn format_article_line(article: &Article) -> String {
    format!(
        "ID = {}, {}, {}, {}",
        article.id,
        article.title,
        article.author,
        format_score(article.score),
    )
}

/// Format a dynamically typed column value.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_TEXT.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

/// Join a row's values with `", "`.
#[must_use]
pub fn format_dump_row(values: &[Value]) -> String {
    values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_article_line() {
        let article = Article {
            id: 2,
            title: "New title".to_string(),
            author: "Author_2".to_string(),
            score: Some(20),
        };
        assert_eq!(
            format_article_line(&article),
            "ID = 2, New title, Author_2, 20"
        );
    }

    #[test]
    fn test_format_article_line_without_score() {
        let article = Article {
            id: 9,
            title: "T".to_string(),
            author: "A".to_string(),
            score: None,
        };
        assert_eq!(format_article_line(&article), "ID = 9, T, A, NULL");
    }

    #[test]
    fn test_format_dump_row_mixed_values() {
        let row = vec![
            Value::Integer(1),
            Value::Text("Title".to_string()),
            Value::Real(2.5),
            Value::Blob(vec![0, 1, 2]),
            Value::Null,
        ];
        assert_eq!(format_dump_row(&row), "1, Title, 2.5, <3 bytes>, NULL");
    }
}
