//! Validation helpers for `articles`.
//!
//! These routines check submitted rows before they reach storage and
//! return structured validation errors. The schema's `NOT NULL`
//! constraints remain the final word on what the table accepts.

use crate::error::ValidationError;
use crate::model::NewArticle;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 500;
/// Longest accepted author, in characters.
pub const MAX_AUTHOR_LEN: usize = 200;

/// Validates submitted article fields.
pub struct ArticleValidator;

impl ArticleValidator {
    /// Validate an article and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(article: &NewArticle) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Title: Required, max 500 chars.
        check_title(&mut errors, article.title.as_deref());

        // Author: Required, max 200 chars.
        check_required(
            &mut errors,
            "author",
            article.author.as_deref(),
            MAX_AUTHOR_LEN,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a replacement title with the same rules `validate` applies.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` for a blank or over-long title.
    pub fn validate_title(title: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_title(&mut errors, Some(title));
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_title(errors: &mut Vec<ValidationError>, title: Option<&str>) {
    check_required(errors, "title", title, MAX_TITLE_LEN);
}

fn check_required(
    errors: &mut Vec<ValidationError>,
    field: &str,
    value: Option<&str>,
    max_len: usize,
) {
    match value {
        None => errors.push(ValidationError::new(field, "is required")),
        Some(v) if v.trim().is_empty() => {
            errors.push(ValidationError::new(field, "cannot be empty"));
        }
        Some(v) if v.chars().count() > max_len => {
            errors.push(ValidationError::new(
                field,
                format!("exceeds {max_len} characters"),
            ));
        }
        Some(_) => {}
    }
}
