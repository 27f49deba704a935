//! JSON Lines reading and writing for article import/export.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ArticlesError, Result};
use crate::model::{Article, NewArticle};

/// Read one `NewArticle` per non-blank line.
///
/// # Errors
///
/// Returns `ImportParse` with the 1-based line number for malformed JSON,
/// or `Io` if the file cannot be read.
pub fn read_jsonl(path: &Path) -> Result<Vec<NewArticle>> {
    let reader = BufReader::new(File::open(path)?);
    let mut articles = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let article = serde_json::from_str(&line).map_err(|e| ArticlesError::ImportParse {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        articles.push(article);
    }

    debug!(path = %path.display(), count = articles.len(), "Read JSONL");
    Ok(articles)
}

/// Write one article per line, replacing `path` atomically.
///
/// # Errors
///
/// Returns an error if the file cannot be written or renamed into place.
pub fn write_jsonl(path: &Path, articles: &[Article]) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ArticlesError::validation("path", "must name a file"))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        for article in articles {
            serde_json::to_writer(&mut writer, article)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    }
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), count = articles.len(), "Wrote JSONL");
    Ok(())
}
