//! Run command implementation (the default when no command is given).

use crate::config::Config;
use crate::error::Result;
use crate::session;

/// Execute the session against the configured database file.
///
/// With `json`, the resulting rows are printed as a JSON array instead of
/// one line per row.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, a statement or the
/// commit fails, or output cannot be written.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    if json {
        let articles = session::run_session(&config.db_path, &mut std::io::sink())?;
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        session::run_session(&config.db_path, &mut out)?;
    }
    Ok(())
}
