//! Doctor command implementation.

use crate::config::Config;
use crate::error::{ArticlesError, Result};
use rusqlite::{Connection, OpenFlags};
use serde::Serialize;

/// Columns the `articles` table must have, with whether each is `NOT NULL`.
const REQUIRED_COLUMNS: [(&str, bool); 3] = [("title", true), ("author", true), ("score", false)];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
struct DoctorReport {
    ok: bool,
    checks: Vec<CheckResult>,
}

fn push_check(
    checks: &mut Vec<CheckResult>,
    name: &str,
    status: CheckStatus,
    message: Option<String>,
    details: Option<serde_json::Value>,
) {
    checks.push(CheckResult {
        name: name.to_string(),
        status,
        message,
        details,
    });
}

fn error_count(checks: &[CheckResult]) -> usize {
    checks
        .iter()
        .filter(|check| matches!(check.status, CheckStatus::Error))
        .count()
}

fn print_report(report: &DoctorReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("articles doctor");
    for check in &report.checks {
        let label = match check.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Warn => "WARN",
            CheckStatus::Error => "ERROR",
        };
        if let Some(message) = &check.message {
            println!("{label} {}: {}", check.name, message);
        } else {
            println!("{label} {}", check.name);
        }
    }
    Ok(())
}

/// `(name, notnull)` for every column of `table`.
fn collect_table_columns(conn: &Connection, table: &str) -> Result<Vec<(String, bool)>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(1)?, row.get::<_, i64>(3)? != 0))
    })?;
    let mut columns = Vec::new();
    for row in rows {
        columns.push(row?);
    }
    Ok(columns)
}

fn required_schema_checks(conn: &Connection, checks: &mut Vec<CheckResult>) -> Result<()> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'articles')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        push_check(
            checks,
            "schema.tables",
            CheckStatus::Error,
            Some("Missing table: articles".to_string()),
            None,
        );
        return Ok(());
    }
    push_check(checks, "schema.tables", CheckStatus::Ok, None, None);

    let columns = collect_table_columns(conn, "articles")?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !columns.iter().any(|(col, _)| col == *name))
        .collect();
    if missing.is_empty() {
        push_check(checks, "schema.columns", CheckStatus::Ok, None, None);
    } else {
        push_check(
            checks,
            "schema.columns",
            CheckStatus::Error,
            Some(format!("Missing columns: {}", missing.join(", "))),
            Some(serde_json::json!({ "missing": missing })),
        );
    }

    let nullable: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|(_, required)| *required)
        .map(|(name, _)| *name)
        .filter(|name| {
            columns
                .iter()
                .any(|(col, notnull)| col == *name && !notnull)
        })
        .collect();
    if nullable.is_empty() {
        push_check(checks, "schema.not_null", CheckStatus::Ok, None, None);
    } else {
        push_check(
            checks,
            "schema.not_null",
            CheckStatus::Warn,
            Some(format!("Columns accept NULL: {}", nullable.join(", "))),
            Some(serde_json::json!({ "nullable": nullable })),
        );
    }

    Ok(())
}

fn check_integrity(conn: &Connection, checks: &mut Vec<CheckResult>) -> Result<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    if result == "ok" {
        push_check(checks, "db.integrity", CheckStatus::Ok, None, None);
    } else {
        push_check(
            checks,
            "db.integrity",
            CheckStatus::Error,
            Some(result),
            None,
        );
    }
    Ok(())
}

fn collect_checks(config: &Config) -> Result<Vec<CheckResult>> {
    let mut checks = Vec::new();
    let db_path = &config.db_path;

    if !db_path.exists() {
        push_check(
            &mut checks,
            "db.exists",
            CheckStatus::Error,
            Some(format!("Missing {}", db_path.display())),
            None,
        );
        return Ok(checks);
    }
    push_check(&mut checks, "db.exists", CheckStatus::Ok, None, None);

    match Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY) {
        Ok(conn) => {
            required_schema_checks(&conn, &mut checks)?;
            check_integrity(&conn, &mut checks)?;
        }
        Err(err) => {
            push_check(
                &mut checks,
                "db.open",
                CheckStatus::Error,
                Some(format!("Failed to open DB read-only: {err}")),
                Some(serde_json::json!({ "path": db_path.display().to_string() })),
            );
        }
    }

    Ok(checks)
}

/// Execute the doctor command.
///
/// Never creates or modifies the database file.
///
/// # Errors
///
/// Returns `HealthCheckFailed` if any check is in error, or an error if a
/// check query fails or the report cannot be serialized.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let checks = collect_checks(config)?;
    let errors = error_count(&checks);
    let report = DoctorReport {
        ok: errors == 0,
        checks,
    };
    print_report(&report, json)?;

    if errors > 0 {
        return Err(ArticlesError::HealthCheckFailed { errors });
    }
    Ok(())
}
