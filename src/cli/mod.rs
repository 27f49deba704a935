//! Command-line interface for `articles`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{CliOverrides, Config};
use crate::logging;

/// `articles` - article session tool over an embedded SQLite file.
#[derive(Parser, Debug)]
#[command(name = "articles")]
#[command(
    author,
    version,
    about = "Article session tool over an embedded SQLite file",
    long_about = None,
    after_help = "Without a command, runs the session: seed two rows, rename row 2, commit, print all rows."
)]
pub struct Cli {
    /// Database file (created if absent)
    #[arg(long, global = true, env = "ARTICLES_DB")]
    pub db: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the session (the default)
    Run,

    /// List all articles
    List,

    /// Add an article
    Add(AddArgs),

    /// Set the title of an article by row ID
    SetTitle(SetTitleArgs),

    /// Import articles from a JSONL file
    Import(ImportArgs),

    /// Export all articles to a JSONL file
    Export(ExportArgs),

    /// Print every column of every row
    Dump,

    /// Check the database file and schema
    Doctor,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Article title
    pub title: String,

    /// Article author
    pub author: String,

    /// Optional score
    #[arg(long, allow_negative_numbers = true)]
    pub score: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct SetTitleArgs {
    /// Row ID of the article
    pub id: i64,

    /// New title
    pub title: String,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// JSONL file, one article object per line
    pub file: PathBuf,

    /// Rows per committed transaction
    #[arg(long)]
    pub batch_size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination JSONL file
    pub file: PathBuf,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let batch_size = match &self.command {
            Some(Commands::Import(args)) => args.batch_size,
            _ => None,
        };
        CliOverrides {
            db: self.db.clone(),
            batch_size,
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let config = Config::resolve(&cli.overrides())?;
    tracing::debug!(db = %config.db_path.display(), "Resolved configuration");

    let json = cli.json;
    match cli.command {
        None | Some(Commands::Run) => commands::run::execute(&config, json)?,
        Some(Commands::List) => commands::list::execute(&config, json)?,
        Some(Commands::Add(args)) => commands::add::execute(&args, &config, json)?,
        Some(Commands::SetTitle(args)) => commands::set_title::execute(&args, &config)?,
        Some(Commands::Import(args)) => commands::import::execute(&args, &config, json)?,
        Some(Commands::Export(args)) => commands::export::execute(&args, &config, json)?,
        Some(Commands::Dump) => commands::dump::execute(&config, json)?,
        Some(Commands::Doctor) => commands::doctor::execute(&config, json)?,
        Some(Commands::Version) => commands::version::execute(json)?,
    }

    Ok(())
}
