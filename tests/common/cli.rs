//! Helpers for driving the `articles` binary inside a throwaway directory.

use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::TempDir;

/// A temp directory the binary runs in; removed on drop.
pub struct ArticlesWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl ArticlesWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Path of the default database file inside the workspace.
    pub fn default_db(&self) -> PathBuf {
        self.root.join("test.db")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `articles` with `args` in the workspace, without inherited config.
pub fn run_articles<I, S>(workspace: &ArticlesWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_articles_with_env(workspace, args, &[], label)
}

/// Like `run_articles`, with `envs` set on top of the cleared config.
pub fn run_articles_with_env<I, S>(
    workspace: &ArticlesWorkspace,
    args: I,
    envs: &[(&str, &str)],
    label: &str,
) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("articles")
        .expect("articles binary")
        .current_dir(&workspace.root)
        .env_remove("ARTICLES_DB")
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .expect("run articles");

    let result = CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !result.status.success() {
        eprintln!(
            "[{label}] exit {:?}\nstdout:\n{}\nstderr:\n{}",
            result.status.code(),
            result.stdout,
            result.stderr
        );
    }
    result
}
