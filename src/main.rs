//! `articles` - article session tool over an embedded SQLite file.
//!
//! With no arguments: open `test.db`, ensure the `articles` table, insert
//! two rows, rename row 2, commit, and print every row.

use articles::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
