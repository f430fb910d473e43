use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tally::cli::Repl;
use tally::config::TallyPaths;
use tally::storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based expense and income tracker with per-category budgets",
    long_about = "tally is a terminal-based expense and income tracker. Commands use \
                  short field markers that may appear in any order, e.g. \
                  'add-expense a/12.50 c/food d/2025-10-10 n/lunch'. Records are kept \
                  newest-first and saved between sessions."
)]
struct Cli {
    /// Directory holding the session data file
    #[arg(long, value_name = "DIR", env = "TALLY_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    paths.ensure_directories()?;

    let books = storage::load(&paths.books_file())?;
    let mut repl = Repl::new(books, paths.books_file());
    repl.run()?;

    Ok(())
}
