//! rowdb REPL binary.
//!
//! Opens (or creates) a database file and reads statements from stdin.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rowdb::repl::{Repl, SessionEnd};
use rowdb::Table;
use tracing_subscriber::{fmt, EnvFilter};

/// rowdb
#[derive(Parser, Debug)]
#[command(name = "rowdb")]
#[command(about = "A minimal persistent row store")]
#[command(version)]
struct Args {
    /// Database file, created if it does not exist
    filename: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout belongs to the REPL.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let table = match Table::open(&args.filename) {
        Ok(table) => table,
        Err(e) => {
            // The REPL's own message goes to stdout; the cause goes to the log.
            println!("Unable to open file");
            tracing::error!("Failed to open {}: {}", args.filename.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock());
    match repl.run(table) {
        Ok(SessionEnd::Exited) => ExitCode::SUCCESS,
        Ok(SessionEnd::InputClosed) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
