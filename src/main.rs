/// Main entry point for Mind Dump
///
/// This file sets up logging, parses command line arguments and opens the
/// window. Logs go to a file because the window owns the terminal.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};

use mind_dump::{MindDump, DEFAULT_DB_NAME};

/// Get the log file path with a fallback to the temp directory
fn get_log_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_dirs = [
        dirs::data_dir().map(|mut p| {
            p.push("mind_dump");
            p
        }),
        dirs::home_dir().map(|mut p| {
            p.push(".mind_dump");
            p
        }),
    ];

    for dir in potential_dirs.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            return Ok(dir.join("mind_dump.log"));
        }
    }

    let mut temp_path = std::env::temp_dir();
    temp_path.push("mind_dump");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("mind_dump.log");
    Ok(temp_path)
}

/// Command line arguments for Mind Dump
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses mind_dump.db in the current directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_path()?)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("mind_dump={}", log_level))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Mind Dump");

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => PathBuf::from(DEFAULT_DB_NAME),
    };

    info!("Using database at: {}", db_path.display());

    let app = MindDump::new(db_path)?;
    if let Err(e) = app.run() {
        error!("Mind Dump stopped: {}", e);
        return Err(e.into());
    }

    info!("Mind Dump shutdown complete");
    Ok(())
}
