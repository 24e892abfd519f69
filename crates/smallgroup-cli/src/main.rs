//! smallgroup - split the people present today into diverse discussion groups.
//!
//! Reads a roster document, picks out who is marked present on the meeting
//! date, and prints a copy/paste-ready group list on stdout. Logs and warnings
//! go to stderr so the export can be piped straight into a clipboard tool.

mod cli;
mod commands;
mod config;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Command};
use config::Config;

/// Default log file name when `--log-file` points at a directory
const LOG_FILE_NAME: &str = "smallgroup.log";

/// Initialize the tracing subscriber for logging.
///
/// Returns the appender guard when logging to a file; it must live until exit
/// so buffered lines are flushed.
fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let (dir, name) = if path.is_dir() {
                (path, Path::new(LOG_FILE_NAME))
            } else {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let name = path
                    .file_name()
                    .map(Path::new)
                    .unwrap_or_else(|| Path::new(LOG_FILE_NAME));
                (dir, name)
            };
            let appender = tracing_appender::rolling::daily(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref());
    info!("smallgroup starting");

    let config = Config::load()?;

    match cli.command {
        Command::Divide(args) => commands::divide(args, &config),
        Command::Present(args) => commands::present(args, &config),
        Command::Config(args) => commands::config(args, config),
    }
}
