//! Pipekit CLI
//!
//! Command-line interface for building, checking and normalizing pipeline
//! service request payloads.

mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pipekit")]
#[command(about = "Pipeline service request toolkit", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Formats to leave unchecked (comma-separated, e.g. date-time,uri)
    #[arg(long, env = "PIPEKIT_SKIP_FORMATS", value_delimiter = ',', global = true)]
    skip_formats: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::with_skipped_formats(&cli.skip_formats)?;
    tracing::debug!(skipped = ?cli.skip_formats, "Loaded format registry");

    handle_command(cli.command, &config)
}

/// Initialize tracing on stderr
///
/// `PIPEKIT_LOG` wins over `RUST_LOG`; without either the level follows `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("PIPEKIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
