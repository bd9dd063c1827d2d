//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod new;
mod normalize;
mod validate;

pub use new::NewArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check a creation request and report every validation error
    Validate {
        /// Path to a JSON request, or `-` for stdin
        file: String,
    },
    /// Re-encode a creation request, dropping nulls and unknown keys
    Normalize {
        /// Path to a JSON request, or `-` for stdin
        file: String,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Build a creation request from flags
    New(NewArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Validate { file } => validate::handle_validate(&file, config),
        Commands::Normalize { file, pretty } => normalize::handle_normalize(&file, pretty),
        Commands::New(args) => new::handle_new(args, config),
    }
}
