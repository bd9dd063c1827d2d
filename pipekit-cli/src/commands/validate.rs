//! `validate` command
//!
//! Decodes a creation request and prints every validation failure.

use anyhow::{Context, Result};
use colored::*;
use pipekit_core::codec::BinaryCodec;
use pipekit_core::dto::pipeline::PipelineCreationRequest;
use pipekit_core::validation::{Validate, ValidationError};

use crate::config::Config;
use crate::input::read_payload;

/// Validate the request stored at `file`
///
/// Fails when the payload cannot be decoded or does not validate.
pub fn handle_validate(file: &str, config: &Config) -> Result<()> {
    let bytes = read_payload(file)?;
    let req = PipelineCreationRequest::from_bytes(&bytes)
        .with_context(|| format!("Failed to decode creation request: {}", file))?;

    match req.validate(&config.formats) {
        Ok(()) => {
            tracing::info!(file, "Request is valid");
            println!("{}", "✓ Request is valid".green().bold());
            print_presence(&req);
            Ok(())
        }
        Err(err) => {
            tracing::info!(file, errors = err.len(), "Request is invalid");
            println!(
                "{}",
                format!("✗ Request is invalid ({} error(s)):", err.len())
                    .red()
                    .bold()
            );
            for line in describe(&err) {
                println!("  - {}", line);
            }
            anyhow::bail!("validation failed for {}", file)
        }
    }
}

/// One line per leaf error, `path: message` for field errors
pub fn describe(err: &ValidationError) -> Vec<String> {
    err.flatten()
        .into_iter()
        .map(|e| match e {
            ValidationError::Field { path, message } => format!("{}: {}", path, message),
            other => other.to_string(),
        })
        .collect()
}

fn print_presence(req: &PipelineCreationRequest) {
    let mark = |present: bool| {
        if present {
            "present".cyan()
        } else {
            "absent".dimmed()
        }
    };
    println!("  pipeline:         {}", mark(req.pipeline.is_some()));
    println!("  pipeline_version: {}", mark(req.pipeline_version.is_some()));
}
