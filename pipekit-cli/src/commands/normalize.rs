//! `normalize` command

use anyhow::{Context, Result};
use pipekit_core::codec::BinaryCodec;
use pipekit_core::dto::pipeline::PipelineCreationRequest;

use crate::input::{read_payload, write_payload};

/// Decode the request at `file` and print its canonical encoding
pub fn handle_normalize(file: &str, pretty: bool) -> Result<()> {
    let bytes = read_payload(file)?;
    let out = normalize(&bytes, pretty).with_context(|| format!("Failed to normalize {}", file))?;
    write_payload(&out)
}

fn normalize(bytes: &[u8], pretty: bool) -> Result<Vec<u8>> {
    let req = PipelineCreationRequest::from_bytes(bytes)?;
    let out = if pretty {
        req.to_bytes_pretty()?
    } else {
        req.to_bytes()?
    };
    Ok(out)
}
