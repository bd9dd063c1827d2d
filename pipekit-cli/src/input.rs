//! Reading request payloads from files or stdin

use anyhow::{Context, Result};
use std::io::Read;

/// Path that selects stdin
pub const STDIN: &str = "-";

/// Read the whole payload at `path`, or stdin for `-`
pub fn read_payload(path: &str) -> Result<Vec<u8>> {
    if path == STDIN {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read request from stdin")?;
        tracing::debug!(bytes = buf.len(), "Read request from stdin");
        return Ok(buf);
    }

    let buf =
        std::fs::read(path).with_context(|| format!("Failed to read request file: {}", path))?;
    tracing::debug!(path, bytes = buf.len(), "Read request file");
    Ok(buf)
}

/// Write an encoded payload to stdout followed by a newline
pub fn write_payload(bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes).context("Failed to write to stdout")?;
    stdout.write_all(b"\n").context("Failed to write to stdout")?;
    Ok(())
}
