//! Configuration module
//!
//! Settings shared by every command, built from the global CLI flags.

use anyhow::Result;
use pipekit_core::validation::FormatRegistry;

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Formats checked during validation
    pub formats: FormatRegistry,
}

impl Config {
    /// Build a configuration with the named built-in formats left unchecked
    pub fn with_skipped_formats<S: AsRef<str>>(skipped: &[S]) -> Result<Self> {
        let mut formats = FormatRegistry::default();

        for name in skipped.iter().map(|n| n.as_ref()) {
            if !formats.contains(name) {
                anyhow::bail!(
                    "unknown format `{}` (known: {})",
                    name,
                    formats.formats().collect::<Vec<_>>().join(", ")
                );
            }
            formats.skip(name);
        }

        Ok(Self { formats })
    }
}
