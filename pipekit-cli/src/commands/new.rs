//! `new` command
//!
//! Builds a creation request from command-line flags. A part is only
//! included when at least one of its flags is given.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use pipekit_core::codec::BinaryCodec;
use pipekit_core::domain::pipeline::{Pipeline, PipelineUrl, PipelineVersion};
use pipekit_core::dto::pipeline::PipelineCreationRequest;
use pipekit_core::validation::Validate;

use super::validate::describe;
use crate::config::Config;
use crate::input::write_payload;

/// Flags for `new`
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Pipeline display name
    #[arg(long)]
    pub pipeline_name: Option<String>,

    /// Pipeline description
    #[arg(long)]
    pub pipeline_description: Option<String>,

    /// Namespace the pipeline belongs to
    #[arg(long)]
    pub namespace: Option<String>,

    /// Pipeline version display name
    #[arg(long)]
    pub version_name: Option<String>,

    /// Pipeline version description
    #[arg(long)]
    pub version_description: Option<String>,

    /// URL the pipeline spec is downloaded from
    #[arg(long)]
    pub package_url: Option<String>,

    /// URL of the pipeline's source code
    #[arg(long)]
    pub code_source_url: Option<String>,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,

    /// Print the request even if it does not validate
    #[arg(long)]
    pub no_validate: bool,
}

/// Build, validate and print a creation request
pub fn handle_new(args: NewArgs, config: &Config) -> Result<()> {
    let req = build_request(&args);

    if args.no_validate {
        tracing::debug!("Skipping validation");
    } else if let Err(err) = req.validate(&config.formats) {
        eprintln!("{}", "✗ Request is invalid:".red().bold());
        for line in describe(&err) {
            eprintln!("  - {}", line);
        }
        anyhow::bail!("refusing to print an invalid request (use --no-validate)");
    }

    let out = if args.pretty {
        req.to_bytes_pretty()
    } else {
        req.to_bytes()
    }
    .context("Failed to encode creation request")?;

    write_payload(&out)
}

fn build_request(args: &NewArgs) -> PipelineCreationRequest {
    let has_pipeline = args.pipeline_name.is_some()
        || args.pipeline_description.is_some()
        || args.namespace.is_some();

    let has_version = args.version_name.is_some()
        || args.version_description.is_some()
        || args.package_url.is_some()
        || args.code_source_url.is_some();

    let pipeline = has_pipeline.then(|| Pipeline {
        display_name: args.pipeline_name.clone(),
        description: args.pipeline_description.clone(),
        namespace: args.namespace.clone(),
        ..Default::default()
    });

    let pipeline_version = has_version.then(|| PipelineVersion {
        display_name: args.version_name.clone(),
        description: args.version_description.clone(),
        package_url: args.package_url.clone().map(PipelineUrl::new),
        code_source_url: args.code_source_url.clone(),
        ..Default::default()
    });

    PipelineCreationRequest {
        pipeline,
        pipeline_version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipekit_core::validation::FormatRegistry;

    #[test]
    fn test_build_empty() {
        let req = build_request(&NewArgs::default());
        assert_eq!(req, PipelineCreationRequest::default());
    }

    #[test]
    fn test_build_full() {
        let args = NewArgs {
            pipeline_name: Some("training".to_string()),
            namespace: Some("ml".to_string()),
            version_name: Some("v1".to_string()),
            package_url: Some("https://example.com/pipeline.yaml".to_string()),
            ..Default::default()
        };

        let req = build_request(&args);
        let pipeline = req.pipeline.as_ref().unwrap();
        assert_eq!(pipeline.display_name.as_deref(), Some("training"));
        assert_eq!(pipeline.namespace.as_deref(), Some("ml"));

        let version = req.pipeline_version.as_ref().unwrap();
        assert_eq!(
            version.package_url,
            Some(PipelineUrl::new("https://example.com/pipeline.yaml"))
        );
        assert!(req.validate(&FormatRegistry::default()).is_ok());
    }

    #[test]
    fn test_build_version_only() {
        let args = NewArgs {
            package_url: Some("https://example.com/pipeline.yaml".to_string()),
            ..Default::default()
        };

        let req = build_request(&args);
        assert!(req.pipeline.is_none());
        assert!(req.pipeline_version.is_some());
    }

    #[test]
    fn test_handle_new_rejects_invalid() {
        let args = NewArgs {
            package_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(handle_new(args, &Config::default()).is_err());
    }
}
