//! Pipeline domain types

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::validation::{self, FormatRegistry, Validate, ValidationError, formats};

/// Pipeline (parent resource)
///
/// Groups pipeline versions under a display name and namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Server-assigned ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation time, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Set when the pipeline could not be created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

impl Pipeline {
    /// Create a pipeline with just a display name
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }
}

impl Validate for Pipeline {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::collect([
            validation::validate_format(
                "created_at",
                self.created_at.as_deref(),
                formats::DATE_TIME,
                formats,
            ),
            validation::validate_nested("error", self.error.as_ref(), formats),
        ])
    }
}

/// Pipeline version (child resource)
///
/// The compiled pipeline spec is either inlined in `pipeline_spec` or
/// published at `package_url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineVersion {
    /// ID of the parent pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,

    /// Server-assigned ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_version_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation time, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Where the pipeline spec can be downloaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_url: Option<PipelineUrl>,

    /// Link to the source the pipeline was compiled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_source_url: Option<String>,

    /// Inline pipeline spec, kept as opaque JSON; `Null` when absent
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub pipeline_spec: serde_json::Value,

    /// Set when the version could not be created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

impl PipelineVersion {
    /// Create a version whose spec is published at `url`
    pub fn from_package_url(display_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            package_url: Some(PipelineUrl::new(url)),
            ..Default::default()
        }
    }
}

impl Validate for PipelineVersion {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::collect([
            validation::validate_format(
                "created_at",
                self.created_at.as_deref(),
                formats::DATE_TIME,
                formats,
            ),
            validation::validate_nested("package_url", self.package_url.as_ref(), formats),
            validation::validate_format(
                "code_source_url",
                self.code_source_url.as_deref(),
                formats::URI,
                formats,
            ),
            validation::validate_nested("error", self.error.as_ref(), formats),
        ])
    }
}

/// Location of a published pipeline spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_url: Option<String>,
}

impl PipelineUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            pipeline_url: Some(url.into()),
        }
    }
}

impl Validate for PipelineUrl {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::validate_format(
            "pipeline_url",
            self.pipeline_url.as_deref(),
            formats::URI,
            formats,
        )
    }
}
