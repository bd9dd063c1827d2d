//! Pipeline DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::{Pipeline, PipelineVersion};
use crate::validation::{self, FormatRegistry, Validate, ValidationError};

/// Request to create a pipeline together with its first version
///
/// Both parts are optional on the wire. Callers are expected to send both;
/// the version's spec is downloaded from `pipeline_version.package_url` by
/// the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineCreationRequest {
    /// Pipeline (parent) to be created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<Pipeline>,

    /// Pipeline version (child) to be created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_version: Option<PipelineVersion>,
}

impl PipelineCreationRequest {
    pub fn new(pipeline: Pipeline, pipeline_version: PipelineVersion) -> Self {
        Self {
            pipeline: Some(pipeline),
            pipeline_version: Some(pipeline_version),
        }
    }
}

impl Validate for PipelineCreationRequest {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::collect([
            validation::validate_nested("pipeline", self.pipeline.as_ref(), formats),
            validation::validate_nested(
                "pipeline_version",
                self.pipeline_version.as_ref(),
                formats,
            ),
        ])
    }
}
