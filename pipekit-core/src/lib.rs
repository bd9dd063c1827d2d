//! Pipekit Core
//!
//! Request models for the pipeline service API.
//!
//! This crate contains:
//! - Domain types: the pipeline resources requests refer to
//! - DTOs: request payloads built from those resources
//! - Validation: recursive field checks against a format registry
//! - Codec: JSON byte encoding shared by every model
//!
//! # Example
//!
//! ```
//! use pipekit_core::codec::BinaryCodec;
//! use pipekit_core::domain::pipeline::{Pipeline, PipelineVersion};
//! use pipekit_core::dto::pipeline::PipelineCreationRequest;
//! use pipekit_core::validation::{FormatRegistry, Validate};
//!
//! let req = PipelineCreationRequest::new(
//!     Pipeline::named("training"),
//!     PipelineVersion::from_package_url("v1", "https://example.com/pipeline.yaml"),
//! );
//!
//! req.validate(&FormatRegistry::default()).unwrap();
//! let body = req.to_bytes().unwrap();
//! assert_eq!(PipelineCreationRequest::from_bytes(&body).unwrap(), req);
//! ```

pub mod codec;
pub mod domain;
pub mod dto;
pub mod validation;
