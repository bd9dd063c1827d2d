//! Resource models referenced by API requests
//!
//! These mirror the pipeline service's resources as they appear on the wire.
//! Every field is optional; a model's `validate` only checks the formats of
//! the fields that are present and recurses into present sub-objects.

pub mod pipeline;
pub mod status;
