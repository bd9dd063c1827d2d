//! Data Transfer Objects for the pipeline service API
//!
//! Request payloads sent by API clients. DTOs compose the resource models from
//! [`crate::domain`] and carry no behaviour beyond validation and encoding.

pub mod pipeline;
