//! Model validation
//!
//! Every model implements [`Validate`]. A model checks its own leaf fields
//! against the [`FormatRegistry`] and delegates to its sub-objects through
//! [`validate_nested`] / [`validate_each`], which re-root any failure under
//! the holding field's name. [`collect`] turns the per-field results into a
//! single error without stopping at the first failure.

mod error;
pub mod formats;

pub use error::ValidationError;
pub use formats::{FormatChecker, FormatRegistry};

/// Structural validation of a model
pub trait Validate {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError>;
}

/// Validate an optional sub-object held by the field `name`
///
/// Absent values are not required and always pass.
pub fn validate_nested<T: Validate>(
    name: &str,
    value: Option<&T>,
    formats: &FormatRegistry,
) -> Result<(), ValidationError> {
    match value {
        Some(inner) => inner.validate(formats).map_err(|e| e.with_name(name)),
        None => Ok(()),
    }
}

/// Validate every element of the sequence held by the field `name`
///
/// Elements are rooted at `name.<index>`.
pub fn validate_each<T: Validate>(
    name: &str,
    values: &[T],
    formats: &FormatRegistry,
) -> Result<(), ValidationError> {
    collect(values.iter().enumerate().map(|(i, value)| {
        value
            .validate(formats)
            .map_err(|e| e.with_name(&i.to_string()).with_name(name))
    }))
}

/// Check an optional string field against a named format
pub fn validate_format(
    name: &str,
    value: Option<&str>,
    format: &str,
    formats: &FormatRegistry,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => formats.check(name, format, v),
        None => Ok(()),
    }
}

/// Aggregate per-field results
///
/// Every result is consumed. Nested composites are spliced in so the final
/// list is flat.
pub fn collect<I>(results: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(()) => {}
            Err(ValidationError::Composite(nested)) => errors.extend(nested),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Composite(errors))
    }
}
