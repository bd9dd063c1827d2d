//! Validation error types

use std::fmt;

use thiserror::Error;

/// A failure reported by [`Validate::validate`](super::Validate::validate)
///
/// Nested validators return this same type, so re-rooting an error under the
/// field that holds the failing sub-object is a plain match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single named-field failure
    #[error("{path} {message}")]
    Field {
        /// Dotted path of the offending field, e.g. `pipeline.created_at`
        path: String,
        /// What is wrong with the value
        message: String,
    },

    /// Every failure collected during one validation pass
    #[error("{}", CompositeDisplay(.0))]
    Composite(Vec<ValidationError>),

    /// A failure that is not tied to a field; never re-rooted
    #[error("{0}")]
    Other(String),
}

impl ValidationError {
    /// Create a field error
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a non-field error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Re-root this error under `name`
    ///
    /// Field paths become `name.path` (or just `name` when the path is empty).
    /// Composite errors are re-rooted entry by entry. `Other` is returned as is.
    pub fn with_name(self, name: &str) -> Self {
        match self {
            Self::Field { path, message } => {
                let path = if path.is_empty() {
                    name.to_string()
                } else {
                    format!("{name}.{path}")
                };
                Self::Field { path, message }
            }
            Self::Composite(errors) => {
                Self::Composite(errors.into_iter().map(|e| e.with_name(name)).collect())
            }
            other @ Self::Other(_) => other,
        }
    }

    /// Every leaf error, with composites expanded in order
    pub fn flatten(&self) -> Vec<&ValidationError> {
        match self {
            Self::Composite(errors) => errors.iter().flat_map(|e| e.flatten()).collect(),
            leaf => vec![leaf],
        }
    }

    /// Number of leaf errors
    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    /// True for an empty composite
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field path of a leaf `Field` error
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Field { path, .. } => Some(path),
            _ => None,
        }
    }

    /// True if any leaf is a field error whose path is `prefix` or starts with `prefix.`
    pub fn has_path_prefix(&self, prefix: &str) -> bool {
        self.flatten().iter().filter_map(|e| e.path()).any(|path| {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

struct CompositeDisplay<'a>(&'a [ValidationError]);

impl fmt::Display for CompositeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failure list:")?;
        for error in self.0.iter().flat_map(|e| e.flatten()) {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_name_prefixes_field_path() {
        let err = ValidationError::field("created_at", "must be of type date-time")
            .with_name("pipeline");
        assert_eq!(err.path(), Some("pipeline.created_at"));
    }

    #[test]
    fn test_with_name_on_empty_path() {
        let err = ValidationError::field("", "required").with_name("pipeline_version");
        assert_eq!(err.path(), Some("pipeline_version"));
    }

    #[test]
    fn test_with_name_recurses_into_composite() {
        let err = ValidationError::Composite(vec![
            ValidationError::field("created_at", "bad"),
            ValidationError::Composite(vec![ValidationError::field(
                "package_url.pipeline_url",
                "bad",
            )]),
        ])
        .with_name("pipeline_version");

        let paths: Vec<_> = err.flatten().iter().filter_map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec![
                "pipeline_version.created_at",
                "pipeline_version.package_url.pipeline_url"
            ]
        );
    }

    #[test]
    fn test_other_is_not_renamed() {
        let err = ValidationError::other("registry unavailable").with_name("pipeline");
        assert_eq!(err, ValidationError::Other("registry unavailable".to_string()));
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_has_path_prefix_matches_segments_only() {
        let err = ValidationError::field("pipeline_version.created_at", "bad");
        assert!(err.has_path_prefix("pipeline_version"));
        assert!(!err.has_path_prefix("pipeline"));
    }

    #[test]
    fn test_composite_display_lists_every_leaf() {
        let err = ValidationError::Composite(vec![
            ValidationError::field("pipeline.created_at", "must be of type date-time: \"x\""),
            ValidationError::other("boom"),
        ]);
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.to_string(),
            "validation failure list:\npipeline.created_at must be of type date-time: \"x\"\nboom"
        );
    }
}
