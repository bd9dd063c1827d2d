//! Format registry
//!
//! Named string formats (`date-time`, `uri`, ...) that models check their
//! string fields against. The registry is handed down unchanged through every
//! nested `validate` call; only leaf fields consult it.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use validator::{ValidateEmail, ValidateUrl};

use super::ValidationError;

/// Predicate deciding whether a string value satisfies a format
pub type FormatChecker = fn(&str) -> bool;

pub const DATE_TIME: &str = "date-time";
pub const URI: &str = "uri";
pub const EMAIL: &str = "email";
pub const BYTE: &str = "byte";
pub const UUID: &str = "uuid";

/// Registry of named format checkers
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    checkers: BTreeMap<String, FormatChecker>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            checkers: BTreeMap::new(),
        }
    }

    /// Add a checker, replacing any existing one with the same name
    pub fn register(&mut self, name: impl Into<String>, checker: FormatChecker) -> &mut Self {
        self.checkers.insert(name.into(), checker);
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, name: impl Into<String>, checker: FormatChecker) -> Self {
        self.register(name, checker);
        self
    }

    /// Whether `name` has a checker
    pub fn contains(&self, name: &str) -> bool {
        self.checkers.contains_key(name)
    }

    /// Registered format names, sorted
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.checkers.keys().map(String::as_str)
    }

    /// Stop checking `name`: any value is accepted from now on
    pub fn skip(&mut self, name: impl Into<String>) -> &mut Self {
        self.register(name, |_| true)
    }

    /// Check `value` of the field at `path` against `format`
    pub fn check(&self, path: &str, format: &str, value: &str) -> Result<(), ValidationError> {
        let checker = self.checkers.get(format).ok_or_else(|| {
            ValidationError::field(path, format!("has unknown format {format:?}"))
        })?;

        if checker(value) {
            Ok(())
        } else {
            Err(ValidationError::field(
                path,
                format!("must be of type {format}: {value:?}"),
            ))
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
            .with(DATE_TIME, is_date_time)
            .with(URI, is_uri)
            .with(EMAIL, is_email)
            .with(BYTE, is_byte)
            .with(UUID, is_uuid)
    }
}

fn is_date_time(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_uri(value: &str) -> bool {
    value.validate_url()
}

fn is_email(value: &str) -> bool {
    value.validate_email()
}

fn is_byte(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}

fn is_uuid(value: &str) -> bool {
    uuid::Uuid::try_parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builtins() {
        let formats = FormatRegistry::default();
        assert_eq!(
            formats.formats().collect::<Vec<_>>(),
            vec![BYTE, DATE_TIME, EMAIL, URI, UUID]
        );
    }

    #[test]
    fn test_date_time() {
        let formats = FormatRegistry::default();
        assert!(formats.check("created_at", DATE_TIME, "2024-05-01T12:30:00Z").is_ok());
        assert!(formats.check("created_at", DATE_TIME, "2024-05-01T12:30:00.123+02:00").is_ok());
        assert!(formats.check("created_at", DATE_TIME, "yesterday").is_err());
    }

    #[test]
    fn test_uri() {
        let formats = FormatRegistry::default();
        assert!(formats.check("u", URI, "https://example.com/pipeline.yaml").is_ok());
        assert!(formats.check("u", URI, "not a url").is_err());
    }

    #[test]
    fn test_byte_and_uuid() {
        let formats = FormatRegistry::default();
        assert!(formats.check("v", BYTE, "aGVsbG8=").is_ok());
        assert!(formats.check("v", BYTE, "not base64!").is_err());
        let id = uuid::Uuid::new_v4().to_string();
        assert!(formats.check("id", UUID, &id).is_ok());
        assert!(formats.check("id", UUID, "1234").is_err());
    }

    #[test]
    fn test_failure_message() {
        let formats = FormatRegistry::default();
        let err = formats.check("created_at", DATE_TIME, "soon").unwrap_err();
        assert_eq!(
            err,
            ValidationError::field("created_at", "must be of type date-time: \"soon\"")
        );
    }

    #[test]
    fn test_unknown_format() {
        let formats = FormatRegistry::new();
        let err = formats.check("created_at", DATE_TIME, "2024-05-01T12:30:00Z").unwrap_err();
        assert_eq!(err.path(), Some("created_at"));
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn test_register_overrides_builtin() {
        let formats = FormatRegistry::default().with(DATE_TIME, |v| v == "now");
        assert!(formats.check("created_at", DATE_TIME, "now").is_ok());
        assert!(formats.check("created_at", DATE_TIME, "2024-05-01T12:30:00Z").is_err());
    }

    #[test]
    fn test_skip() {
        let mut formats = FormatRegistry::default();
        formats.skip(DATE_TIME);
        assert!(formats.contains(DATE_TIME));
        assert!(formats.check("created_at", DATE_TIME, "whenever").is_ok());
        assert!(formats.check("u", URI, "not a url").is_err());
    }
}
