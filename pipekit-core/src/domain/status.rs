//! RPC status attached to resources that failed server-side

use serde::{Deserialize, Serialize};

use crate::validation::{self, FormatRegistry, Validate, ValidationError, formats};

/// Error status reported by the pipeline service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ProtobufAny>,
}

impl Validate for Status {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::validate_each("details", &self.details, formats)
    }
}

/// Arbitrary serialized message with a type URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtobufAny {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,

    /// Base64-encoded message bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Validate for ProtobufAny {
    fn validate(&self, formats: &FormatRegistry) -> Result<(), ValidationError> {
        validation::validate_format("value", self.value.as_deref(), formats::BYTE, formats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_is_valid() {
        assert!(Status::default().validate(&FormatRegistry::default()).is_ok());
    }

    #[test]
    fn test_bad_detail_value() {
        let status = Status {
            code: Some(3),
            message: Some("invalid argument".to_string()),
            details: vec![
                ProtobufAny {
                    type_url: Some("type.googleapis.com/google.rpc.BadRequest".to_string()),
                    value: Some("aGVsbG8=".to_string()),
                },
                ProtobufAny {
                    type_url: None,
                    value: Some("%%%".to_string()),
                },
            ],
        };

        let err = status.validate(&FormatRegistry::default()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_path_prefix("details.1.value"));
    }

    #[test]
    fn test_empty_details_omitted() {
        let status = Status {
            code: Some(5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&status).unwrap(), serde_json::json!({ "code": 5 }));
    }
}
