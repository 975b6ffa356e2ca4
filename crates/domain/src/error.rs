use std::num::ParseIntError;

use thiserror::Error;

use crate::resource::ValueType;

/// Domain-level errors
///
/// Every failure surfaced to the host belongs to exactly one of these
/// categories. Nothing in the core recovers from them locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Missing driver settings or a device without an `HTTP`/`Address` entry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The device name is not a numeric station group id
    #[error("Invalid station group id '{identity}': {source}")]
    InvalidStationGroupId {
        identity: String,
        #[source]
        source: ParseIntError,
    },

    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// The vendor answered, but flagged the request as failed
    #[error("{operation} rejected by vendor (code {code}): {text}")]
    Vendor {
        operation: &'static str,
        code: String,
        text: String,
    },

    #[error("{operation} request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid parameter for {resource}: expected {expected}, got {actual}")]
    InvalidParameter {
        resource: String,
        expected: ValueType,
        actual: String,
    },

    #[error("Resource {0} does not support write operations")]
    UnsupportedResource(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_error_carries_response_text() {
        let err = DomainError::Vendor {
            operation: "GetLoad",
            code: "500".to_string(),
            text: "rate limited".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("rate limited"));
        assert!(msg.contains("500"));
        assert!(msg.contains("GetLoad"));
    }

    #[test]
    fn test_device_not_found_message() {
        let err = DomainError::DeviceNotFound("42".to_string());
        assert_eq!(err.to_string(), "device not found: 42");
    }

    #[test]
    fn test_invalid_station_group_id_keeps_source() {
        let source = "lot-a".parse::<i32>().unwrap_err();
        let err = DomainError::InvalidStationGroupId {
            identity: "lot-a".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("Invalid station group id 'lot-a'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
