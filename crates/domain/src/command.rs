use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::resource::ValueType;

/// One resource operation requested by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub resource_name: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl CommandRequest {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            attributes: HashMap::new(),
        }
    }
}

/// Typed payload of a [`CommandValue`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    String(String),
    Int32(i32),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Int32(_) => ValueType::Int32,
        }
    }
}

/// A reading returned to the host, or a parameter sent by it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandValue {
    pub resource_name: String,
    /// Wall-clock nanoseconds at which the value was produced
    pub origin: i64,
    pub value: Value,
}

impl CommandValue {
    pub fn new(resource_name: impl Into<String>, origin: i64, value: Value) -> Self {
        Self {
            resource_name: resource_name.into(),
            origin,
            value,
        }
    }

    pub fn string(resource_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(resource_name, now_nanos(), Value::String(value.into()))
    }

    pub fn int32(resource_name: impl Into<String>, value: i32) -> Self {
        Self::new(resource_name, now_nanos(), Value::Int32(value))
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn string_value(&self) -> Result<&str> {
        match &self.value {
            Value::String(s) => Ok(s.as_str()),
            other => Err(self.mismatch(ValueType::String, other)),
        }
    }

    pub fn int32_value(&self) -> Result<i32> {
        match &self.value {
            Value::Int32(v) => Ok(*v),
            other => Err(self.mismatch(ValueType::Int32, other)),
        }
    }

    fn mismatch(&self, expected: ValueType, actual: &Value) -> DomainError {
        DomainError::InvalidParameter {
            resource: self.resource_name.clone(),
            expected,
            actual: actual.value_type().to_string(),
        }
    }
}

fn now_nanos() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_accessor() {
        let cv = CommandValue::string("AllowedLoad", "12.5");
        assert_eq!(cv.string_value().unwrap(), "12.5");
        assert_eq!(cv.value_type(), ValueType::String);
        assert!(cv.origin > 0);
    }

    #[test]
    fn test_int32_accessor_rejects_string() {
        let cv = CommandValue::string("PercentShed", "25");
        let err = cv.int32_value().unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidParameter {
                resource: "PercentShed".to_string(),
                expected: ValueType::Int32,
                actual: "String".to_string(),
            }
        );
    }

    #[test]
    fn test_string_accessor_rejects_int32() {
        let cv = CommandValue::int32("AllowedLoad", 7);
        assert!(matches!(
            cv.string_value(),
            Err(DomainError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_value_serialization_shape() {
        let cv = CommandValue::new("NumStations", 1, Value::Int32(6));
        let json = serde_json::to_value(&cv).unwrap();

        assert_eq!(json["value"]["type"], "Int32");
        assert_eq!(json["value"]["value"], 6);
        assert_eq!(json["resource_name"], "NumStations");
    }
}
