//! Conversions between command-line text and the driver's typed values

use domain::{CommandRequest, CommandValue, DomainError, Resource, Value, ValueType};

/// Build one request per resource name, in order.
pub fn command_requests<S: AsRef<str>>(resource_names: &[S]) -> Vec<CommandRequest> {
    resource_names
        .iter()
        .map(|name| CommandRequest::new(name.as_ref()))
        .collect()
}

/// Type a raw write argument according to the resource's value type.
pub fn parameter_for(resource_name: &str, raw: &str) -> Result<CommandValue, DomainError> {
    let resource = Resource::from_name(resource_name)
        .ok_or_else(|| DomainError::UnsupportedResource(resource_name.to_string()))?;

    match resource.value_type() {
        ValueType::String => Ok(CommandValue::string(resource_name, raw)),
        ValueType::Int32 => {
            let value = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| DomainError::InvalidParameter {
                    resource: resource_name.to_string(),
                    expected: ValueType::Int32,
                    actual: format!("'{}'", raw),
                })?;
            Ok(CommandValue::int32(resource_name, value))
        }
    }
}

pub fn format_reading(reading: Option<&CommandValue>) -> String {
    match reading.map(|r| &r.value) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Int32(v)) => v.to_string(),
        None => "<unset>".to_string(),
    }
}
