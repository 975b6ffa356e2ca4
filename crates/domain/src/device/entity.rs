use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Protocol name under which a device's endpoint address is stored
pub const HTTP_PROTOCOL: &str = "HTTP";
/// Key of the endpoint address inside the `HTTP` protocol entry
pub const ADDRESS_KEY: &str = "Address";

/// Per-protocol property maps attached to a device by the host
pub type ProtocolProperties = HashMap<String, HashMap<String, String>>;

/// Resolve the endpoint address from a device's protocol properties.
pub fn http_address(protocols: &ProtocolProperties) -> Result<&str> {
    protocols
        .get(HTTP_PROTOCOL)
        .and_then(|props| props.get(ADDRESS_KEY))
        .map(String::as_str)
        .ok_or_else(|| DomainError::Configuration("no HTTP address in protocols map".to_string()))
}

/// A host device bound to the network address that serves it.
///
/// The device name is the vendor's station group id in string form; several
/// devices may share one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceBinding {
    pub name: String,
    pub protocols: ProtocolProperties,
}

impl DeviceBinding {
    pub fn new(name: impl Into<String>, protocols: ProtocolProperties) -> Self {
        Self {
            name: name.into(),
            protocols,
        }
    }

    /// Binding with a single `HTTP` → `Address` protocol entry
    pub fn http(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, http_protocols(address))
    }

    pub fn address(&self) -> Result<&str> {
        http_address(&self.protocols)
    }
}

pub fn http_protocols(address: impl Into<String>) -> ProtocolProperties {
    let props = HashMap::from([(ADDRESS_KEY.to_string(), address.into())]);
    HashMap::from([(HTTP_PROTOCOL.to_string(), props)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_binding_resolves_address() {
        let binding = DeviceBinding::http("42", "10.0.0.5:8080");

        assert_eq!(binding.name, "42");
        assert_eq!(binding.address().unwrap(), "10.0.0.5:8080");
    }

    #[test]
    fn test_missing_http_protocol() {
        let mut protocols = ProtocolProperties::new();
        protocols.insert(
            "other".to_string(),
            HashMap::from([("Address".to_string(), "simple02".to_string())]),
        );

        let err = http_address(&protocols).unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn test_http_protocol_without_address() {
        let mut protocols = ProtocolProperties::new();
        protocols.insert(
            "HTTP".to_string(),
            HashMap::from([("Port".to_string(), "8080".to_string())]),
        );

        assert!(matches!(
            http_address(&protocols),
            Err(DomainError::Configuration(_))
        ));
    }
}
