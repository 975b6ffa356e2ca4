mod credentials;
mod entity;

pub use credentials::ApiCredentials;
pub use entity::{
    ADDRESS_KEY, DeviceBinding, HTTP_PROTOCOL, ProtocolProperties, http_address, http_protocols,
};
