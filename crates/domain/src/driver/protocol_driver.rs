use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::command::{CommandRequest, CommandValue};
use crate::device::ProtocolProperties;
use crate::error::DomainError;

/// Contract between a device-management host and a protocol driver
#[async_trait]
pub trait ProtocolDriver: Send + Sync {
    /// Read the requested resources of a device.
    ///
    /// The result has one slot per request, in request order. A slot is
    /// `None` when the driver has no value for that resource name.
    async fn handle_read_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
    ) -> Result<Vec<Option<CommandValue>>, DomainError>;

    /// Apply write operations, one parameter per request.
    async fn handle_write_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
        params: &[CommandValue],
    ) -> Result<(), DomainError>;

    /// Called when the host adds a device to this service
    async fn add_device(
        &self,
        device_name: &str,
        protocols: &ProtocolProperties,
    ) -> Result<(), DomainError>;

    /// Called when the host updates a device of this service
    async fn update_device(
        &self,
        device_name: &str,
        protocols: &ProtocolProperties,
    ) -> Result<(), DomainError>;

    /// Called when the host removes a device from this service
    async fn remove_device(
        &self,
        device_name: &str,
        protocols: &ProtocolProperties,
    ) -> Result<(), DomainError>;

    /// Shut down gracefully, or immediately when `force` is set
    async fn stop(&self, force: bool) -> Result<(), DomainError>;
}
