use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use domain::chargepoint::ChargePointApiFactory;
use domain::device::{ApiCredentials, DeviceBinding, ProtocolProperties, http_address};
use domain::driver::ProtocolDriver;
use domain::{CommandRequest, CommandValue, Result};

use crate::command::CommandDispatcher;
use crate::device::ClientRegistry;

/// Owned driver context for one device service process
///
/// Built once at startup; the host passes it by reference to every handler
/// call.
pub struct EvChargerDriver {
    registry: Arc<ClientRegistry>,
    dispatcher: CommandDispatcher,
    shutdown: CancellationToken,
}

impl EvChargerDriver {
    /// Bind every device of the host to an endpoint client.
    pub fn initialize(
        bindings: &[DeviceBinding],
        credentials: &ApiCredentials,
        factory: &dyn ChargePointApiFactory,
    ) -> Result<Self> {
        let registry = Arc::new(ClientRegistry::new());
        registry.initialize(bindings, credentials, factory)?;

        info!(
            devices = bindings.len(),
            endpoints = registry.len(),
            "EV charger driver initialized"
        );

        Ok(Self {
            dispatcher: CommandDispatcher::new(registry.clone()),
            registry,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn registry(&self) -> &Arc<ClientRegistry> {
        &self.registry
    }

    /// Token cancelled by a forced stop; host calls can derive from it.
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    // Clients are only created at startup, so a new address is not served.
    fn warn_if_unserved(&self, device_name: &str, protocols: &ProtocolProperties, msg: &str) {
        match http_address(protocols) {
            Ok(address) if self.registry.lookup(address).is_none() => {
                warn!(device = %device_name, address = %address, "{}", msg);
            }
            Ok(_) => {}
            Err(e) => warn!(device = %device_name, error = %e, "Device has no usable address"),
        }
    }
}

#[async_trait]
impl ProtocolDriver for EvChargerDriver {
    async fn handle_read_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
    ) -> Result<Vec<Option<CommandValue>>> {
        self.dispatcher
            .handle_read_commands(cancel, device_name, protocols, requests)
            .await
    }

    async fn handle_write_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
        params: &[CommandValue],
    ) -> Result<()> {
        self.dispatcher
            .handle_write_commands(cancel, device_name, protocols, requests, params)
            .await
    }

    async fn add_device(&self, device_name: &str, protocols: &ProtocolProperties) -> Result<()> {
        debug!(device = %device_name, "A new device is added");
        self.warn_if_unserved(
            device_name,
            protocols,
            "Device added at runtime; its endpoint is served after a restart",
        );
        Ok(())
    }

    async fn update_device(&self, device_name: &str, protocols: &ProtocolProperties) -> Result<()> {
        debug!(device = %device_name, "Device is updated");
        self.warn_if_unserved(
            device_name,
            protocols,
            "Device address changed; restart the service to apply it",
        );
        Ok(())
    }

    async fn remove_device(&self, device_name: &str, _protocols: &ProtocolProperties) -> Result<()> {
        debug!(device = %device_name, "Device is removed");
        Ok(())
    }

    async fn stop(&self, force: bool) -> Result<()> {
        debug!(force, "EvChargerDriver.stop called");
        if force {
            self.shutdown.cancel();
        }
        Ok(())
    }
}

impl std::fmt::Debug for EvChargerDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvChargerDriver")
            .field("endpoints", &self.registry.addresses())
            .finish()
    }
}

