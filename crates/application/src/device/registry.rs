use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

use domain::chargepoint::ChargePointApiFactory;
use domain::device::{ApiCredentials, DeviceBinding};
use domain::{DomainError, Result};

use super::EndpointClient;

/// Maps endpoint address -> the single client serving it
///
/// Clients are inserted during startup and only looked up afterwards. There
/// is no eviction: a device whose address changes keeps resolving to the old
/// client until the service restarts.
#[derive(Default)]
pub struct ClientRegistry {
    clients: DashMap<String, Arc<EndpointClient>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one client per distinct address among `bindings`.
    ///
    /// Devices sharing an address share the client. Addresses already present
    /// are left untouched, so the factory runs at most once per address.
    pub fn initialize(
        &self,
        bindings: &[DeviceBinding],
        credentials: &ApiCredentials,
        factory: &dyn ChargePointApiFactory,
    ) -> Result<()> {
        for binding in bindings {
            let address = binding.address().map_err(|e| {
                DomainError::Configuration(format!("device {}: {}", binding.name, e))
            })?;
            self.insert_with(address, credentials, factory)?;
            debug!(device = %binding.name, address = %address, "Device bound to endpoint");
        }

        info!(
            devices = bindings.len(),
            endpoints = self.clients.len(),
            "Client registry initialized"
        );
        Ok(())
    }

    /// Return the client for `address`, creating it if the address is new.
    pub fn insert_with(
        &self,
        address: &str,
        credentials: &ApiCredentials,
        factory: &dyn ChargePointApiFactory,
    ) -> Result<Arc<EndpointClient>> {
        // The vacant entry keeps its shard locked while the client is built,
        // so concurrent callers for the same address cannot both construct one.
        match self.clients.entry(address.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let api = factory.connect(address, credentials)?;
                let client = Arc::new(EndpointClient::new(address, credentials.clone(), api));
                info!(address = %address, user = %credentials.user, "Endpoint client created");
                entry.insert(client.clone());
                Ok(client)
            }
        }
    }

    pub fn lookup(&self, address: &str) -> Option<Arc<EndpointClient>> {
        self.clients.get(address).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn addresses(&self) -> Vec<String> {
        self.clients.iter().map(|entry| entry.key().clone()).collect()
    }
}
