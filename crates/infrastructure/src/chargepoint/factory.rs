use std::sync::Arc;
use std::time::Duration;

use domain::DomainError;
use domain::chargepoint::{ChargePointApi, ChargePointApiFactory};
use domain::device::ApiCredentials;
use reqwest::Client;
use tracing::debug;

use super::http_client::HttpChargePointApi;
use super::http_log::HttpLogSink;

/// Factory for HTTP vendor API bindings
///
/// All bindings share one connection pool and the optional exchange log.
pub struct HttpApiFactory {
    client: Client,
    http_log: Option<Arc<HttpLogSink>>,
}

impl HttpApiFactory {
    pub fn new(
        request_timeout: Duration,
        http_log: Option<Arc<HttpLogSink>>,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                DomainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, http_log })
    }
}

impl ChargePointApiFactory for HttpApiFactory {
    fn connect(
        &self,
        address: &str,
        credentials: &ApiCredentials,
    ) -> Result<Arc<dyn ChargePointApi>, DomainError> {
        if address.trim().is_empty() {
            return Err(DomainError::Configuration("empty HTTP address".to_string()));
        }

        let api = HttpChargePointApi::new(
            self.client.clone(),
            address,
            credentials.clone(),
            self.http_log.clone(),
        );
        debug!(address = address, base_url = api.base_url(), "Created vendor API binding");

        Ok(Arc::new(api) as Arc<dyn ChargePointApi>)
    }
}
