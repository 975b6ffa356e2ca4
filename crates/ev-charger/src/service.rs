use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use application::EvChargerDriver;
use domain::CommandValue;
use domain::driver::ProtocolDriver;
use infrastructure::chargepoint::{HttpApiFactory, HttpLogSink};
use infrastructure::config::{DeviceConfig, ServiceConfig};
use tracing::{info, warn};

use crate::host;

/// A running device service: the driver plus the resources it owns
pub struct DeviceService {
    config: ServiceConfig,
    driver: EvChargerDriver,
    http_log: Option<Arc<HttpLogSink>>,
}

impl DeviceService {
    /// Wire credentials, the exchange log and the HTTP binding into a driver.
    pub async fn start(config: ServiceConfig) -> Result<Self> {
        let credentials = config.credentials()?;

        let http_log = match &config.http_log {
            Some(log) => Some(Arc::new(
                HttpLogSink::create(&log.path)
                    .await
                    .with_context(|| format!("Failed to open HTTP log {}", log.path))?,
            )),
            None => None,
        };

        let factory = HttpApiFactory::new(
            Duration::from_secs(config.driver.request_timeout_secs),
            http_log.clone(),
        )?;
        let driver = EvChargerDriver::initialize(&config.bindings(), &credentials, &factory)?;

        info!(
            user = %credentials.user,
            devices = config.devices.len(),
            "✅ Device service started"
        );

        Ok(Self {
            config,
            driver,
            http_log,
        })
    }

    pub fn devices(&self) -> &[DeviceConfig] {
        &self.config.devices
    }

    pub fn driver(&self) -> &EvChargerDriver {
        &self.driver
    }

    fn device(&self, name: &str) -> Result<&DeviceConfig> {
        self.config
            .devices
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| anyhow!("Device {} is not configured", name))
    }

    /// Read resources of a configured device; one slot per name.
    pub async fn read<S: AsRef<str>>(
        &self,
        device_name: &str,
        resource_names: &[S],
    ) -> Result<Vec<Option<CommandValue>>> {
        let device = self.device(device_name)?;
        let requests = host::command_requests(resource_names);
        let cancel = self.driver.shutdown_token().child_token();

        let readings = self
            .driver
            .handle_read_commands(&cancel, &device.name, &device.binding().protocols, &requests)
            .await?;
        Ok(readings)
    }

    /// Write one resource of a configured device from its text form.
    pub async fn write(&self, device_name: &str, resource_name: &str, raw: &str) -> Result<()> {
        let device = self.device(device_name)?;
        let requests = host::command_requests(&[resource_name]);
        let params = [host::parameter_for(resource_name, raw)?];
        let cancel = self.driver.shutdown_token().child_token();

        self.driver
            .handle_write_commands(
                &cancel,
                &device.name,
                &device.binding().protocols,
                &requests,
                &params,
            )
            .await?;
        Ok(())
    }

    /// Cancel in-flight vendor calls; they fail with a cancelled transport
    /// error and are still written to the exchange log.
    pub async fn interrupt(&self) -> Result<()> {
        self.driver.stop(true).await?;
        Ok(())
    }

    /// Stop the driver and close the exchange log.
    pub async fn shutdown(self, force: bool) -> Result<()> {
        self.driver.stop(force).await?;

        if let Some(sink) = &self.http_log {
            if let Err(e) = sink.close().await {
                warn!(error = %e, "Failed to close HTTP log");
            }
        }

        info!("👋 Device service stopped");
        Ok(())
    }
}
