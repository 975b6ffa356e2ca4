use config::{Config, ConfigError, Environment, File};
use domain::device::{ApiCredentials, DeviceBinding};
use domain::DomainError;
use serde::{Deserialize, Serialize};

/// Vendor API settings shared by every endpoint
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DriverSettings {
    pub api_key: Option<String>,
    pub api_password: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_password: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpLogConfig {
    /// File receiving one JSON line per vendor HTTP exchange
    pub path: String,
}

/// A station group served by this device service
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeviceConfig {
    /// Station group id, used as the device name
    pub name: String,
    /// Endpoint address (host:port or URL)
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl DeviceConfig {
    pub fn binding(&self) -> DeviceBinding {
        DeviceBinding::http(self.name.clone(), self.address.clone())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub driver: DriverSettings,
    #[serde(default)]
    pub http_log: Option<HttpLogConfig>,
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

impl ServiceConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("driver.request_timeout_secs", default_request_timeout() as i64)?
            // Local config file, required so the service never starts without devices
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(true))
            // Per-environment overrides
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. EVCHARGER__DRIVER__API_KEY=...)
            .add_source(Environment::with_prefix("EVCHARGER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// API credentials; both settings are required.
    pub fn credentials(&self) -> Result<ApiCredentials, DomainError> {
        let user = required(&self.driver.api_key, "api_key")?;
        let password = required(&self.driver.api_password, "api_password")?;
        Ok(ApiCredentials::new(user, password))
    }

    pub fn bindings(&self) -> Vec<DeviceBinding> {
        self.devices.iter().map(DeviceConfig::binding).collect()
    }
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str, DomainError> {
    value
        .as_deref()
        .ok_or_else(|| DomainError::Configuration(format!("driver config undefined: {}", key)))
}
