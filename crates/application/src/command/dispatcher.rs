use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use domain::device::{ProtocolProperties, http_address};
use domain::{CommandRequest, CommandValue, DomainError, Resource, Result};

use crate::device::{ClientRegistry, EndpointClient};

/// A validated write, ready to run against an endpoint
#[derive(Debug, Clone, PartialEq)]
enum WriteAction {
    ClearShed(i32),
    ShedByAllowedLoad(String),
    ShedByPercentage(i32),
}

/// Routes host read/write batches to the endpoint client serving a device
///
/// Per call: resolve the address from the protocol properties, look up the
/// client, run the resource operations, shape the values for the host. Any
/// failure ends the batch and is returned unchanged.
pub struct CommandDispatcher {
    registry: Arc<ClientRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    /// Read a batch of resources for one device.
    ///
    /// `Load`, `GroupName` and `NumStations` all come from one `GetLoad`
    /// call, issued at most once per batch. Unknown names leave their slot
    /// empty.
    pub async fn handle_read_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
    ) -> Result<Vec<Option<CommandValue>>> {
        debug!(device = %device_name, requests = ?requests, "Handling read commands");
        let client = self.resolve_client(device_name, protocols)?;

        let needs_load = requests.iter().any(|r| {
            Resource::from_name(&r.resource_name).is_some_and(|res| res.needs_load_payload())
        });
        let load = if needs_load {
            Some(client.station_group_load(cancel, device_name).await?)
        } else {
            None
        };

        let values = requests
            .iter()
            .map(|req| {
                let name = req.resource_name.as_str();
                let value = match (Resource::from_name(name), &load) {
                    (Some(Resource::Load), Some(load)) => {
                        Some(CommandValue::string(name, load.station_group_load_kw.clone()))
                    }
                    (Some(Resource::GroupName), Some(load)) => {
                        Some(CommandValue::string(name, load.station_group_name.clone()))
                    }
                    (Some(Resource::NumStations), Some(load)) => {
                        Some(CommandValue::int32(name, load.station_group_num_stations))
                    }
                    _ => None,
                };
                if value.is_none() {
                    debug!(device = %device_name, resource = %name, "No value for resource");
                }
                value
            })
            .collect();

        Ok(values)
    }

    /// Apply a batch of writes for one device.
    ///
    /// Every parameter is checked before the first vendor call, so a type
    /// mismatch anywhere in the batch leaves the station group untouched.
    pub async fn handle_write_commands(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        protocols: &ProtocolProperties,
        requests: &[CommandRequest],
        params: &[CommandValue],
    ) -> Result<()> {
        let client = self.resolve_client(device_name, protocols)?;
        let actions = plan_writes(requests, params)?;

        for (req, action) in requests.iter().zip(actions) {
            info!(
                device = %device_name,
                resource = %req.resource_name,
                action = ?action,
                "Handling write command"
            );
            match action {
                WriteAction::ClearShed(station_group_id) => {
                    client.clear_shed(cancel, station_group_id).await?
                }
                WriteAction::ShedByAllowedLoad(allowed_load_kw) => {
                    client
                        .shed_by_allowed_load(cancel, device_name, &allowed_load_kw)
                        .await?
                }
                WriteAction::ShedByPercentage(percent) => {
                    client
                        .shed_by_percentage(cancel, device_name, percent)
                        .await?
                }
            }
        }
        Ok(())
    }

    fn resolve_client(
        &self,
        device_name: &str,
        protocols: &ProtocolProperties,
    ) -> Result<Arc<EndpointClient>> {
        let address = http_address(protocols).inspect_err(|_| {
            error!(device = %device_name, "No HTTP address found for device. Check configuration file.");
        })?;

        self.registry.lookup(address).ok_or_else(|| {
            error!(device = %device_name, address = %address, "No client registered for address");
            DomainError::DeviceNotFound(device_name.to_string())
        })
    }
}

fn plan_writes(requests: &[CommandRequest], params: &[CommandValue]) -> Result<Vec<WriteAction>> {
    requests
        .iter()
        .enumerate()
        .map(|(i, req)| {
            let resource = Resource::from_name(&req.resource_name)
                .filter(Resource::is_writable)
                .ok_or_else(|| DomainError::UnsupportedResource(req.resource_name.clone()))?;

            let param = params
                .get(i)
                .ok_or_else(|| DomainError::InvalidParameter {
                    resource: req.resource_name.clone(),
                    expected: resource.value_type(),
                    actual: "no parameter".to_string(),
                })?;

            match resource {
                Resource::StationGroupId => Ok(WriteAction::ClearShed(param.int32_value()?)),
                Resource::AllowedLoad => Ok(WriteAction::ShedByAllowedLoad(
                    param.string_value()?.to_string(),
                )),
                Resource::PercentShed => Ok(WriteAction::ShedByPercentage(param.int32_value()?)),
                other => Err(DomainError::UnsupportedResource(other.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_writes_maps_each_resource() {
        let requests = vec![
            CommandRequest::new("StationGroupId"),
            CommandRequest::new("AllowedLoad"),
            CommandRequest::new("PercentShed"),
        ];
        let params = vec![
            CommandValue::int32("StationGroupId", 42),
            CommandValue::string("AllowedLoad", "7.5"),
            CommandValue::int32("PercentShed", 25),
        ];

        let actions = plan_writes(&requests, &params).unwrap();
        assert_eq!(
            actions,
            vec![
                WriteAction::ClearShed(42),
                WriteAction::ShedByAllowedLoad("7.5".to_string()),
                WriteAction::ShedByPercentage(25),
            ]
        );
    }

    #[test]
    fn test_plan_writes_rejects_read_only_resource() {
        let err = plan_writes(
            &[CommandRequest::new("Load")],
            &[CommandValue::string("Load", "1")],
        )
        .unwrap_err();

        assert_eq!(err, DomainError::UnsupportedResource("Load".to_string()));
    }

    #[test]
    fn test_plan_writes_rejects_unknown_resource() {
        let err = plan_writes(
            &[CommandRequest::new("Voltage")],
            &[CommandValue::int32("Voltage", 1)],
        )
        .unwrap_err();

        assert_eq!(err, DomainError::UnsupportedResource("Voltage".to_string()));
    }

    #[test]
    fn test_plan_writes_missing_parameter() {
        let err = plan_writes(&[CommandRequest::new("PercentShed")], &[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidParameter { .. }));
    }

    #[test]
    fn test_plan_writes_type_mismatch_fails_whole_batch() {
        let requests = vec![
            CommandRequest::new("PercentShed"),
            CommandRequest::new("AllowedLoad"),
        ];
        let params = vec![
            CommandValue::int32("PercentShed", 25),
            CommandValue::int32("AllowedLoad", 7),
        ];

        assert!(plan_writes(&requests, &params).is_err());
    }
}
