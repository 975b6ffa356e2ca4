use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use domain::chargepoint::{
    ApiError, ChargePointApi, ClearShedStateRequest, GetLoadRequest, GetLoadResponse,
    ShedLoadRequest,
};
use domain::device::ApiCredentials;
use domain::{DomainError, Result};

/// One authenticated binding to a single endpoint address.
///
/// The API binding is built once and reused for every call against the
/// address. The client holds no per-call state, so it can be shared across
/// concurrent dispatches.
pub struct EndpointClient {
    address: String,
    credentials: ApiCredentials,
    api: Arc<dyn ChargePointApi>,
}

impl EndpointClient {
    pub fn new(
        address: impl Into<String>,
        credentials: ApiCredentials,
        api: Arc<dyn ChargePointApi>,
    ) -> Self {
        Self {
            address: address.into(),
            credentials,
            api,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fetch the load payload of the station group named by `device_name`.
    pub async fn station_group_load(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
    ) -> Result<GetLoadResponse> {
        let station_group_id = parse_station_group_id(device_name)?;
        debug!(address = %self.address, station_group_id, "GetLoad");

        let resp = self
            .api
            .get_load(cancel, GetLoadRequest { station_group_id })
            .await
            .map_err(|e| transport("GetLoad", e))?;

        if !resp.is_success() {
            return Err(self.rejected("GetLoad", &resp.response_code, &resp.response_text));
        }
        Ok(resp)
    }

    /// Reset the shed state of a station group.
    ///
    /// Unlike the shed operations, the id comes from the host parameter,
    /// not from the device name.
    pub async fn clear_shed(&self, cancel: &CancellationToken, station_group_id: i32) -> Result<()> {
        debug!(address = %self.address, station_group_id, "ClearShedState");

        let request = ClearShedStateRequest {
            station_group_id: Some(station_group_id),
        };
        let resp = self
            .api
            .clear_shed_state(cancel, request)
            .await
            .map_err(|e| transport("ClearShedState", e))?;

        if !resp.is_success() {
            return Err(self.rejected(
                "ClearShedState",
                &resp.response_code,
                &resp.response_text,
            ));
        }
        Ok(())
    }

    pub async fn shed_by_allowed_load(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        allowed_load_kw: &str,
    ) -> Result<()> {
        let station_group_id = parse_station_group_id(device_name)?;
        self.shed_load(
            cancel,
            ShedLoadRequest::allowed_load(station_group_id, allowed_load_kw),
        )
        .await
    }

    pub async fn shed_by_percentage(
        &self,
        cancel: &CancellationToken,
        device_name: &str,
        percent: i32,
    ) -> Result<()> {
        let station_group_id = parse_station_group_id(device_name)?;
        self.shed_load(cancel, ShedLoadRequest::percentage(station_group_id, percent))
            .await
    }

    async fn shed_load(&self, cancel: &CancellationToken, request: ShedLoadRequest) -> Result<()> {
        debug!(address = %self.address, request = ?request, "ShedLoad");

        let resp = self
            .api
            .shed_load(cancel, request)
            .await
            .map_err(|e| transport("ShedLoad", e))?;

        if !resp.is_success() {
            return Err(self.rejected("ShedLoad", &resp.response_code, &resp.response_text));
        }
        Ok(())
    }

    fn rejected(&self, operation: &'static str, code: &str, text: &str) -> DomainError {
        warn!(
            address = %self.address,
            user = %self.credentials.user,
            operation,
            code,
            text,
            "Vendor rejected request"
        );
        DomainError::Vendor {
            operation,
            code: code.to_string(),
            text: text.to_string(),
        }
    }
}

/// The device name *is* the station group id.
pub fn parse_station_group_id(device_name: &str) -> Result<i32> {
    device_name
        .parse::<i32>()
        .map_err(|source| DomainError::InvalidStationGroupId {
            identity: device_name.to_string(),
            source,
        })
}

fn transport(operation: &'static str, err: ApiError) -> DomainError {
    warn!(operation, error = %err, "Vendor API call failed");
    DomainError::Transport {
        operation,
        message: err.to_string(),
    }
}
