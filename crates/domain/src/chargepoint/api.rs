use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::error::ApiError;
use super::schema::*;
use crate::device::ApiCredentials;
use crate::error::DomainError;

/// Remote operations of the vendor API
///
/// Implementations own transport, authentication and wire encoding. Each
/// call is a single attempt; a cancelled token must abort the call with
/// [`ApiError::Cancelled`].
#[async_trait]
pub trait ChargePointApi: Send + Sync {
    async fn get_cpn_instances(
        &self,
        cancel: &CancellationToken,
        request: GetCPNInstancesRequest,
    ) -> Result<GetCPNInstancesResponse, ApiError>;

    async fn get_stations(
        &self,
        cancel: &CancellationToken,
        request: GetStationsRequest,
    ) -> Result<GetStationsResponse, ApiError>;

    async fn get_station_groups(
        &self,
        cancel: &CancellationToken,
        request: GetStationGroupsRequest,
    ) -> Result<GetStationGroupsResponse, ApiError>;

    async fn shed_load(
        &self,
        cancel: &CancellationToken,
        request: ShedLoadRequest,
    ) -> Result<ShedLoadResponse, ApiError>;

    async fn clear_shed_state(
        &self,
        cancel: &CancellationToken,
        request: ClearShedStateRequest,
    ) -> Result<ClearShedStateResponse, ApiError>;

    async fn get_load(
        &self,
        cancel: &CancellationToken,
        request: GetLoadRequest,
    ) -> Result<GetLoadResponse, ApiError>;
}

/// Builds one API binding for a network address
pub trait ChargePointApiFactory: Send + Sync {
    fn connect(
        &self,
        address: &str,
        credentials: &ApiCredentials,
    ) -> Result<Arc<dyn ChargePointApi>, DomainError>;
}
