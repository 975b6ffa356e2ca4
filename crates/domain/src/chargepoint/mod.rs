mod api;
mod error;
pub mod schema;

pub use api::{ChargePointApi, ChargePointApiFactory};
pub use error::ApiError;
pub use schema::{
    ClearShedStateRequest, ClearShedStateResponse, GetCPNInstancesRequest,
    GetCPNInstancesResponse, GetLoadRequest, GetLoadResponse, GetStationGroupsRequest,
    GetStationGroupsResponse, GetStationsRequest, GetStationsResponse, ShedLoadRequest,
    ShedLoadResponse,
};
