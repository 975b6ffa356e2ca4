mod endpoint_client;
mod registry;

pub use endpoint_client::{EndpointClient, parse_station_group_id};
pub use registry::ClientRegistry;
