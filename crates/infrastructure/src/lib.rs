//! Infrastructure layer - Vendor HTTP binding and service configuration

pub mod chargepoint;
pub mod config;

pub use chargepoint::{HttpApiFactory, HttpChargePointApi, HttpLogSink};
pub use config::ServiceConfig;
