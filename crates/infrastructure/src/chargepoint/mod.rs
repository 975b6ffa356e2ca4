mod factory;
mod http_client;
mod http_log;

pub use factory::HttpApiFactory;
pub use http_client::HttpChargePointApi;
pub use http_log::{HttpExchange, HttpLogSink};
