pub mod host;
pub mod service;

pub use service::DeviceService;
