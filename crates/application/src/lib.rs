//! Application layer - Command dispatch and endpoint client management

pub mod command;
pub mod device;
pub mod driver;

pub use command::CommandDispatcher;
pub use device::{ClientRegistry, EndpointClient};
pub use driver::EvChargerDriver;
