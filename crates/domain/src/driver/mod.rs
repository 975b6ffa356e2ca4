mod protocol_driver;

pub use protocol_driver::ProtocolDriver;
