//! Domain layer - Pure types and contracts with no I/O
//!
//! This crate contains:
//! - The error taxonomy surfaced to the device-management host
//! - Resource names and the host's typed value model
//! - Device bindings and API credentials
//! - Vendor API records and the facade trait (implemented in infrastructure)
//! - The protocol driver trait the host drives
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Per-operation success rules live next to the vendor records
//! - Testable in isolation

pub mod chargepoint;
pub mod command;
pub mod device;
pub mod driver;
pub mod error;
pub mod resource;

// Re-export commonly used types
pub use command::{CommandRequest, CommandValue, Value};
pub use device::{ApiCredentials, DeviceBinding, ProtocolProperties};
pub use error::{DomainError, Result};
pub use resource::{Resource, ValueType};
