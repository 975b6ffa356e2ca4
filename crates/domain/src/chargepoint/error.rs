use thiserror::Error;

/// Failures raised by a vendor API facade implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,
}
