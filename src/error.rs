//! Error types for exword.

use thiserror::Error;

use crate::protocol::{HeaderId, Status};

/// Main error type for all exword operations.
#[derive(Debug, Error)]
pub enum ExwordError {
    /// No attached device matched the configured vendor/product pair.
    #[error("No device found matching {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// I/O error from the USB stack.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport could not open or talk to the device handle.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request engine failed to initialize or to execute a request.
    #[error("Request engine error: {0}")]
    Engine(String),

    /// The device answered with a non-success response code.
    #[error("Device responded: {0} (0x{raw:02x})", raw = .0.raw())]
    Status(Status),

    /// A response body is inconsistent with its own length fields.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A response carried no header of the expected kind.
    #[error("Missing {0:?} header in response")]
    MissingHeader(HeaderId),

    /// A filename contains an interior NUL and cannot be sent to the device.
    #[error("Invalid filename: interior NUL byte")]
    InvalidName,

    /// Session configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ExwordError {
    /// The raw response status, if this error came from the device.
    pub fn status(&self) -> Option<Status> {
        match self {
            ExwordError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using ExwordError.
pub type Result<T> = std::result::Result<T, ExwordError>;
