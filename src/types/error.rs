//! Error types for the netgraph library.

use thiserror::Error;

/// All errors that can occur in the netgraph library.
#[derive(Error, Debug)]
pub enum NetError {
    /// A hard capacity limit was reached.
    #[error("Maximum number of {what} reached: {limit}")]
    CapacityExceeded { what: &'static str, limit: usize },

    /// A device with this name is already registered.
    #[error("Device already exists: {0}")]
    DuplicateDevice(String),

    /// No device with this name (or handle) exists.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Malformed name, self-connection, or unparseable argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Limits configuration could not be parsed or is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for netgraph operations.
pub type NetResult<T> = Result<T, NetError>;
