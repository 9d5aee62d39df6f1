//! Core data types for the netgraph library.

pub mod device;
pub mod error;

pub use device::{Device, DeviceId};
pub use error::{NetError, NetResult};

/// Default maximum number of devices in one graph.
pub const DEFAULT_MAX_DEVICES: usize = 100;

/// Default maximum number of connections held by one device.
pub const DEFAULT_MAX_CONNECTIONS: usize = 20;

/// Default maximum device name length, in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 29;
