//! netgraph — an in-memory undirected graph of named network devices.
//!
//! Devices are registered by name, connected pairwise, listed, and
//! traversed breadth-first. Every operation returns a value or a
//! [`NetError`]; nothing in the library prints.

pub mod cli;
pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_limits, GraphLimits};
pub use graph::{
    bfs_traverse, ConnectionListing, GraphListing, LinkOutcome, NetworkBuilder, NetworkGraph,
    TraversalResult,
};
pub use types::{
    Device, DeviceId, NetError, NetResult, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_DEVICES,
    DEFAULT_MAX_NAME_LEN,
};
