//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod listing;
pub mod network_graph;
pub mod traversal;

pub use builder::NetworkBuilder;
pub use listing::{ConnectionListing, GraphListing};
pub use network_graph::{LinkOutcome, NetworkGraph};
pub use traversal::{bfs_traverse, TraversalResult};
