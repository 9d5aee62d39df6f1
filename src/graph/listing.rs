//! Structured adjacency listings, rendered as text via `Display` or as JSON via serde.

use std::fmt;

use serde::Serialize;

/// The neighbors of one device, in connection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionListing {
    /// Device name.
    pub device: String,
    /// Neighbor names. Empty means the device has no connections.
    pub neighbors: Vec<String>,
}

impl ConnectionListing {
    /// Whether the device has no connections.
    pub fn is_none(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl fmt::Display for ConnectionListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connections of device {}:", self.device)?;
        if self.neighbors.is_empty() {
            return writeln!(f, "   none");
        }
        for neighbor in &self.neighbors {
            writeln!(f, "   - {neighbor}")?;
        }
        Ok(())
    }
}

/// Listing of a whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "devices", rename_all = "snake_case")]
pub enum GraphListing {
    /// The graph has no devices.
    Empty,
    /// One listing per device, in registration order.
    Devices(Vec<ConnectionListing>),
}

impl GraphListing {
    /// The per-device listings; empty for an empty graph.
    pub fn entries(&self) -> &[ConnectionListing] {
        match self {
            Self::Empty => &[],
            Self::Devices(entries) => entries,
        }
    }
}

impl fmt::Display for GraphListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => writeln!(f, "The graph is empty."),
            Self::Devices(entries) => entries.iter().try_for_each(|entry| write!(f, "{entry}")),
        }
    }
}
