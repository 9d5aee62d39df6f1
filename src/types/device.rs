//! A single device and its ordered neighbor list.

use std::fmt;

use serde::Serialize;

use super::{NetError, NetResult};

/// Stable handle to a device: its registration index within the graph.
///
/// A handle is only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeviceId(pub(crate) u32);

impl DeviceId {
    /// Position of the device in registration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named network device.
///
/// Devices are only ever created by [`NetworkGraph::add_device`](crate::NetworkGraph::add_device).
/// The name is fixed at creation; neighbors keep the order in which the
/// connections were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: String,
    neighbors: Vec<DeviceId>,
}

impl Device {
    /// Create a device, validating its name against `max_name_len` bytes.
    pub(crate) fn new(id: DeviceId, name: &str, max_name_len: usize) -> NetResult<Self> {
        if name.is_empty() {
            return Err(NetError::InvalidInput("device name is empty".into()));
        }
        if name.len() > max_name_len {
            return Err(NetError::InvalidInput(format!(
                "device name is {} bytes, limit is {}",
                name.len(),
                max_name_len
            )));
        }
        Ok(Self {
            id,
            name: name.to_owned(),
            neighbors: Vec::new(),
        })
    }

    /// The device handle.
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// The device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbor handles in connection order.
    pub fn neighbors(&self) -> &[DeviceId] {
        &self.neighbors
    }

    /// Number of connections.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `other` is already a neighbor. Linear in the degree.
    pub fn is_connected_to(&self, other: DeviceId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Append `other` unless it is already a neighbor or the list is full.
    ///
    /// Never fails; returns whether the neighbor was appended.
    pub(crate) fn add_connection(&mut self, other: DeviceId, max_connections: usize) -> bool {
        if self.is_connected_to(other) || self.neighbors.len() >= max_connections {
            return false;
        }
        self.neighbors.push(other);
        true
    }
}
