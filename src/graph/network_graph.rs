//! Core graph structure — device registry with a name index.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::GraphLimits;
use crate::types::{Device, DeviceId, NetError, NetResult};

use super::listing::{ConnectionListing, GraphListing};
use super::traversal::{bfs_traverse, TraversalResult};

/// Result of a successful [`NetworkGraph::add_connection`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOutcome {
    /// Both devices now list each other.
    Added,
    /// The devices were already connected; nothing changed.
    AlreadyConnected,
    /// One endpoint had no room left; the connection was dropped on both sides.
    AtCapacity,
}

/// An undirected network of named devices.
///
/// Devices are kept in registration order and addressed by [`DeviceId`];
/// a hash index maps names to handles so lookups never scan.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    /// All devices, indexed by `DeviceId`.
    devices: Vec<Device>,
    /// Name -> handle.
    index: HashMap<String, DeviceId>,
    /// Number of undirected connections.
    connection_count: usize,
    limits: GraphLimits,
}

impl NetworkGraph {
    /// Create an empty graph with default limits.
    pub fn new() -> Self {
        Self::with_limits(GraphLimits::default())
    }

    /// Create an empty graph with the given limits.
    pub fn with_limits(limits: GraphLimits) -> Self {
        Self {
            devices: Vec::new(),
            index: HashMap::new(),
            connection_count: 0,
            limits,
        }
    }

    /// The limits this graph enforces.
    pub fn limits(&self) -> &GraphLimits {
        &self.limits
    }

    /// Number of devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Whether the graph holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// All devices in registration order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Get a device by handle.
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(id.index())
    }

    /// Resolve a name to its handle.
    pub fn find_device(&self, name: &str) -> Option<DeviceId> {
        self.index.get(name).copied()
    }

    /// Get a device by name.
    pub fn device_by_name(&self, name: &str) -> Option<&Device> {
        self.find_device(name).and_then(|id| self.device(id))
    }

    /// Whether a device with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name of the device behind a handle.
    pub fn name_of(&self, id: DeviceId) -> Option<&str> {
        self.device(id).map(Device::name)
    }

    /// Register a new device.
    pub fn add_device(&mut self, name: &str) -> NetResult<DeviceId> {
        if self.devices.len() >= self.limits.max_devices {
            log::warn!("Rejected device {name:?}: device limit reached");
            return Err(NetError::CapacityExceeded {
                what: "devices",
                limit: self.limits.max_devices,
            });
        }
        if self.index.contains_key(name) {
            log::warn!("Rejected device {name:?}: already exists");
            return Err(NetError::DuplicateDevice(name.to_owned()));
        }

        let id = u32::try_from(self.devices.len())
            .map(DeviceId)
            .map_err(|_| NetError::CapacityExceeded {
                what: "devices",
                limit: u32::MAX as usize,
            })?;
        let device = Device::new(id, name, self.limits.max_name_len)?;
        self.index.insert(device.name().to_owned(), id);
        self.devices.push(device);

        log::debug!("Added device {name:?} as {id}");
        Ok(id)
    }

    /// Connect two registered devices.
    ///
    /// Fails without touching the graph if either name is unknown or both
    /// names are the same device.
    pub fn add_connection(&mut self, name1: &str, name2: &str) -> NetResult<LinkOutcome> {
        let a = self.require(name1)?;
        let b = self.require(name2)?;
        if a == b {
            log::warn!("Rejected self-connection on {name1:?}");
            return Err(NetError::InvalidInput(format!(
                "cannot connect device {name1:?} to itself"
            )));
        }

        let max = self.limits.max_connections;
        let (da, db) = (&self.devices[a.index()], &self.devices[b.index()]);
        if da.is_connected_to(b) {
            return Ok(LinkOutcome::AlreadyConnected);
        }
        // Both sides or neither, so adjacency stays symmetric.
        if da.degree() >= max || db.degree() >= max {
            log::warn!("Dropped connection {name1:?} <-> {name2:?}: connection limit {max} reached");
            return Ok(LinkOutcome::AtCapacity);
        }

        self.devices[a.index()].add_connection(b, max);
        self.devices[b.index()].add_connection(a, max);
        self.connection_count += 1;

        log::debug!("Connected {name1:?} <-> {name2:?}");
        Ok(LinkOutcome::Added)
    }

    /// Whether two named devices are connected. Unknown names are never connected.
    pub fn is_connected(&self, name1: &str, name2: &str) -> bool {
        match (self.device_by_name(name1), self.find_device(name2)) {
            (Some(device), Some(other)) => device.is_connected_to(other),
            _ => false,
        }
    }

    /// Neighbor names of a device, in connection order.
    pub fn neighbors(&self, name: &str) -> NetResult<Vec<&str>> {
        let id = self.require(name)?;
        Ok(self.neighbor_names(id))
    }

    /// The connection listing of one device.
    pub fn display_connections(&self, name: &str) -> NetResult<ConnectionListing> {
        let id = self.require(name)?;
        Ok(self.listing_for(id))
    }

    /// The connection listing of every device, in registration order.
    pub fn display_all(&self) -> GraphListing {
        if self.devices.is_empty() {
            return GraphListing::Empty;
        }
        GraphListing::Devices(
            self.devices
                .iter()
                .map(|device| self.listing_for(device.id()))
                .collect(),
        )
    }

    /// Breadth-first traversal from a named device.
    pub fn bfs_search(&self, start: &str) -> NetResult<TraversalResult> {
        let id = self.require(start)?;
        bfs_traverse(self, id)
    }

    fn require(&self, name: &str) -> NetResult<DeviceId> {
        self.find_device(name)
            .ok_or_else(|| NetError::DeviceNotFound(name.to_owned()))
    }

    fn neighbor_names(&self, id: DeviceId) -> Vec<&str> {
        self.devices[id.index()]
            .neighbors()
            .iter()
            .map(|&n| self.devices[n.index()].name())
            .collect()
    }

    fn listing_for(&self, id: DeviceId) -> ConnectionListing {
        ConnectionListing {
            device: self.devices[id.index()].name().to_owned(),
            neighbors: self
                .neighbor_names(id)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}
