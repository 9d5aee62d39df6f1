//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use crate::types::{DeviceId, NetError, NetResult};

use super::NetworkGraph;

/// Result of a breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    /// Where the traversal started.
    pub start: DeviceId,
    /// Devices in the order they were dequeued (BFS order).
    pub visited: Vec<DeviceId>,
    /// Hop count from `start` for every visited device.
    pub depths: HashMap<DeviceId, u32>,
}

impl TraversalResult {
    /// Names of the visited devices, in BFS order.
    pub fn names<'g>(&self, graph: &'g NetworkGraph) -> Vec<&'g str> {
        self.visited
            .iter()
            .filter_map(|&id| graph.name_of(id))
            .collect()
    }

    /// Hop count of a device, or `None` if it was not reached.
    pub fn depth_of(&self, id: DeviceId) -> Option<u32> {
        self.depths.get(&id).copied()
    }

    /// Number of devices reached, including the start.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Always false: the start device is always visited.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// BFS from `start`, following neighbors in connection order.
///
/// A device is marked visited when it is enqueued, so no device is queued
/// twice even when several frontier devices share it as a neighbor.
///
/// `start` must come from `graph`. Handles are plain registration indices:
/// one from a larger graph fails with `DeviceNotFound`, but one from another
/// graph that happens to be in range starts at whichever device holds that
/// index. Use [`NetworkGraph::bfs_search`] to start from a name instead.
pub fn bfs_traverse(graph: &NetworkGraph, start: DeviceId) -> NetResult<TraversalResult> {
    if graph.device(start).is_none() {
        return Err(NetError::DeviceNotFound(start.to_string()));
    }

    let mut seen = vec![false; graph.device_count()];
    let mut visited: Vec<DeviceId> = Vec::new();
    let mut depths: HashMap<DeviceId, u32> = HashMap::new();
    let mut queue: VecDeque<(DeviceId, u32)> = VecDeque::new();

    seen[start.index()] = true;
    depths.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        visited.push(current);

        let Some(device) = graph.device(current) else {
            continue;
        };
        for &neighbor in device.neighbors() {
            if seen[neighbor.index()] {
                continue;
            }
            seen[neighbor.index()] = true;
            depths.insert(neighbor, depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    log::debug!(
        "BFS from {} reached {} of {} devices",
        start,
        visited.len(),
        graph.device_count()
    );

    Ok(TraversalResult {
        start,
        visited,
        depths,
    })
}
