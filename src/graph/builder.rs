//! Fluent API for building NetworkGraph instances.

use crate::config::GraphLimits;
use crate::types::NetResult;

use super::NetworkGraph;

/// Fluent builder for constructing a NetworkGraph.
///
/// Devices and links are recorded as given and replayed on [`build`](Self::build),
/// so every validation error surfaces there.
pub struct NetworkBuilder {
    limits: GraphLimits,
    devices: Vec<String>,
    links: Vec<(String, String)>,
}

impl NetworkBuilder {
    /// Create a new builder with default limits.
    pub fn new() -> Self {
        Self::with_limits(GraphLimits::default())
    }

    /// Create a new builder with specific limits.
    pub fn with_limits(limits: GraphLimits) -> Self {
        Self {
            limits,
            devices: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a device.
    pub fn device(&mut self, name: impl Into<String>) -> &mut Self {
        self.devices.push(name.into());
        self
    }

    /// Add several devices.
    pub fn devices<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices.extend(names.into_iter().map(Into::into));
        self
    }

    /// Connect two devices.
    pub fn link(&mut self, a: impl Into<String>, b: impl Into<String>) -> &mut Self {
        self.links.push((a.into(), b.into()));
        self
    }

    /// Build the final NetworkGraph.
    pub fn build(&self) -> NetResult<NetworkGraph> {
        let mut graph = NetworkGraph::with_limits(self.limits);
        for name in &self.devices {
            graph.add_device(name)?;
        }
        for (a, b) in &self.links {
            graph.add_connection(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
