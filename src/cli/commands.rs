//! CLI command implementations.
//!
//! Each command builds a transient graph from the topology given on the
//! command line and returns the text to print, so the binary stays a thin
//! dispatcher.

use std::str::FromStr;

use crate::config::GraphLimits;
use crate::graph::{NetworkBuilder, NetworkGraph};
use crate::types::{NetError, NetResult};

/// A `--link A:B` argument. Names are taken verbatim, like `--device` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
}

impl FromStr for LinkSpec {
    type Err = NetError;

    fn from_str(s: &str) -> NetResult<Self> {
        match s.split_once(':') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok(Self {
                a: a.to_owned(),
                b: b.to_owned(),
            }),
            _ => Err(NetError::InvalidInput(format!(
                "link must look like NAME:NAME, got {s:?}"
            ))),
        }
    }
}

/// Build a graph from device names and links.
pub fn build_graph(
    limits: GraphLimits,
    devices: &[String],
    links: &[LinkSpec],
) -> NetResult<NetworkGraph> {
    let mut builder = NetworkBuilder::with_limits(limits);
    builder.devices(devices.iter().cloned());
    for link in links {
        builder.link(link.a.clone(), link.b.clone());
    }
    builder.build()
}

/// Show the connections of one device.
pub fn cmd_connections(graph: &NetworkGraph, name: &str, json: bool) -> NetResult<String> {
    let listing = graph.display_connections(name)?;
    if json {
        Ok(to_json(&listing))
    } else {
        Ok(listing.to_string())
    }
}

/// Show the connections of every device.
pub fn cmd_list(graph: &NetworkGraph, json: bool) -> NetResult<String> {
    let listing = graph.display_all();
    if json {
        Ok(to_json(&listing))
    } else {
        Ok(listing.to_string())
    }
}

/// Run a breadth-first traversal.
pub fn cmd_bfs(graph: &NetworkGraph, start: &str, json: bool) -> NetResult<String> {
    let result = graph.bfs_search(start)?;

    if json {
        let order: Vec<serde_json::Value> = result
            .visited
            .iter()
            .filter_map(|&id| {
                let name = graph.name_of(id)?;
                let depth = result.depth_of(id).unwrap_or(0);
                Some(serde_json::json!({"name": name, "depth": depth}))
            })
            .collect();
        return Ok(to_json(&serde_json::json!({
            "start": start,
            "reached": result.len(),
            "order": order,
        })));
    }

    let mut out = format!("BFS traversal from device {start}:\n");
    for &id in &result.visited {
        let depth = result.depth_of(id).unwrap_or(0);
        if let Some(name) = graph.name_of(id) {
            out.push_str(&format!(" - {name} [depth {depth}]\n"));
        }
    }
    Ok(out)
}

/// Summary counts and limits.
pub fn cmd_stats(graph: &NetworkGraph, json: bool) -> NetResult<String> {
    let limits = graph.limits();
    if json {
        return Ok(to_json(&serde_json::json!({
            "devices": graph.device_count(),
            "connections": graph.connection_count(),
            "limits": limits,
        })));
    }

    Ok(format!(
        "Devices: {}\nConnections: {}\nLimits:\n  Max devices: {}\n  Max connections per device: {}\n  Max name length: {}\n",
        graph.device_count(),
        graph.connection_count(),
        limits.max_devices,
        limits.max_connections,
        limits.max_name_len
    ))
}

/// The reference walkthrough: four devices, three links, listings, a
/// failed link to an unknown device, a traversal, and an empty graph.
pub fn cmd_demo(limits: GraphLimits, json: bool) -> NetResult<String> {
    let mut graph = NetworkGraph::with_limits(limits);
    for name in ["A", "B", "C", "D"] {
        graph.add_device(name)?;
    }
    for (a, b) in [("A", "B"), ("A", "C"), ("B", "D")] {
        graph.add_connection(a, b)?;
    }

    let shown = ["A", "C", "D"]
        .iter()
        .map(|name| graph.display_connections(name))
        .collect::<NetResult<Vec<_>>>()?;
    let failed_link = graph.add_connection("A", "Z").err();
    let traversal = graph.bfs_search("A")?;
    let empty = NetworkGraph::with_limits(limits).display_all();

    if json {
        return Ok(to_json(&serde_json::json!({
            "connections": shown,
            "failed_link": failed_link.map(|e| e.to_string()),
            "bfs": traversal.names(&graph),
            "empty_graph": empty,
        })));
    }

    let mut out = String::new();
    for listing in &shown {
        out.push_str(&listing.to_string());
    }
    if let Some(e) = failed_link {
        out.push_str(&format!("Error: {e}\n"));
    }
    out.push_str("BFS traversal from device A:\n");
    for name in traversal.names(&graph) {
        out.push_str(&format!(" - {name}\n"));
    }
    out.push_str(&empty.to_string());
    Ok(out)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
