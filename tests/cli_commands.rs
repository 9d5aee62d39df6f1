//! CLI command output.

use netgraph::cli::commands::{
    build_graph, cmd_bfs, cmd_connections, cmd_demo, cmd_list, cmd_stats, LinkSpec,
};
use netgraph::types::NetError;
use netgraph::GraphLimits;

fn sample() -> netgraph::NetworkGraph {
    let devices: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
    let links: Vec<LinkSpec> = ["A:B", "A:C", "B:D"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    build_graph(GraphLimits::default(), &devices, &links).unwrap()
}

#[test]
fn test_link_spec_parsing() {
    let link: LinkSpec = "core-1:edge-2".parse().unwrap();
    assert_eq!(link.a, "core-1");
    assert_eq!(link.b, "edge-2");

    // Padding is kept so link names match `--device` names exactly.
    let padded: LinkSpec = " A:B ".parse().unwrap();
    assert_eq!(padded.a, " A");
    assert_eq!(padded.b, "B ");

    for bad in ["A", "A:", ":B", ""] {
        assert!(
            matches!(bad.parse::<LinkSpec>(), Err(NetError::InvalidInput(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_padded_names_link_consistently() {
    let devices = vec![" A".to_string(), "B".to_string()];
    let links: Vec<LinkSpec> = vec![" A:B".parse().unwrap()];
    let graph = build_graph(GraphLimits::default(), &devices, &links).unwrap();

    assert!(graph.is_connected(" A", "B"));
    assert!(!graph.contains("A"));
}

#[test]
fn test_connections_text_and_json() {
    let graph = sample();

    let text = cmd_connections(&graph, "D", false).unwrap();
    assert_eq!(text, "Connections of device D:\n   - B\n");

    let json: serde_json::Value =
        serde_json::from_str(&cmd_connections(&graph, "A", true).unwrap()).unwrap();
    assert_eq!(json["device"], "A");
    assert_eq!(json["neighbors"], serde_json::json!(["B", "C"]));

    assert!(matches!(
        cmd_connections(&graph, "Z", false),
        Err(NetError::DeviceNotFound(_))
    ));
}

#[test]
fn test_list_empty_graph() {
    let graph = build_graph(GraphLimits::default(), &[], &[]).unwrap();
    assert_eq!(cmd_list(&graph, false).unwrap(), "The graph is empty.\n");
}

#[test]
fn test_bfs_text_and_json() {
    let graph = sample();

    let text = cmd_bfs(&graph, "A", false).unwrap();
    assert_eq!(
        text,
        "BFS traversal from device A:\n - A [depth 0]\n - B [depth 1]\n - C [depth 1]\n - D [depth 2]\n"
    );

    let json: serde_json::Value = serde_json::from_str(&cmd_bfs(&graph, "A", true).unwrap()).unwrap();
    assert_eq!(json["reached"], 4);
    assert_eq!(json["order"][3]["name"], "D");
    assert_eq!(json["order"][3]["depth"], 2);
}

#[test]
fn test_stats() {
    let graph = sample();
    let text = cmd_stats(&graph, false).unwrap();
    assert!(text.contains("Devices: 4"));
    assert!(text.contains("Connections: 3"));

    let json: serde_json::Value = serde_json::from_str(&cmd_stats(&graph, true).unwrap()).unwrap();
    assert_eq!(json["limits"]["max_devices"], 100);
}

#[test]
fn test_demo_walkthrough() {
    let text = cmd_demo(GraphLimits::default(), false).unwrap();
    let expected = "\
Connections of device A:
   - B
   - C
Connections of device C:
   - A
Connections of device D:
   - B
Error: Device not found: Z
BFS traversal from device A:
 - A
 - B
 - C
 - D
The graph is empty.
";
    assert_eq!(text, expected);

    let json: serde_json::Value =
        serde_json::from_str(&cmd_demo(GraphLimits::default(), true).unwrap()).unwrap();
    assert_eq!(json["bfs"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(json["empty_graph"]["status"], "empty");
    assert_eq!(json["failed_link"], "Device not found: Z");
}
