//! Breadth-first traversal.

use netgraph::graph::{bfs_traverse, NetworkGraph};
use netgraph::types::NetError;
use netgraph::NetworkBuilder;

fn build(devices: &[&str], links: &[(&str, &str)]) -> NetworkGraph {
    let mut builder = NetworkBuilder::new();
    builder.devices(devices.iter().copied());
    for &(a, b) in links {
        builder.link(a, b);
    }
    builder.build().unwrap()
}

#[test]
fn test_bfs_reference_scenario() {
    let graph = build(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D")],
    );

    let result = graph.bfs_search("A").unwrap();
    assert_eq!(result.names(&graph), ["A", "B", "C", "D"]);
    assert_eq!(result.start, graph.find_device("A").unwrap());

    let depth = |name: &str| result.depth_of(graph.find_device(name).unwrap());
    assert_eq!(depth("A"), Some(0));
    assert_eq!(depth("B"), Some(1));
    assert_eq!(depth("C"), Some(1));
    assert_eq!(depth("D"), Some(2));
}

#[test]
fn test_bfs_isolated_device() {
    let graph = build(&["A", "B", "lonely"], &[("A", "B")]);

    let result = graph.bfs_search("lonely").unwrap();
    assert_eq!(result.names(&graph), ["lonely"]);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_bfs_skips_unreachable() {
    let graph = build(
        &["A", "B", "C", "X", "Y"],
        &[("A", "B"), ("B", "C"), ("X", "Y")],
    );

    let result = graph.bfs_search("B").unwrap();
    assert_eq!(result.names(&graph), ["B", "A", "C"]);
    assert_eq!(result.depth_of(graph.find_device("X").unwrap()), None);
}

#[test]
fn test_bfs_visits_each_device_once_in_cycles() {
    // Square with a diagonal: D is a neighbor of both B and C.
    let graph = build(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("A", "D")],
    );

    let result = graph.bfs_search("A").unwrap();
    assert_eq!(result.names(&graph), ["A", "B", "C", "D"]);
    assert_eq!(result.depth_of(graph.find_device("D").unwrap()), Some(1));
}

#[test]
fn test_bfs_follows_connection_order() {
    let graph = build(
        &["hub", "z", "y", "x"],
        &[("hub", "x"), ("hub", "z"), ("hub", "y")],
    );

    let result = graph.bfs_search("hub").unwrap();
    assert_eq!(result.names(&graph), ["hub", "x", "z", "y"]);
}

#[test]
fn test_bfs_chain_depths() {
    let names: Vec<String> = (0..10).map(|i| format!("n{}", i)).collect();
    let mut graph = NetworkGraph::new();
    for name in &names {
        graph.add_device(name).unwrap();
    }
    for pair in names.windows(2) {
        graph.add_connection(&pair[0], &pair[1]).unwrap();
    }

    let result = graph.bfs_search("n0").unwrap();
    assert_eq!(result.len(), 10);
    for (i, &id) in result.visited.iter().enumerate() {
        assert_eq!(result.depth_of(id), Some(i as u32));
    }
}

#[test]
fn test_bfs_missing_start() {
    let graph = build(&["A"], &[]);

    match graph.bfs_search("Z") {
        Err(NetError::DeviceNotFound(name)) => assert_eq!(name, "Z"),
        other => panic!("Expected DeviceNotFound, got {:?}", other),
    }
}

#[test]
fn test_bfs_traverse_by_handle() {
    let graph = build(&["A", "B"], &[("A", "B")]);
    let b = graph.find_device("B").unwrap();

    let result = bfs_traverse(&graph, b).unwrap();
    assert_eq!(result.names(&graph), ["B", "A"]);

    let other = build(&["A", "B", "C"], &[]);
    let foreign = other.find_device("C").unwrap();
    assert!(matches!(
        bfs_traverse(&graph, foreign),
        Err(NetError::DeviceNotFound(_))
    ));
}

#[test]
fn test_bfs_handle_is_resolved_against_given_graph() {
    let graph = build(&["A", "B"], &[("A", "B")]);
    let other = build(&["X"], &[]);
    let x = other.find_device("X").unwrap();

    // Same index, so it names "A" in `graph`.
    let result = bfs_traverse(&graph, x).unwrap();
    assert_eq!(result.names(&graph), ["A", "B"]);
}
