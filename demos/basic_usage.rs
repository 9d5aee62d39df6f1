//! Build a small network, list it, and walk it breadth-first.

use netgraph::*;

fn main() -> NetResult<()> {
    let mut builder = NetworkBuilder::new();
    builder
        .devices(["router", "switch", "laptop", "printer", "nas"])
        .link("router", "switch")
        .link("switch", "laptop")
        .link("switch", "printer")
        .link("router", "nas");

    let mut graph = builder.build()?;
    println!(
        "Network created with {} devices and {} connections",
        graph.device_count(),
        graph.connection_count()
    );

    print!("{}", graph.display_all());

    // Failures come back as values; nothing is printed by the library.
    if let Err(e) = graph.add_connection("laptop", "phone") {
        println!("Could not connect: {e}");
    }

    let result = graph.bfs_search("laptop")?;
    println!("\nBFS from laptop:");
    for &id in &result.visited {
        let name = graph.name_of(id).unwrap_or("?");
        let depth = result.depth_of(id).unwrap_or(0);
        println!("  [depth {}] {}", depth, name);
    }

    Ok(())
}
