//! CLI entry point for the `netgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use netgraph::cli::commands::{self, LinkSpec};
use netgraph::config::load_limits;
use netgraph::{NetError, NetResult, NetworkGraph};

#[derive(Parser)]
#[command(
    name = "netgraph",
    about = "netgraph CLI — inspect small networks of named devices"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML file with graph limits (falls back to $NETGRAPH_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Topology shared by every graph-building subcommand.
#[derive(Args)]
struct Topology {
    /// Device to register (repeatable, registration order is kept)
    #[arg(long = "device", short = 'd')]
    devices: Vec<String>,
    /// Connection between two devices as NAME:NAME (repeatable)
    #[arg(long = "link", short = 'l')]
    links: Vec<LinkSpec>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in walkthrough on a four-device network
    Demo,
    /// Show the connections of one device
    Connections {
        #[command(flatten)]
        topology: Topology,
        /// Device name
        name: String,
    },
    /// Show the connections of every device
    List {
        #[command(flatten)]
        topology: Topology,
    },
    /// Breadth-first traversal from a device
    Bfs {
        #[command(flatten)]
        topology: Topology,
        /// Starting device name
        start: String,
    },
    /// Device and connection counts plus active limits
    Stats {
        #[command(flatten)]
        topology: Topology,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> NetResult<String> {
    let json = cli.format == Format::Json;
    let limits = load_limits(cli.config.as_deref())?;
    let build = |t: &Topology| -> NetResult<NetworkGraph> {
        commands::build_graph(limits, &t.devices, &t.links)
    };

    match cli.command {
        Commands::Demo => commands::cmd_demo(limits, json),
        Commands::Connections { topology, name } => {
            commands::cmd_connections(&build(&topology)?, &name, json)
        }
        Commands::List { topology } => commands::cmd_list(&build(&topology)?, json),
        Commands::Bfs { topology, start } => commands::cmd_bfs(&build(&topology)?, &start, json),
        Commands::Stats { topology } => commands::cmd_stats(&build(&topology)?, json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                NetError::Io(_) | NetError::Config(_) | NetError::InvalidInput(_) => 2,
                NetError::DeviceNotFound(_) => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
