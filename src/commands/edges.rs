//! `waypoint edges`: list a graph's adjacency entries

use waypoint_core::error::Result;
use waypoint_core::graph::Graph;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    let edges = graph.edges();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Human => {
            for edge in &edges {
                println!("{} -> {} ({})", edge.from, edge.to, edge.weight);
            }
            if !cli.quiet {
                println!(
                    "{} nodes, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
    }

    Ok(())
}
