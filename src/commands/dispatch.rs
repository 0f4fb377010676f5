//! Command dispatch logic for waypoint
use std::time::Instant;

use waypoint_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Path {
            from,
            to,
            algorithm,
            graph,
        } => {
            let graph = commands::graph::load_graph(graph)?;
            commands::path::execute(cli, &graph, from, to, *algorithm)
        }

        Commands::Edges { graph } => {
            let graph = commands::graph::load_graph(graph)?;
            commands::edges::execute(cli, &graph)
        }

        Commands::Sort { values } => commands::sort::execute(cli, values.clone()),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "command finished");
    result
}
