//! `waypoint path`: search for a path between two nodes

use waypoint_core::bail_not_found;
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::graph::{
    breadth_first_search, depth_first_search_iterative, dijkstra, Graph, Weight,
};

use crate::cli::{Algorithm, Cli, OutputFormat};

/// A found path and, for Dijkstra, its total weight
#[derive(Debug, PartialEq)]
pub struct PathResult {
    pub nodes: Vec<String>,
    pub distance: Option<Weight>,
}

/// Run one search. Endpoints must exist; an unreachable target is
/// [`WaypointError::NoPath`].
pub fn find_path(
    graph: &Graph<String>,
    from: &str,
    to: &str,
    algorithm: Algorithm,
) -> Result<PathResult> {
    let (from, to) = (from.to_string(), to.to_string());
    if !graph.contains_node(&from) {
        bail_not_found!("node", from);
    }
    if !graph.contains_node(&to) {
        bail_not_found!("node", to);
    }

    let found = match algorithm {
        Algorithm::Dfs => depth_first_search_iterative(graph, &from, &to).map(|nodes| PathResult {
            nodes,
            distance: None,
        }),
        Algorithm::Bfs => breadth_first_search(graph, &from, &to).map(|nodes| PathResult {
            nodes,
            distance: None,
        }),
        Algorithm::Dijkstra => {
            if graph.has_negative_weight() {
                return Err(WaypointError::InvalidGraph {
                    reason: "dijkstra requires non-negative edge weights".to_string(),
                });
            }
            dijkstra(graph, &from, &to).map(|path| PathResult {
                nodes: path.nodes,
                distance: Some(path.distance),
            })
        }
    };

    found.ok_or(WaypointError::NoPath { from, to })
}

pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    from: &str,
    to: &str,
    algorithm: Algorithm,
) -> Result<()> {
    let result = find_path(graph, from, to, algorithm)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "algorithm": algorithm,
                "path": result.nodes,
                "hops": result.nodes.len() - 1,
                "distance": result.distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", result.nodes.join(" -> "));
            if let Some(distance) = result.distance {
                if !cli.quiet {
                    println!("distance: {}", distance);
                }
            }
        }
    }

    Ok(())
}
