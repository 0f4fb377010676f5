//! Graph loading shared by the graph commands

use std::str::FromStr;

use waypoint_core::{bail_invalid, bail_usage};
use waypoint_core::config::{EdgeConfig, GraphConfig};
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::graph::{EdgeKind, Graph, Weight};

use crate::cli::GraphArgs;

/// An edge given on the command line as `FROM-TO[:WEIGHT]`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl FromStr for EdgeSpec {
    type Err = WaypointError;

    fn from_str(s: &str) -> Result<Self> {
        let (endpoints, weight) = match s.rsplit_once(':') {
            Some((endpoints, weight)) => match weight.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => (endpoints, Weight::new(value)),
                _ => bail_invalid!("edge weight", s),
            },
            None => (s, Weight::DEFAULT),
        };

        let Some((from, to)) = endpoints.split_once('-') else {
            bail_invalid!("edge", s)
        };
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            bail_invalid!("edge", s);
        }

        Ok(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Combine the `--graph` file and `--edge` arguments into one definition.
///
/// File edges keep their own kinds; `--directed` only applies to edges
/// given on the command line.
pub fn load_config(args: &GraphArgs) -> Result<GraphConfig> {
    let mut config = match &args.graph {
        Some(path) => GraphConfig::load(path)?,
        None if args.edge.is_empty() => {
            bail_usage!("no graph given: pass --graph FILE or --edge FROM-TO")
        }
        None => GraphConfig::default(),
    };

    let kind = if args.directed {
        EdgeKind::Directed
    } else {
        EdgeKind::Undirected
    };
    for raw in &args.edge {
        let spec: EdgeSpec = raw.parse()?;
        config.edges.push(EdgeConfig {
            from: spec.from,
            to: spec.to,
            weight: spec.weight,
            kind: Some(kind),
        });
    }

    Ok(config)
}

pub fn load_graph(args: &GraphArgs) -> Result<Graph<String>> {
    let graph = load_config(args)?.build_graph();
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
