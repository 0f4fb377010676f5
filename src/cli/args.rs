use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

/// Where a command reads its graph from
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// TOML graph definition
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Edge as FROM-TO or FROM-TO:WEIGHT (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub edge: Vec<String>,

    /// Treat --edge arguments as directed
    #[arg(long, short)]
    pub directed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first: first path found in adjacency order
    Dfs,
    /// Breadth-first: fewest edges
    Bfs,
    /// Dijkstra: lowest total weight
    Dijkstra,
}
