//! CLI argument parsing for waypoint
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};

pub use args::{Algorithm, GraphArgs};
pub use output::OutputFormat;

/// Waypoint - search weighted graphs from the command line
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace" or "waypoint_core=trace")
    #[arg(long, global = true, env = "WAYPOINT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Path {
        /// Start node
        from: String,

        /// Target node
        to: String,

        /// Search algorithm
        #[arg(long, short, value_enum, default_value = "dijkstra")]
        algorithm: Algorithm,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List every edge of a graph
    Edges {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Sort integers with a binary min-heap
    Sort {
        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}
