//! CLI commands for waypoint

pub mod dispatch;
pub mod edges;
pub mod graph;
pub mod path;
pub mod sort;
