//! Waypoint Core Library
//!
//! Hand-built collections (queue, stacks, linked list, binary heap) and
//! the graph searches layered on them: depth-first, breadth-first and
//! Dijkstra shortest paths.

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
