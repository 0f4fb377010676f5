//! Graph storage, traversal and path-finding operations
//!
//! Provides graph algorithms over a weighted adjacency list:
//! - DFS path search (recursive and explicit-stack)
//! - BFS path search for fewest-hop paths
//! - Dijkstra path-finding for weighted shortest paths
//! - Graph provider trait so searches run on a `Graph` or a bare adjacency map

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use bfs::breadth_first_search;
pub use dfs::{depth_first_search, depth_first_search_iterative};
pub use dijkstra::{dijkstra, shortest_distances};
pub use path::reconstruct_path;
pub use traversal::GraphProvider;
pub use types::{Adjacency, Edge, EdgeKind, GraphNode, ShortestPath, Weight};
