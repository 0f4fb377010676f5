use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// The cost of traversing an edge, or an accumulated path cost.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const DEFAULT: Weight = Weight(1.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Negative and NaN weights break shortest-path relaxation.
    pub fn is_valid_for_shortest_path(&self) -> bool {
        self.0 >= 0.0
    }

    /// Total order over weights, NaN sorting last.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

impl From<i32> for Weight {
    fn from(weight: i32) -> Self {
        Weight(f64::from(weight))
    }
}

/// Whether an edge is stored in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Undirected,
    Directed,
}

/// An adjacency-list entry: the edge target and its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode<T> {
    pub node: T,
    pub weight: Weight,
}

/// Flattened view of one adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    pub from: T,
    pub to: T,
    pub weight: Weight,
}

/// Mapping from each node to its outgoing entries, in insertion order.
pub type Adjacency<T> = HashMap<T, Vec<GraphNode<T>>>;

/// Result of a successful shortest-path search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<T> {
    /// Nodes from source to target, inclusive.
    pub nodes: Vec<T>,
    /// Sum of edge weights along `nodes`.
    pub distance: Weight,
}

impl<T> ShortestPath<T> {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
