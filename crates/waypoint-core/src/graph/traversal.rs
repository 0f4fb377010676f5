use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::types::{Adjacency, GraphNode};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider<T> {
    /// Outgoing entries of `node`, or `None` if the node is unknown.
    fn neighbors(&self, node: &T) -> Option<&[GraphNode<T>]>;

    fn contains(&self, node: &T) -> bool {
        self.neighbors(node).is_some()
    }
}

impl<T: Eq + Hash> GraphProvider<T> for Adjacency<T> {
    fn neighbors(&self, node: &T) -> Option<&[GraphNode<T>]> {
        HashMap::get(self, node).map(Vec::as_slice)
    }
}
