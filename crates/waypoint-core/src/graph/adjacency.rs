//! Weighted adjacency-list graph

use std::hash::Hash;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Adjacency, Edge, EdgeKind, GraphNode, Weight};

/// A weighted graph stored as an adjacency list.
///
/// Undirected edges are materialised as two entries with the same weight
/// when they are added. Node keys are unique; nodes and each node's
/// entries keep their insertion order, which fixes the order in which the
/// searches explore neighbors.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    adjacency: Adjacency<T>,
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub fn new() -> Self {
        Self {
            adjacency: Adjacency::new(),
            order: Vec::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples of one kind.
    pub fn from_edges<I, W>(edges: I, kind: EdgeKind) -> Self
    where
        I: IntoIterator<Item = (T, T, W)>,
        W: Into<Weight>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight, kind);
        }
        graph
    }

    /// Adds a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: T) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Adds an edge, creating missing endpoints. Undirected edges also get
    /// the reciprocal entry. Always returns `true`.
    pub fn add_edge(&mut self, from: T, to: T, weight: impl Into<Weight>, kind: EdgeKind) -> bool {
        let weight = weight.into();
        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(entries) = self.adjacency.get_mut(&from) {
            entries.push(GraphNode {
                node: to.clone(),
                weight,
            });
        }
        if kind == EdgeKind::Undirected {
            if let Some(entries) = self.adjacency.get_mut(&to) {
                entries.push(GraphNode { node: from, weight });
            }
        }
        true
    }

    /// Undirected edge of weight 1.
    pub fn connect(&mut self, from: T, to: T) -> bool {
        self.add_edge(from, to, Weight::DEFAULT, EdgeKind::Undirected)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[T] {
        &self.order
    }

    /// Every adjacency entry as an edge, grouped by source in node order.
    /// An undirected edge appears once from each side.
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.order
            .iter()
            .flat_map(|from| {
                self.adjacency
                    .get(from)
                    .into_iter()
                    .flatten()
                    .map(move |entry| Edge {
                        from: from.clone(),
                        to: entry.node.clone(),
                        weight: entry.weight,
                    })
            })
            .collect()
    }

    pub fn neighbors(&self, node: &T) -> Option<&[GraphNode<T>]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    pub fn adjacency(&self) -> &Adjacency<T> {
        &self.adjacency
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of adjacency entries (undirected edges count twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn has_negative_weight(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|entry| !entry.weight.is_valid_for_shortest_path())
    }
}

impl<T: Eq + Hash + Clone> GraphProvider<T> for Graph<T> {
    fn neighbors(&self, node: &T) -> Option<&[GraphNode<T>]> {
        Graph::neighbors(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_node("A"));
        assert!(!graph.add_node("A"));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors(&"A"), Some(&[][..]));
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("A", "B", 4, EdgeKind::Undirected));

        let expected_b = GraphNode {
            node: "B",
            weight: Weight::new(4.0),
        };
        let expected_a = GraphNode {
            node: "A",
            weight: Weight::new(4.0),
        };
        assert!(graph.neighbors(&"A").unwrap().contains(&expected_b));
        assert!(graph.neighbors(&"B").unwrap().contains(&expected_a));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 3.5, EdgeKind::Directed);
        assert_eq!(graph.neighbors(&1).unwrap().len(), 1);
        assert_eq!(graph.neighbors(&2).unwrap().len(), 0);
        assert!(graph.contains_node(&2));
    }

    #[test]
    fn test_connect_defaults() {
        let mut graph = Graph::new();
        graph.connect('x', 'y');
        let entry = &graph.neighbors(&'y').unwrap()[0];
        assert_eq!(entry.node, 'x');
        assert_eq!(entry.weight, Weight::DEFAULT);
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("C", "A", 1, EdgeKind::Directed);
        graph.add_node("B");
        graph.add_node("A");
        assert_eq!(graph.nodes(), &["C", "A", "B"]);
    }

    #[test]
    fn test_edges_flatten_adjacency() {
        let graph = Graph::from_edges(vec![("A", "B", 2), ("B", "C", 5)], EdgeKind::Undirected);
        let edges: Vec<_> = graph
            .edges()
            .into_iter()
            .map(|e| (e.from, e.to, e.weight.value()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("A", "B", 2.0),
                ("B", "A", 2.0),
                ("B", "C", 5.0),
                ("C", "B", 5.0),
            ]
        );
    }

    #[test]
    fn test_missing_node_has_no_neighbors() {
        let graph: Graph<&str> = Graph::new();
        assert!(graph.neighbors(&"nope").is_none());
        assert!(!GraphProvider::contains(&graph, &"nope"));
    }

    #[test]
    fn test_has_negative_weight() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1, EdgeKind::Directed);
        assert!(!graph.has_negative_weight());
        graph.add_edge("B", "C", -1, EdgeKind::Directed);
        assert!(graph.has_negative_weight());
    }

    #[test]
    fn test_self_loop_undirected() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 1, EdgeKind::Undirected);
        assert_eq!(graph.neighbors(&"A").unwrap().len(), 2);
    }
}
