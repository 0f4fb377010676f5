use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Instant;

use crate::collections::MinHeap;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{ShortestPath, Weight};
use crate::graph::Graph;
use crate::trace_time;

/// Heap entry ordered by tentative distance
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub node: T,
    pub distance: Weight,
}

fn by_distance<T>(a: &HeapEntry<T>, b: &HeapEntry<T>) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

type DistanceHeap<T> = MinHeap<HeapEntry<T>, fn(&HeapEntry<T>, &HeapEntry<T>) -> Ordering>;

/// State tracked during Dijkstra traversal
struct DijkstraState<T> {
    distances: HashMap<T, Weight>,
    predecessors: HashMap<T, T>,
    visited: HashSet<T>,
    heap: DistanceHeap<T>,
}

impl<T: Eq + Hash + Clone> DijkstraState<T> {
    fn new(graph: &Graph<T>, from: &T) -> Self {
        let mut distances: HashMap<T, Weight> = graph
            .nodes()
            .iter()
            .map(|node| (node.clone(), Weight::INFINITY))
            .collect();
        distances.insert(from.clone(), Weight::ZERO);

        let mut heap: DistanceHeap<T> = MinHeap::with_comparator(
            by_distance::<T> as fn(&HeapEntry<T>, &HeapEntry<T>) -> Ordering,
        );
        heap.insert(HeapEntry {
            node: from.clone(),
            distance: Weight::ZERO,
        });

        Self {
            distances,
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            heap,
        }
    }

    fn distance_to(&self, node: &T) -> Weight {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }
}

/// Settle nodes in order of distance from `from`, stopping early once
/// `target` is settled.
fn explore<T>(graph: &Graph<T>, from: &T, target: Option<&T>) -> Option<DijkstraState<T>>
where
    T: Eq + Hash + Clone,
{
    if graph.has_negative_weight() {
        tracing::debug!("rejecting graph with a negative or NaN edge weight");
        return None;
    }
    if !graph.contains_node(from) {
        return None;
    }

    let mut state = DijkstraState::new(graph, from);

    while let Some(HeapEntry {
        node: current,
        distance,
    }) = state.heap.pop_min()
    {
        // A node can sit in the heap several times; only its first pop counts
        if !state.visited.insert(current.clone()) {
            continue;
        }
        if target == Some(&current) {
            break;
        }

        for entry in graph.neighbors(&current).unwrap_or(&[]) {
            if state.visited.contains(&entry.node) {
                continue;
            }
            let candidate = distance + entry.weight;
            if candidate.total_cmp(&state.distance_to(&entry.node)).is_lt() {
                tracing::trace!(distance = candidate.value(), "relaxed edge");
                state.distances.insert(entry.node.clone(), candidate);
                state
                    .predecessors
                    .insert(entry.node.clone(), current.clone());
                state.heap.insert(HeapEntry {
                    node: entry.node.clone(),
                    distance: candidate,
                });
            }
        }
    }

    Some(state)
}

/// Find the lowest-weight path from `from` to `to`.
///
/// Returns `None` when the graph has any negative (or NaN) edge weight,
/// when either endpoint is missing, or when `to` cannot be reached.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn dijkstra<T>(graph: &Graph<T>, from: &T, to: &T) -> Option<ShortestPath<T>>
where
    T: Eq + Hash + Clone,
{
    let start = Instant::now();
    if !graph.contains_node(to) {
        return None;
    }

    let state = explore(graph, from, Some(to))?;
    let distance = state.distance_to(to);
    if distance == Weight::INFINITY {
        tracing::debug!(visited = state.visited.len(), "target unreachable");
        return None;
    }

    let nodes = reconstruct_path(&state.predecessors, from, to)?;
    trace_time!(start, "dijkstra", hops = nodes.len() - 1);
    Some(ShortestPath { nodes, distance })
}

/// Distance from `from` to every node it can reach, itself included.
///
/// Same preconditions as [`dijkstra`].
#[tracing::instrument(level = "debug", skip_all, fields(nodes = graph.node_count()))]
pub fn shortest_distances<T>(graph: &Graph<T>, from: &T) -> Option<HashMap<T, Weight>>
where
    T: Eq + Hash + Clone,
{
    let state = explore(graph, from, None)?;
    Some(
        state
            .distances
            .into_iter()
            .filter(|(_, distance)| *distance != Weight::INFINITY)
            .collect(),
    )
}
