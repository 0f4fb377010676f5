use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::collections::Queue;
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::GraphProvider;

/// Breadth-first search from `start` to `target`.
///
/// Explores level by level with a [`Queue`], marking nodes visited when
/// they are enqueued so no node is queued twice. The returned path has
/// the fewest nodes of any path; edge weights are ignored.
#[tracing::instrument(level = "debug", skip_all)]
pub fn breadth_first_search<T, P>(provider: &P, start: &T, target: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
    P: GraphProvider<T> + ?Sized,
{
    if !provider.contains(start) {
        return None;
    }

    let mut visited = HashSet::new();
    let mut predecessors: HashMap<T, T> = HashMap::new();
    let mut queue = Queue::new();

    visited.insert(start.clone());
    queue.enqueue(start.clone());

    while let Some(current) = queue.dequeue() {
        if current == *target {
            let path = reconstruct_path(&predecessors, start, target);
            tracing::debug!(
                path_len = path.as_ref().map_or(0, Vec::len),
                visited = visited.len(),
                "bfs reached target"
            );
            return path;
        }

        for entry in provider.neighbors(&current).unwrap_or(&[]) {
            if visited.insert(entry.node.clone()) {
                predecessors.insert(entry.node.clone(), current.clone());
                queue.enqueue(entry.node.clone());
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs exhausted without reaching target");
    None
}
