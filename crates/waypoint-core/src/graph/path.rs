//! Path reconstruction utilities for graph traversal

use std::collections::HashMap;
use std::hash::Hash;

/// Walks `predecessors` back from `to` until `from`, returning the path
/// in source-to-target order.
///
/// Returns `None` when the walk hits a node with no predecessor before
/// reaching `from`, so a target the search never reached cannot produce a
/// path that starts somewhere else.
pub fn reconstruct_path<T>(predecessors: &HashMap<T, T>, from: &T, to: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        // A predecessor map is a tree rooted at `from`; anything longer loops.
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
