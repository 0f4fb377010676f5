//! Depth-first path search
//!
//! Both variants explore neighbors in adjacency-list order and return the
//! first path that reaches the target, which is not necessarily the
//! shortest one.

use std::collections::HashSet;
use std::hash::Hash;

use crate::collections::Stack;
use crate::graph::traversal::GraphProvider;

/// Recursive depth-first search from `start` to `target`.
///
/// Returns `None` if `start` is not in the graph or `target` cannot be
/// reached. Recursion depth equals the length of the path being explored;
/// use [`depth_first_search_iterative`] for very deep graphs.
#[tracing::instrument(level = "debug", skip_all)]
pub fn depth_first_search<T, P>(provider: &P, start: &T, target: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
    P: GraphProvider<T> + ?Sized,
{
    if !provider.contains(start) {
        return None;
    }

    let mut visited = HashSet::new();
    let mut path = Vec::new();
    if visit(provider, start, target, &mut visited, &mut path) {
        tracing::debug!(path_len = path.len(), "dfs reached target");
        Some(path)
    } else {
        tracing::debug!(visited = visited.len(), "dfs exhausted without reaching target");
        None
    }
}

fn visit<T, P>(
    provider: &P,
    current: &T,
    target: &T,
    visited: &mut HashSet<T>,
    path: &mut Vec<T>,
) -> bool
where
    T: Eq + Hash + Clone,
    P: GraphProvider<T> + ?Sized,
{
    visited.insert(current.clone());
    path.push(current.clone());

    if current == target {
        return true;
    }

    for entry in provider.neighbors(current).unwrap_or(&[]) {
        if !visited.contains(&entry.node) && visit(provider, &entry.node, target, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Depth-first search driven by an explicit [`Stack`] instead of the call
/// stack. Visits nodes in the same order as [`depth_first_search`] and
/// returns the same path.
#[tracing::instrument(level = "debug", skip_all)]
pub fn depth_first_search_iterative<T, P>(provider: &P, start: &T, target: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
    P: GraphProvider<T> + ?Sized,
{
    if !provider.contains(start) {
        return None;
    }
    if start == target {
        return Some(vec![start.clone()]);
    }

    // Each frame is a node on the current path plus the index of the next
    // neighbor to try.
    let mut frames: Stack<(T, usize)> = Stack::new();
    let mut visited = HashSet::new();
    visited.insert(start.clone());
    frames.push((start.clone(), 0));

    loop {
        let next = {
            let frame = frames.peek_mut()?;
            let neighbors = provider.neighbors(&frame.0).unwrap_or(&[]);
            let offset = neighbors
                .get(frame.1..)
                .unwrap_or(&[])
                .iter()
                .position(|entry| !visited.contains(&entry.node));
            offset.map(|offset| {
                let index = frame.1 + offset;
                frame.1 = index + 1;
                neighbors[index].node.clone()
            })
        };

        match next {
            Some(node) => {
                visited.insert(node.clone());
                let reached = node == *target;
                frames.push((node, 0));
                if reached {
                    let path: Vec<T> = frames.iter().rev().map(|(node, _)| node.clone()).collect();
                    tracing::debug!(path_len = path.len(), "dfs reached target");
                    return Some(path);
                }
            }
            None => {
                frames.pop();
            }
        }
    }
}
