//! Single-link node cells stored in an arena.
//!
//! Nodes refer to their successor by [`NodeId`] rather than by pointer, so
//! a chain may legally loop back on itself. [`LinkedList::from_chain`]
//! relies on this to adopt caller-built chains that contain a cycle.
//!
//! [`LinkedList::from_chain`]: super::LinkedList::from_chain

/// Handle to a node inside a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index inside the owning pool.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A list cell: a value and an optional link to the next cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub data: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Arena of [`Node`]s with slot reuse.
///
/// Freed slots go on a free list and are handed out again by
/// [`push`](Self::push), so a queue that is drained and refilled does not
/// keep growing.
#[derive(Debug, Clone)]
pub struct NodePool<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Allocates an unlinked node holding `data`.
    pub fn push(&mut self, data: T) -> NodeId {
        let node = Node { data, next: None };
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Sets `from.next = to`. Returns `false` if `from` is not live.
    ///
    /// Any shape is accepted, including links that close a cycle.
    pub fn link(&mut self, from: NodeId, to: Option<NodeId>) -> bool {
        match self.get_mut(from) {
            Some(node) => {
                node.next = to;
                true
            }
            None => false,
        }
    }

    /// Releases a node and returns its value. Links pointing at it are
    /// left dangling; callers unlink first.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node.data)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Successor of `id`, or `None` at the end of a chain or for a dead id.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Ids of all live nodes, in slot order.
    pub(crate) fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| NodeId(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_link() {
        let mut pool = NodePool::new();
        let a = pool.push("a");
        let b = pool.push("b");
        assert!(pool.link(a, Some(b)));
        assert_eq!(pool.next(a), Some(b));
        assert_eq!(pool.next(b), None);
        assert_eq!(pool.get(b).map(|n| n.data), Some("b"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_remove_recycles_slot() {
        let mut pool = NodePool::new();
        let a = pool.push(1);
        let _b = pool.push(2);
        assert_eq!(pool.remove(a), Some(1));
        assert!(!pool.contains(a));
        assert_eq!(pool.remove(a), None);
        assert_eq!(pool.len(), 1);

        let c = pool.push(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_link_dead_node() {
        let mut pool = NodePool::new();
        let a = pool.push(1);
        pool.remove(a);
        assert!(!pool.link(a, None));
    }

    #[test]
    fn test_live_ids() {
        let mut pool = NodePool::new();
        let a = pool.push(1);
        let b = pool.push(2);
        let c = pool.push(3);
        pool.remove(b);
        let ids: Vec<_> = pool.live_ids().collect();
        assert_eq!(ids, vec![a, c]);
    }
}
