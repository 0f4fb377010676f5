//! Singly linked list with cycle detection and cycle-safe adoption of
//! externally built node chains.

use std::collections::HashSet;
use std::fmt;

use super::node::{NodeId, NodePool};

/// A singly linked list.
///
/// Appending is O(1) because the tail is tracked; removing the tail is O(n)
/// since there are no back links. `size` always equals the number of nodes
/// reachable from `head`, and the tail's `next` is always `None`.
pub struct LinkedList<T> {
    pool: NodePool<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            pool: NodePool::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Locates the entry node of a cycle reachable from `root` using
    /// Floyd's two-pointer walk.
    ///
    /// The slow cursor moves one step and the fast cursor two until they
    /// meet (a cycle exists) or the fast cursor runs off the chain (none
    /// does). After a meeting, the slow cursor restarts at `root` and both
    /// advance one step at a time; they coincide at the entry.
    pub fn cycle(pool: &NodePool<T>, root: NodeId) -> Option<NodeId> {
        if !pool.contains(root) {
            return None;
        }

        let mut slow = root;
        let mut fast = root;
        loop {
            fast = pool.next(pool.next(fast)?)?;
            slow = pool.next(slow)?;
            if slow == fast {
                break;
            }
        }

        let mut slow = root;
        while slow != fast {
            slow = pool.next(slow)?;
            fast = pool.next(fast)?;
        }
        Some(slow)
    }

    /// Adopts a chain of nodes the caller built in `pool`, starting at
    /// `root`.
    ///
    /// The chain may loop. The cycle entry is located first; while walking
    /// from `root`, reaching the entry a second time severs the link into
    /// it and the node before it becomes the tail. Nodes not reachable
    /// from `root` are released. An unknown `root` yields an empty list.
    pub fn from_chain(mut pool: NodePool<T>, root: NodeId) -> Self {
        if !pool.contains(root) {
            return Self::new();
        }

        let entry = Self::cycle(&pool, root);
        if let Some(entry) = entry {
            tracing::debug!(entry = entry.index(), "severing cycle in adopted chain");
        }

        let mut entry_seen = false;
        let mut reachable = HashSet::new();
        let mut tail = root;
        let mut cursor = Some(root);

        while let Some(id) = cursor {
            if Some(id) == entry {
                if entry_seen {
                    pool.link(tail, None);
                    break;
                }
                entry_seen = true;
            }
            reachable.insert(id);
            tail = id;

            cursor = match pool.next(id) {
                Some(next) if !pool.contains(next) => {
                    pool.link(id, None);
                    None
                }
                next => next,
            };
        }

        let unreachable: Vec<NodeId> = pool
            .live_ids()
            .filter(|id| !reachable.contains(id))
            .collect();
        for id in unreachable {
            pool.remove(id);
        }

        Self {
            pool,
            head: Some(root),
            tail: Some(tail),
            size: reachable.len(),
        }
    }

    /// Appends `value` at the tail in O(1).
    pub fn insert(&mut self, value: T) {
        let id = self.pool.push(value);
        match self.tail {
            Some(tail) => {
                self.pool.link(tail, Some(id));
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
    }

    /// Removes the first value equal to `value`.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.delete_by(|candidate| candidate == value)
    }

    /// Removes the first value matching `predicate`, scanning from the head.
    pub fn delete_by<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut previous: Option<NodeId> = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            let node = self.pool.get(id)?;
            let next = node.next();

            if predicate(&node.data) {
                match previous {
                    Some(previous) => {
                        self.pool.link(previous, next);
                    }
                    None => self.head = next,
                }
                if self.tail == Some(id) {
                    self.tail = previous;
                }
                self.size -= 1;
                return self.pool.remove(id);
            }

            previous = Some(id);
            cursor = next;
        }

        None
    }

    /// Removes the tail. Walks to the second-to-last node, so O(n).
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;

        if self.head == Some(tail) {
            self.head = None;
            self.tail = None;
        } else {
            let mut cursor = self.head?;
            while let Some(next) = self.pool.next(cursor) {
                if next == tail {
                    break;
                }
                cursor = next;
            }
            self.pool.link(cursor, None);
            self.tail = Some(cursor);
        }

        self.size -= 1;
        self.pool.remove(tail)
    }

    /// Removes the head in O(1).
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.pool.next(head);
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        self.pool.remove(head)
    }

    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|candidate| predicate(*candidate))
    }

    /// Borrows the tail value.
    pub fn peek(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.pool.get(id))
            .map(|node| &node.data)
    }

    /// Borrows the head value.
    pub fn peek_first(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.pool.get(id))
            .map(|node| &node.data)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Iterates head to tail. Bounded by the list's size.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            pool: &self.pool,
            cursor: self.head,
            remaining: self.size,
        }
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    pool: &'a NodePool<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.pool.get(self.cursor?)?;
        self.cursor = node.next();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty List");
        }
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
