//! FIFO queue over singly-linked nodes

use std::fmt;

use super::node::{NodeId, NodePool};

/// First-in first-out queue.
///
/// Values live in singly-linked [`Node`](super::Node)s; the queue keeps
/// both ends so `enqueue` and `dequeue` are O(1). Emptiness is reported
/// with `None`, never a panic.
///
/// ```
/// use waypoint_core::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(10);
/// queue.enqueue(20);
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.peek(), Some(&20));
/// ```
pub struct Queue<T> {
    pool: NodePool<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            pool: NodePool::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Appends `value` at the back.
    pub fn enqueue(&mut self, value: T) {
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

    /// Removes and returns the front value.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.pool.next(head);
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        self.pool.remove(head)
    }

    /// Borrows the front value.
    pub fn peek(&self) -> Option<&T> {
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

    pub fn clear(&mut self) {
        self.pool.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            pool: &self.pool,
            cursor: self.head,
        }
    }
}

/// Borrowing iterator over a [`Queue`], front to back.
pub struct Iter<'a, T> {
    pool: &'a NodePool<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pool.get(self.cursor?)?;
        self.cursor = node.next();
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
