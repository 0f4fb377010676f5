//! LIFO stack and a stack that tracks its running min/max

use super::compare::{Comparator, NaturalOrder};

/// Last-in first-out stack backed by a `Vec`; the back is the top.
///
/// Iteration runs top to bottom. Because [`iter`](Self::iter) borrows the
/// stack, the sequence it yields is a snapshot: the stack cannot change
/// until the iterator is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes values in iteration order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

/// A stack that answers "smallest" and "largest" in O(1).
///
/// Two shadow stacks grow and shrink in lockstep with the values. Entry `i`
/// of each records the position of the minimum (maximum) among the values
/// at depths `0..=i`, so popping restores the previous extrema for free.
#[derive(Debug, Clone)]
pub struct MinMaxStack<T, C = NaturalOrder> {
    items: Vec<T>,
    min_at: Vec<usize>,
    max_at: Vec<usize>,
    comparator: C,
}

impl<T: Ord> Default for MinMaxStack<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinMaxStack<T, NaturalOrder> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> MinMaxStack<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            min_at: Vec::new(),
            max_at: Vec::new(),
            comparator,
        }
    }

    pub fn push(&mut self, value: T) {
        let depth = self.items.len();
        let (min_at, max_at) = match (self.min_at.last(), self.max_at.last()) {
            (Some(&min), Some(&max)) => {
                let min_at = if self.comparator.compare(&value, &self.items[min]).is_lt() {
                    depth
                } else {
                    min
                };
                let max_at = if self.comparator.compare(&value, &self.items[max]).is_gt() {
                    depth
                } else {
                    max
                };
                (min_at, max_at)
            }
            _ => (depth, depth),
        };
        self.items.push(value);
        self.min_at.push(min_at);
        self.max_at.push(max_at);
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop()?;
        self.min_at.pop();
        self.max_at.pop();
        Some(value)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Smallest value currently on the stack.
    pub fn min(&self) -> Option<&T> {
        self.min_at.last().map(|&index| &self.items[index])
    }

    /// Largest value currently on the stack.
    pub fn max(&self) -> Option<&T> {
        self.max_at.last().map(|&index| &self.items[index])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}
