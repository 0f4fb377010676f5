//! Binary min-heap parameterised by a comparator

use std::fmt;

use super::compare::{Comparator, NaturalOrder};

/// A binary min-heap stored in a dense `Vec`.
///
/// Ordering comes from a [`Comparator`] rather than `Ord`, so callers can
/// heap-order by a key (for example a distance) without wrapper types.
/// Duplicates are allowed and ties may pop in either order.
///
/// # Invariant
///
/// For every index `i > 0`, `compare(heap[(i - 1) / 2], heap[i])` is not
/// `Greater`.
///
/// # Example
///
/// ```
/// use waypoint_core::collections::MinHeap;
///
/// let mut heap = MinHeap::from(vec![5, 3, 8, 1]);
/// assert_eq!(heap.pop_min(), Some(1));
/// assert_eq!(heap.pop_min(), Some(3));
/// heap.insert(2);
/// assert_eq!(heap.peek(), Some(&2));
/// ```
pub struct MinHeap<T, C = NaturalOrder> {
    items: Vec<T>,
    comparator: C,
}

impl<T: Ord> MinHeap<T, NaturalOrder> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for MinHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T, NaturalOrder> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values, NaturalOrder)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), NaturalOrder)
    }
}

impl<T, C: Comparator<T>> MinHeap<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// Builds a heap from unordered values in O(n).
    ///
    /// Sifts down every internal node, starting from the last one and
    /// moving toward the root.
    pub fn from_vec(values: Vec<T>, comparator: C) -> Self {
        let mut heap = Self {
            items: values,
            comparator,
        };
        let len = heap.items.len();
        for index in (0..len / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Adds a value in O(log n).
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum in O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Values in heap (array) order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drains the heap into a vector ordered by the comparator.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(value) = self.pop_min() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .comparator
                .compare(&self.items[parent], &self.items[index])
                .is_gt()
            {
                self.items.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len
                && self
                    .comparator
                    .compare(&self.items[right], &self.items[left])
                    .is_lt()
            {
                right
            } else {
                left
            };
            if self
                .comparator
                .compare(&self.items[index], &self.items[smaller])
                .is_gt()
            {
                self.items.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Sorts `values` ascending with a [`MinHeap`].
pub fn heap_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    MinHeap::from(values).into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::ReverseOrder;

    fn assert_heap_property<T, C: Comparator<T>>(heap: &MinHeap<T, C>) {
        let items = heap.as_slice();
        for index in 1..items.len() {
            let parent = (index - 1) / 2;
            assert!(
                !heap.comparator.compare(&items[parent], &items[index]).is_gt(),
                "heap order violated at index {}",
                index
            );
        }
    }

    #[test]
    fn test_bulk_build_pops_in_order() {
        let mut heap = MinHeap::from(vec![5, 3, 8, 1]);
        assert_heap_property(&heap);
        assert_eq!(heap.pop_min(), Some(1));
        assert_eq!(heap.pop_min(), Some(3));
        assert_eq!(heap.pop_min(), Some(5));
        assert_eq!(heap.pop_min(), Some(8));
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn test_insert_maintains_order() {
        let mut heap = MinHeap::new();
        for value in [9, 4, 7, 1, 1, 8, 2] {
            heap.insert(value);
            assert_heap_property(&heap);
        }
        assert_eq!(heap.len(), 7);
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_mixed_operations_pop_non_decreasing() {
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next = move || {
            seed ^= seed << 7;
            seed ^= seed >> 9;
            seed
        };

        let mut heap = MinHeap::new();
        let mut reference = std::collections::BinaryHeap::new();
        for _ in 0..1000 {
            if next() % 4 == 0 {
                let popped = heap.pop_min();
                assert_eq!(popped, reference.pop().map(|std::cmp::Reverse(v)| v));
            } else {
                let value = next() % 64;
                heap.insert(value);
                reference.push(std::cmp::Reverse(value));
            }
            assert_heap_property(&heap);
        }

        let mut last = None;
        while let Some(value) = heap.pop_min() {
            if let Some(previous) = last {
                assert!(previous <= value);
            }
            last = Some(value);
        }
    }

    #[test]
    fn test_custom_comparator_by_key() {
        let mut heap = MinHeap::with_comparator(|a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
        heap.insert(('a', 4));
        heap.insert(('b', 2));
        heap.insert(('c', 9));
        assert_eq!(heap.pop_min(), Some(('b', 2)));
        assert_eq!(heap.pop_min(), Some(('a', 4)));
    }

    #[test]
    fn test_reverse_order_is_max_heap() {
        let heap = MinHeap::from_vec(vec![3, 10, 1, 7], ReverseOrder);
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.into_sorted_vec(), vec![10, 7, 3, 1]);
    }

    #[test]
    fn test_heap_sort() {
        assert_eq!(heap_sort(vec![4, -2, 9, 0, 4]), vec![-2, 0, 4, 4, 9]);
        assert_eq!(heap_sort(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_collect_into_heap() {
        let heap: MinHeap<_> = "heap".chars().collect();
        assert_eq!(heap.peek(), Some(&'a'));
    }
}
