//! Comparison strategies for ordered collections

use std::cmp::Ordering;

/// A total order over `T`, used by [`MinHeap`](super::MinHeap) and
/// [`MinMaxStack`](super::MinMaxStack).
///
/// `Less` means `a` sorts before `b`, `Equal` is a tie and `Greater` means
/// `a` sorts after `b`. Implementations must be a total order; the
/// collections do not validate it.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by the reverse of their `Ord` implementation.
///
/// A `MinHeap` with `ReverseOrder` behaves as a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
