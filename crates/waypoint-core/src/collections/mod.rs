//! Collections the graph algorithms are built on
//!
//! - `node`: arena of single-link cells addressed by handle
//! - `queue`: FIFO over linked nodes, used by breadth-first search
//! - `stack`: LIFO over a vector, plus a running min/max variant
//! - `linked_list`: singly linked list with Floyd cycle detection
//! - `heap`: comparator-driven binary min-heap, used by Dijkstra

pub mod compare;
pub mod heap;
pub mod linked_list;
pub mod node;
pub mod queue;
pub mod stack;

pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use heap::{heap_sort, MinHeap};
pub use linked_list::LinkedList;
pub use node::{Node, NodeId, NodePool};
pub use queue::Queue;
pub use stack::{MinMaxStack, Stack};
