//! Frontier containers for grid maze search.
//!
//! This crate provides the ordered containers that parametrize exploration
//! order in the search algorithms:
//!
//! - [`LinkedDeque`] — generic doubly-linked sequence, O(1) push/pop at
//!   both ends
//! - [`Stack`] — LIFO adapter (depth-first frontiers)
//! - [`Queue`] — FIFO adapter (breadth-first frontiers)
//! - [`PriorityQueue`] — binary min-heap of keyed [`Entry`] values
//!   (best-first frontiers)
//!
//! Removing or peeking from any empty container fails with [`EmptyError`],
//! a recoverable condition distinct from "search found no path".

mod deque;
mod error;
mod heap;
mod queue;
mod stack;

pub use deque::LinkedDeque;
pub use error::EmptyError;
pub use heap::{Entry, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
