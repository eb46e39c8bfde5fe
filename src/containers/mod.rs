// src/containers/mod.rs

//! Reusable container ADTs backing the scheduler.
//!
//! Each container is a plain value type with no logging and no knowledge of
//! tasks; the scheduler composes them and owns all observability. Operating
//! on an empty container yields an `Option`/`Result` sentinel, never a
//! panic.

pub mod bst;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use bst::{Bst, TreeShape};
pub use heap::{Heap, HeapKind};
pub use linked_list::{DoublyLinkedList, SinglyLinkedList};
pub use queue::{FifoQueue, RingQueue};
pub use stack::Stack;
