// src/sched/snapshot.rs

//! Read-only views of scheduler state.
//!
//! A snapshot is an owned copy taken after a mutating call; handing it out
//! never exposes container internals, so the scheduler stays the sole
//! writer.

use crate::containers::TreeShape;
use crate::sched::TaskId;
use crate::sched::task::TaskStatus;

/// Per-task view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: TaskId,
    pub name: String,
    pub priority: i32,
    pub status: TaskStatus,
    pub result: Option<i64>,
    pub failure: Option<String>,
}

/// One heap entry, in level order: enough to render the heap as a tree
/// (children of slot `i` are `2i + 1` and `2i + 2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntryView {
    pub priority: i32,
    pub id: TaskId,
}

/// One entry of the completed list, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedView {
    pub id: TaskId,
    pub result: Option<i64>,
}

/// Full read-only picture of the scheduler after a mutation.
#[derive(Debug, Clone)]
pub struct SchedulerSnapshot {
    /// Every known task, in creation order.
    pub tasks: Vec<TaskView>,
    /// Priority heap contents, level order.
    pub heap: Vec<HeapEntryView>,
    /// FIFO queue contents, front first. Entries whose task already ran via
    /// the heap remain visible here until the queue is drained.
    pub queue: Vec<TaskId>,
    /// Pending tasks, in the active singly linked list's order.
    pub active: Vec<TaskId>,
    /// Completed tasks, in execution order.
    pub completed: Vec<CompletedView>,
    /// Completion timestamps from the analysis BST, ascending.
    pub analysis: Vec<i64>,
    /// Structural view of the analysis BST, for tree rendering.
    pub analysis_shape: Option<TreeShape<i64>>,
}
