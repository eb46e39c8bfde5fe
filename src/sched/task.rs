// src/sched/task.rs

//! Task records and heap ordering keys.

use std::cmp::Ordering;
use std::fmt;

use crate::sched::TaskId;

/// Lifecycle state of a task.
///
/// Created `Pending`; moves through `Executing` to exactly one of the
/// terminal states, never backwards. Only a full scheduler reset returns
/// tasks to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Executing,
    Completed,
    /// Expression compilation or evaluation failed. Terminal, like
    /// `Completed`.
    Failed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Executing => "executing",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One schedulable unit of work.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Larger runs first. No range is enforced.
    pub priority: i32,
    /// Infix arithmetic expression, compiled and evaluated at execution.
    pub expression: String,
    pub status: TaskStatus,
    /// Evaluation result; set on completion, cleared by reset.
    pub result: Option<i64>,
    /// Completion timestamp (epoch milliseconds); also the key under which
    /// the task shows up in the analysis BST.
    pub executed_at_ms: Option<i64>,
    /// Failure reason when `status` is `Failed`.
    pub failure: Option<String>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        priority: i32,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
            expression: expression.into(),
            status: TaskStatus::Pending,
            result: None,
            executed_at_ms: None,
            failure: None,
        }
    }
}

/// Composite heap key: priority first, then creation sequence.
///
/// Under a max-heap, a higher priority outranks a lower one, and among equal
/// priorities the *earlier* sequence number outranks, so extraction order is
/// FIFO within a priority band instead of depending on heap structure. The
/// sequence number is assigned by the scheduler when the entry is seeded and
/// is never reused within one seeding generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityKey {
    priority: i32,
    seq: u64,
}

impl PriorityKey {
    pub fn new(priority: i32, seq: u64) -> Self {
        Self { priority, seq }
    }

    pub fn priority(self) -> i32 {
        self.priority
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
