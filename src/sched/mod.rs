// src/sched/mod.rs

//! Priority-driven task scheduling.
//!
//! This module ties the containers and the expression compiler together:
//! - task creation seeds the FIFO queue, the priority heap and the
//!   active-task list
//! - `step()` pulls the most urgent pending task, compiles and evaluates its
//!   expression, and records the completion in a doubly linked list and a
//!   timestamp-keyed BST
//! - [`autorun`] drives repeated steps on a timer with cooperative
//!   cancellation
//!
//! Data flows one way: the scheduler mutates the containers, and the
//! containers never call back. Callers observe state through
//! [`snapshot::SchedulerSnapshot`] and the event log; they never hold a
//! reference into container internals.

use std::fmt;

/// Canonical task identifier type used throughout the scheduler.
///
/// Uniqueness is caller-supplied and not enforced.
pub type TaskId = String;

/// A log-worthy execution event.
///
/// The scheduler accumulates these for the caller to drain and display; it
/// never renders anything itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerEvent {
    TaskCreated {
        id: TaskId,
        name: String,
        priority: i32,
    },
    TaskStarted {
        id: TaskId,
        name: String,
    },
    ExpressionCompiled {
        id: TaskId,
        infix: String,
        postfix: String,
    },
    TaskCompleted {
        id: TaskId,
        result: i64,
    },
    TaskFailed {
        id: TaskId,
        reason: String,
    },
    SchedulerReset,
    SchedulerCleared,
}

impl fmt::Display for SchedulerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerEvent::TaskCreated { id, name, priority } => {
                write!(f, "Task {id} ({name}) created with priority {priority}")
            }
            SchedulerEvent::TaskStarted { id, name } => {
                write!(f, "Executing task {id} ({name})")
            }
            SchedulerEvent::ExpressionCompiled { id, infix, postfix } => {
                write!(f, "Task {id}: converted {infix} to postfix: {postfix}")
            }
            SchedulerEvent::TaskCompleted { id, result } => {
                write!(f, "Task {id} completed with result: {result}")
            }
            SchedulerEvent::TaskFailed { id, reason } => {
                write!(f, "Task {id} failed: {reason}")
            }
            SchedulerEvent::SchedulerReset => write!(f, "Scheduler reset"),
            SchedulerEvent::SchedulerCleared => write!(f, "Scheduler cleared"),
        }
    }
}

pub mod autorun;
pub mod scheduler;
pub mod snapshot;
pub mod task;

pub use autorun::{AutoRunHandle, AutoRunReport, auto_run};
pub use scheduler::{Scheduler, SchedulerError, StepOutcome};
pub use snapshot::{CompletedView, HeapEntryView, SchedulerSnapshot, TaskView};
pub use task::{PriorityKey, Task, TaskStatus};
