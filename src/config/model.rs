// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::validate::validate_schedule;
use crate::errors::TaskforgeError;

/// Top-level schedule file as read from TOML:
///
/// ```toml
/// [scheduler]
/// auto_delay_ms = 250
/// recent_events = 5
///
/// [task.build]
/// name = "Build step"
/// priority = 9
/// expression = "2+3*4"
/// ```
///
/// The `[scheduler]` section is optional and defaults apply per field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,

    /// All tasks from `[task.<id>]`, keyed by task id.
    ///
    /// `BTreeMap` keys are unique and sorted, so tasks from a file are
    /// created in lexicographic id order.
    #[serde(default)]
    pub task: BTreeMap<String, TaskEntry>,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    /// Delay between auto-run steps, in milliseconds.
    #[serde(default = "default_auto_delay_ms")]
    pub auto_delay_ms: u64,

    /// Capacity of the recent-event ring buffer.
    #[serde(default = "default_recent_events")]
    pub recent_events: usize,
}

fn default_auto_delay_ms() -> u64 {
    500
}

fn default_recent_events() -> usize {
    5
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            auto_delay_ms: default_auto_delay_ms(),
            recent_events: default_recent_events(),
        }
    }
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    /// Display name.
    pub name: String,

    /// Scheduling priority; larger runs first. No range is enforced.
    pub priority: i32,

    /// Infix arithmetic expression this task evaluates when executed.
    pub expression: String,
}

/// A schedule file that passed validation.
///
/// Same shape as [`RawScheduleFile`]; the distinct type marks that blank
/// fields have been rejected.
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    pub scheduler: SchedulerSection,
    pub task: BTreeMap<String, TaskEntry>,
}

impl TryFrom<RawScheduleFile> for ScheduleFile {
    type Error = TaskforgeError;

    fn try_from(raw: RawScheduleFile) -> Result<Self, Self::Error> {
        validate_schedule(&raw)?;
        Ok(Self {
            scheduler: raw.scheduler,
            task: raw.task,
        })
    }
}
