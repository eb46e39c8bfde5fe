#![allow(dead_code)]

use std::collections::BTreeMap;
use taskforge::config::{RawScheduleFile, ScheduleFile, SchedulerSection, TaskEntry};

/// Builder for `ScheduleFile` to simplify test setup.
pub struct ScheduleFileBuilder {
    raw: RawScheduleFile,
}

impl ScheduleFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawScheduleFile {
                scheduler: SchedulerSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, id: &str, entry: TaskEntry) -> Self {
        self.raw.task.insert(id.to_string(), entry);
        self
    }

    pub fn with_auto_delay_ms(mut self, delay_ms: u64) -> Self {
        self.raw.scheduler.auto_delay_ms = delay_ms;
        self
    }

    pub fn with_recent_events(mut self, capacity: usize) -> Self {
        self.raw.scheduler.recent_events = capacity;
        self
    }

    pub fn build(self) -> ScheduleFile {
        ScheduleFile::try_from(self.raw).expect("Failed to build valid schedule from builder")
    }
}

impl Default for ScheduleFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskEntry`.
pub struct TaskEntryBuilder {
    entry: TaskEntry,
}

impl TaskEntryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            entry: TaskEntry {
                name: name.to_string(),
                priority: 1,
                expression: "1+1".to_string(),
            },
        }
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.entry.priority = priority;
        self
    }

    pub fn expression(mut self, expression: &str) -> Self {
        self.entry.expression = expression.to_string();
        self
    }

    pub fn build(self) -> TaskEntry {
        self.entry
    }
}
