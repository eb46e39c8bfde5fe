// src/config/validate.rs

//! Semantic validation of a raw schedule file.
//!
//! This mirrors what [`crate::sched::Scheduler::create_task`] rejects (blank
//! ids, names and expressions), so a file that loads cleanly also seeds
//! cleanly. Expression *syntax* is deliberately not checked here: a task
//! whose expression fails to compile is reported at execution time as a
//! failed task, not as a config error.

use tracing::debug;

use crate::config::model::RawScheduleFile;
use crate::errors::TaskforgeError;

pub fn validate_schedule(raw: &RawScheduleFile) -> Result<(), TaskforgeError> {
    for (id, entry) in raw.task.iter() {
        if id.trim().is_empty() {
            return Err(TaskforgeError::ConfigError(
                "task id must not be blank".to_string(),
            ));
        }
        if entry.name.trim().is_empty() {
            return Err(TaskforgeError::ConfigError(format!(
                "task {id}: name must not be blank"
            )));
        }
        if entry.expression.trim().is_empty() {
            return Err(TaskforgeError::ConfigError(format!(
                "task {id}: expression must not be blank"
            )));
        }
    }

    debug!(tasks = raw.task.len(), "schedule file validated");
    Ok(())
}
