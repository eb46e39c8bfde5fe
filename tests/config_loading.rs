// tests/config_loading.rs

mod common;
use crate::common::init_tracing;

use std::io::Write;

use tempfile::NamedTempFile;

use taskforge::config::{default_config_path, load_and_validate, load_from_path};
use taskforge::errors::TaskforgeError;
use taskforge::sched::Scheduler;

fn write_schedule(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write schedule");
    file
}

#[test]
fn loads_a_full_schedule_file() {
    init_tracing();

    let file = write_schedule(
        r#"
[scheduler]
auto_delay_ms = 250
recent_events = 8

[task.build]
name = "Build step"
priority = 9
expression = "2+3*4"

[task.audit]
name = "Audit step"
priority = 3
expression = "(2+3)*4"
"#,
    );

    let schedule = load_and_validate(file.path()).expect("schedule should load");
    assert_eq!(schedule.scheduler.auto_delay_ms, 250);
    assert_eq!(schedule.scheduler.recent_events, 8);
    assert_eq!(schedule.task.len(), 2);

    let mut scheduler = Scheduler::from_schedule(&schedule).expect("valid tasks");
    scheduler.run_all();

    // "build" outranks "audit" by priority.
    assert_eq!(scheduler.completed_ids(), ["build", "audit"]);
    assert_eq!(scheduler.find_task("build").unwrap().result, Some(14));
    assert_eq!(scheduler.find_task("audit").unwrap().result, Some(20));
}

#[test]
fn scheduler_section_is_optional_with_defaults() {
    init_tracing();

    let file = write_schedule(
        r#"
[task.solo]
name = "Only task"
priority = 1
expression = "1+1"
"#,
    );

    let schedule = load_and_validate(file.path()).expect("schedule should load");
    assert_eq!(schedule.scheduler.auto_delay_ms, 500);
    assert_eq!(schedule.scheduler.recent_events, 5);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    init_tracing();

    let file = write_schedule("[task.broken\nname = oops");
    match load_from_path(file.path()) {
        Err(TaskforgeError::TomlError(_)) => {}
        other => panic!("expected TOML error, got {other:?}"),
    }
}

#[test]
fn blank_task_name_is_rejected() {
    init_tracing();

    let file = write_schedule(
        r#"
[task.bad]
name = "   "
priority = 1
expression = "1+1"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskforgeError::ConfigError(message)) => {
            assert!(message.contains("name must not be blank"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn blank_expression_is_rejected() {
    init_tracing();

    let file = write_schedule(
        r#"
[task.bad]
name = "Task"
priority = 1
expression = ""
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskforgeError::ConfigError(message)) => {
            assert!(message.contains("expression must not be blank"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();

    match load_from_path("/definitely/not/here/Taskforge.toml") {
        Err(TaskforgeError::IoError(_)) => {}
        other => panic!("expected IO error, got {other:?}"),
    }
}

#[test]
fn default_path_is_taskforge_toml() {
    assert_eq!(default_config_path().to_string_lossy(), "Taskforge.toml");
}
