// src/config/mod.rs

//! TOML schedule files: model, loading, validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{RawScheduleFile, ScheduleFile, SchedulerSection, TaskEntry};
