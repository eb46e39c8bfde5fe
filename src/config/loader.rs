// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawScheduleFile, ScheduleFile};
use crate::errors::Result;

/// Load a schedule file from a given path and return the raw
/// `RawScheduleFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (blank fields, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScheduleFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawScheduleFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a schedule file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
/// reads TOML, applies defaults (handled by `serde` + `Default` impls), and
/// rejects blank task fields.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScheduleFile> {
    let raw = load_from_path(&path)?;
    let schedule = ScheduleFile::try_from(raw)?;
    Ok(schedule)
}

/// Helper to resolve a default schedule path.
///
/// Currently this just returns `Taskforge.toml` in the current working
/// directory; it exists so config discovery (env var, multiple locations)
/// has a single place to grow into.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskforge.toml")
}
