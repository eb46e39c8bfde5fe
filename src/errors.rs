// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::expr::ExprError;
use crate::sched::SchedulerError;

#[derive(Error, Debug)]
pub enum TaskforgeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskforgeError>;
