// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `taskforge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskforge",
    version,
    about = "Priority-driven task scheduler with an infix expression compiler.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKFORGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load a schedule file and execute every task.
    Run {
        /// Path to the schedule file (TOML).
        ///
        /// Default: `Taskforge.toml` in the current working directory.
        #[arg(long, value_name = "PATH", default_value = "Taskforge.toml")]
        config: String,

        /// Run on a timer (one step per delay tick) instead of stepping as
        /// fast as possible. Ctrl-C cancels between steps.
        #[arg(long)]
        auto: bool,

        /// Delay between auto-run steps, overriding the schedule file's
        /// `scheduler.auto_delay_ms`.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Convert a single infix expression to postfix or prefix.
    Convert {
        /// The infix expression, e.g. "A+B*C".
        #[arg(value_name = "EXPR")]
        expression: Option<String>,

        /// Target notation.
        #[arg(long, value_enum, default_value = "postfix")]
        mode: ConvertMode,

        /// Print the full derivation trace, one step per line.
        #[arg(long)]
        trace: bool,

        /// Also evaluate the expression (numeric operands only).
        #[arg(long)]
        evaluate: bool,

        /// Print the stock example expressions and exit.
        #[arg(long)]
        examples: bool,
    },
}

/// Output notation for `convert`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ConvertMode {
    Postfix,
    Prefix,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
