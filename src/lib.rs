// src/lib.rs

pub mod cli;
pub mod config;
pub mod containers;
pub mod errors;
pub mod expr;
pub mod logging;
pub mod sched;

use std::time::Duration;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, ConvertMode};
use crate::config::load_and_validate;
use crate::expr::{
    EXAMPLE_EXPRESSIONS, evaluate_postfix, infix_to_postfix, infix_to_prefix, tokenize,
    validate_expression,
};
use crate::sched::{AutoRunHandle, Scheduler, auto_run};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - schedule loading and validation
/// - scheduler construction and seeding
/// - step-loop or timed auto-run execution
/// - Ctrl-C handling (auto-run only)
/// - printed summary of the log and final state
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Run {
            config,
            auto,
            delay_ms,
        } => run_schedule(&config, auto, delay_ms).await,
        Command::Convert {
            expression,
            mode,
            trace,
            evaluate,
            examples,
        } => run_convert(expression.as_deref(), mode, trace, evaluate, examples),
    }
}

async fn run_schedule(config: &str, auto: bool, delay_ms: Option<u64>) -> Result<()> {
    let schedule = load_and_validate(config)?;
    let delay = Duration::from_millis(delay_ms.unwrap_or(schedule.scheduler.auto_delay_ms));

    let mut scheduler = Scheduler::from_schedule(&schedule)?;
    info!(tasks = scheduler.tasks().len(), auto, "schedule loaded");

    if auto {
        let handle = AutoRunHandle::new();

        // Ctrl-C → cancel between steps.
        {
            let handle = handle.clone();
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    eprintln!("failed to listen for Ctrl+C: {e}");
                    return;
                }
                handle.cancel();
            });
        }

        let report = auto_run(&mut scheduler, delay, &handle).await;
        if report.cancelled {
            println!("auto-run cancelled after {} steps", report.steps);
        }
    } else {
        scheduler.run_all();
    }

    print_summary(&mut scheduler);
    Ok(())
}

/// Print the drained execution log and a final per-task summary.
fn print_summary(scheduler: &mut Scheduler) {
    println!("execution log:");
    for event in scheduler.drain_events() {
        println!("  {event}");
    }
    println!();

    let snapshot = scheduler.snapshot();
    println!("tasks ({}):", snapshot.tasks.len());
    for task in &snapshot.tasks {
        match (task.result, &task.failure) {
            (Some(result), _) => println!(
                "  - {} (priority {}) {}: {}",
                task.id, task.priority, task.status, result
            ),
            (None, Some(reason)) => println!(
                "  - {} (priority {}) {}: {}",
                task.id, task.priority, task.status, reason
            ),
            (None, None) => println!("  - {} (priority {}) {}", task.id, task.priority, task.status),
        }
    }

    if !snapshot.completed.is_empty() {
        let order: Vec<&str> = snapshot.completed.iter().map(|c| c.id.as_str()).collect();
        println!("completion order: {}", order.join(" -> "));
    }

    debug!(timestamps = ?snapshot.analysis, "completion timestamps (analysis BST, inorder)");
}

fn run_convert(
    expression: Option<&str>,
    mode: ConvertMode,
    trace: bool,
    evaluate: bool,
    examples: bool,
) -> Result<()> {
    if examples {
        for example in EXAMPLE_EXPRESSIONS {
            println!("{example}");
        }
        return Ok(());
    }

    let Some(expression) = expression else {
        bail!("an expression is required unless --examples is given");
    };
    validate_expression(expression)?;

    let tokens = tokenize(expression);
    let compiled = match mode {
        ConvertMode::Postfix => infix_to_postfix(&tokens)?,
        ConvertMode::Prefix => infix_to_prefix(&tokens)?,
    };

    if trace {
        for (index, step) in compiled.steps.iter().enumerate() {
            println!(
                "{:>3}. {:<8} '{}'  stack=[{}]  output='{}'  {}",
                index + 1,
                step.action.as_str(),
                step.symbol,
                step.stack.join(" "),
                step.output,
                step.explanation
            );
        }
        println!();
    }

    match mode {
        ConvertMode::Postfix => println!("POSTFIX: {}", compiled.output_string()),
        ConvertMode::Prefix => println!("PREFIX: {}", compiled.output_string()),
    }

    if evaluate {
        // Evaluation always runs over the postfix form; the prefix output of
        // the same input denotes the same value.
        let postfix = match mode {
            ConvertMode::Postfix => compiled,
            ConvertMode::Prefix => infix_to_postfix(&tokens)?,
        };
        let result = evaluate_postfix(&postfix.tokens)?;
        println!("RESULT: {result}");
    }

    Ok(())
}
