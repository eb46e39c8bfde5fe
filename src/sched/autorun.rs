// src/sched/autorun.rs

//! Timed auto-run loop with cooperative cancellation.
//!
//! Execution stays strictly sequential: one `step()` runs to completion
//! before the delay, and the delay is the only suspension point. The
//! cancellation flag is checked at the top of each iteration, so after a
//! cancellation request at most one further step can execute before the loop
//! observes the flag and exits.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::sched::scheduler::{Scheduler, StepOutcome};

/// Shared cancellation flag for an auto-run loop.
///
/// Cheap to clone; any clone can request cancellation from another task or
/// thread while the loop runs.
#[derive(Debug, Clone, Default)]
pub struct AutoRunHandle {
    cancelled: Arc<AtomicBool>,
}

impl AutoRunHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the loop stops before its next step.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Summary of an auto-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRunReport {
    /// Steps executed (completed or failed tasks).
    pub steps: usize,
    /// Whether the loop exited because cancellation was requested rather
    /// than because the schedule drained.
    pub cancelled: bool,
}

/// Repeatedly step the scheduler, sleeping `delay` between steps, until no
/// pending task remains or `handle` is cancelled.
pub async fn auto_run(
    scheduler: &mut Scheduler,
    delay: Duration,
    handle: &AutoRunHandle,
) -> AutoRunReport {
    info!(delay_ms = delay.as_millis() as u64, "auto-run started");
    let mut steps = 0;

    while !handle.is_cancelled() && scheduler.has_pending() {
        match scheduler.step() {
            StepOutcome::Idle => break,
            outcome => {
                debug!(?outcome, steps, "auto-run step");
                steps += 1;
            }
        }
        tokio::time::sleep(delay).await;
    }

    let cancelled = handle.is_cancelled();
    info!(steps, cancelled, "auto-run finished");
    AutoRunReport { steps, cancelled }
}
