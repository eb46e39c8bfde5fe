// tests/autorun_cancel.rs

mod common;
use crate::common::init_tracing;

use std::time::Duration;

use tokio::time::timeout;

use taskforge::sched::{AutoRunHandle, Scheduler, auto_run};

fn scheduler_with_tasks(count: usize) -> Scheduler {
    let mut scheduler = Scheduler::new();
    for i in 0..count {
        scheduler
            .create_task(&format!("t{i}"), "task", i as i32, "1+2")
            .unwrap();
    }
    scheduler
}

#[tokio::test]
async fn auto_run_drains_the_whole_schedule() {
    init_tracing();

    let mut scheduler = scheduler_with_tasks(4);
    let handle = AutoRunHandle::new();

    let report = timeout(
        Duration::from_secs(5),
        auto_run(&mut scheduler, Duration::from_millis(1), &handle),
    )
    .await
    .expect("auto-run should finish well within the timeout");

    assert_eq!(report.steps, 4);
    assert!(!report.cancelled);
    assert!(!scheduler.has_pending());
}

#[tokio::test]
async fn pre_cancelled_handle_executes_no_steps() {
    init_tracing();

    let mut scheduler = scheduler_with_tasks(3);
    let handle = AutoRunHandle::new();
    handle.cancel();

    let report = auto_run(&mut scheduler, Duration::from_millis(1), &handle).await;

    assert_eq!(report.steps, 0);
    assert!(report.cancelled);
    assert_eq!(scheduler.pending_count(), 3);
}

#[tokio::test]
async fn cancellation_stops_the_loop_between_steps() {
    init_tracing();

    let mut scheduler = scheduler_with_tasks(6);
    let handle = AutoRunHandle::new();

    // Cancel from a background task partway through the run. The flag is
    // checked at the top of each iteration, so the loop must stop with
    // pending work left over.
    let canceller = handle.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(120)).await;
        canceller.cancel();
    });

    let report = timeout(
        Duration::from_secs(5),
        auto_run(&mut scheduler, Duration::from_millis(50), &handle),
    )
    .await
    .expect("cancelled auto-run should exit promptly");

    assert!(report.cancelled);
    assert!(report.steps >= 1);
    assert!(report.steps < 6, "cancellation should cut the run short");
    assert!(scheduler.has_pending());
}

#[tokio::test]
async fn auto_run_on_drained_scheduler_is_a_no_op() {
    init_tracing();

    let mut scheduler = scheduler_with_tasks(2);
    scheduler.run_all();

    let handle = AutoRunHandle::new();
    let report = auto_run(&mut scheduler, Duration::from_millis(1), &handle).await;

    assert_eq!(report.steps, 0);
    assert!(!report.cancelled);
}
