// src/sched/scheduler.rs

//! The scheduler state machine: create, step, run, reset, clear.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ScheduleFile;
use crate::containers::{
    Bst, DoublyLinkedList, FifoQueue, Heap, HeapKind, RingQueue, SinglyLinkedList,
};
use crate::expr::{ExprError, evaluate_postfix, infix_to_postfix, tokenize};
use crate::sched::snapshot::{CompletedView, HeapEntryView, SchedulerSnapshot, TaskView};
use crate::sched::task::{PriorityKey, Task, TaskStatus};
use crate::sched::{SchedulerEvent, TaskId};

/// Default capacity of the recent-event ring buffer.
pub const DEFAULT_RECENT_EVENTS: usize = 5;

/// Validation errors from [`Scheduler::create_task`].
///
/// A rejected call mutates nothing; the caller fixes the input and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("task id must not be blank")]
    BlankId,

    #[error("task {0}: name must not be blank")]
    BlankName(TaskId),

    #[error("task {0}: expression must not be blank")]
    BlankExpression(TaskId),
}

/// What a single [`Scheduler::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A task ran to completion with this result.
    Completed { id: TaskId, result: i64 },
    /// A task was selected but its expression failed to compile or
    /// evaluate; the task is now in the terminal `Failed` state.
    Failed { id: TaskId, error: ExprError },
    /// Nothing left to run.
    Idle,
}

/// Priority-driven task scheduler.
///
/// One instance owns its containers outright; nothing is shared, so multiple
/// schedulers coexist independently. The concurrency model is one exclusive
/// owner (or lock) per instance, never per container.
///
/// Tasks are addressed internally by their index into `tasks`, which is
/// stable: tasks are only ever appended, except by [`Scheduler::clear`].
#[derive(Debug)]
pub struct Scheduler {
    tasks: Vec<Task>,
    fifo: FifoQueue<usize>,
    heap: Heap<PriorityKey, usize>,
    active: SinglyLinkedList<usize>,
    completed: DoublyLinkedList<usize>,
    analysis: Bst<i64>,
    recent: RingQueue<String>,
    events: Vec<SchedulerEvent>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_recent_capacity(DEFAULT_RECENT_EVENTS)
    }

    /// Create a scheduler whose recent-event ring holds `capacity` lines.
    pub fn with_recent_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::new(),
            fifo: FifoQueue::new(),
            heap: Heap::new(HeapKind::Max),
            active: SinglyLinkedList::new(),
            completed: DoublyLinkedList::new(),
            analysis: Bst::new(),
            recent: RingQueue::with_capacity(capacity),
            events: Vec::new(),
            next_seq: 0,
        }
    }

    /// Build a scheduler pre-seeded from a validated schedule file.
    ///
    /// Tasks are created in the file's lexicographic id order (the task
    /// tables deserialize into a `BTreeMap`).
    pub fn from_schedule(schedule: &ScheduleFile) -> Result<Self, SchedulerError> {
        let mut scheduler = Self::with_recent_capacity(schedule.scheduler.recent_events);
        for (id, entry) in schedule.task.iter() {
            scheduler.create_task(id, &entry.name, entry.priority, &entry.expression)?;
        }
        Ok(scheduler)
    }

    /// Register a new task and seed it into the queue and the heap.
    ///
    /// Rejects blank fields without touching any state. Ids are not required
    /// to be unique; the priority range is not restricted.
    pub fn create_task(
        &mut self,
        id: &str,
        name: &str,
        priority: i32,
        expression: &str,
    ) -> Result<(), SchedulerError> {
        let id = id.trim();
        let name = name.trim();
        let expression = expression.trim();

        if id.is_empty() {
            return Err(SchedulerError::BlankId);
        }
        if name.is_empty() {
            return Err(SchedulerError::BlankName(id.to_string()));
        }
        if expression.is_empty() {
            return Err(SchedulerError::BlankExpression(id.to_string()));
        }

        self.tasks.push(Task::new(id, name, priority, expression));
        let index = self.tasks.len() - 1;
        self.seed(index);

        info!(id = %id, name = %name, priority, "task created");
        self.push_event(SchedulerEvent::TaskCreated {
            id: id.to_string(),
            name: name.to_string(),
            priority,
        });
        Ok(())
    }

    /// Enter `index` into the FIFO queue, the priority heap and the active
    /// list. The heap key copies the task's current priority; the sequence
    /// component makes extraction FIFO among equal priorities.
    fn seed(&mut self, index: usize) {
        let key = PriorityKey::new(self.tasks[index].priority, self.next_seq);
        self.next_seq += 1;
        self.fifo.enqueue(index);
        self.heap.insert(key, index);
        self.active.insert_at_end(index);
    }

    /// Execute the most urgent pending task, if any.
    ///
    /// Selection takes the heap top first and falls back to the FIFO queue
    /// once the heap is exhausted. Entries whose task is no longer pending
    /// (already run through the other container) are dropped, never
    /// re-executed.
    pub fn step(&mut self) -> StepOutcome {
        let Some(index) = self.next_pending() else {
            return StepOutcome::Idle;
        };
        self.execute(index)
    }

    fn next_pending(&mut self) -> Option<usize> {
        loop {
            let candidate = match self.heap.extract() {
                Some((_key, index)) => Some(index),
                None => self.fifo.dequeue(),
            };
            match candidate {
                Some(index) if self.tasks[index].status == TaskStatus::Pending => {
                    return Some(index);
                }
                Some(index) => {
                    debug!(
                        id = %self.tasks[index].id,
                        status = %self.tasks[index].status,
                        "dropping stale entry for non-pending task"
                    );
                }
                None => return None,
            }
        }
    }

    fn execute(&mut self, index: usize) -> StepOutcome {
        let id = self.tasks[index].id.clone();
        let name = self.tasks[index].name.clone();
        let expression = self.tasks[index].expression.clone();

        self.tasks[index].status = TaskStatus::Executing;
        if let Some(position) = self.active.search(&index) {
            self.active.delete_at_position(position);
        }
        info!(id = %id, name = %name, "executing task");
        self.push_event(SchedulerEvent::TaskStarted {
            id: id.clone(),
            name,
        });

        let tokens = tokenize(&expression);
        let compiled = match infix_to_postfix(&tokens) {
            Ok(compiled) => compiled,
            Err(error) => return self.fail(index, error),
        };
        let postfix = compiled.output_string();
        debug!(id = %id, infix = %expression, postfix = %postfix, "expression compiled");
        self.push_event(SchedulerEvent::ExpressionCompiled {
            id: id.clone(),
            infix: expression,
            postfix,
        });

        let result = match evaluate_postfix(&compiled.tokens) {
            Ok(result) => result,
            Err(error) => return self.fail(index, error),
        };

        let completed_at_ms = Utc::now().timestamp_millis();
        let task = &mut self.tasks[index];
        task.status = TaskStatus::Completed;
        task.result = Some(result);
        task.executed_at_ms = Some(completed_at_ms);

        self.completed.insert_at_end(index);
        if !self.analysis.insert(completed_at_ms) {
            debug!(
                timestamp_ms = completed_at_ms,
                "duplicate completion timestamp; analysis index unchanged"
            );
        }

        info!(id = %id, result, "task completed");
        self.push_event(SchedulerEvent::TaskCompleted {
            id: id.clone(),
            result,
        });
        StepOutcome::Completed { id, result }
    }

    fn fail(&mut self, index: usize, error: ExprError) -> StepOutcome {
        let id = self.tasks[index].id.clone();
        let task = &mut self.tasks[index];
        task.status = TaskStatus::Failed;
        task.failure = Some(error.to_string());

        warn!(id = %id, error = %error, "task failed");
        self.push_event(SchedulerEvent::TaskFailed {
            id: id.clone(),
            reason: error.to_string(),
        });
        StepOutcome::Failed { id, error }
    }

    /// Step until no pending task remains. Returns the outcome of every step
    /// taken, in order.
    pub fn run_all(&mut self) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        while self.has_pending() {
            match self.step() {
                StepOutcome::Idle => break,
                outcome => outcomes.push(outcome),
            }
        }
        outcomes
    }

    /// Return every task to `pending` and rebuild all containers from the
    /// task list, re-seeded in creation order with fresh sequence numbers.
    /// Identities, priorities and expressions are preserved; results,
    /// timestamps and failure reasons are cleared.
    pub fn reset(&mut self) {
        for task in &mut self.tasks {
            task.status = TaskStatus::Pending;
            task.result = None;
            task.executed_at_ms = None;
            task.failure = None;
        }
        self.rebuild_containers();
        info!(tasks = self.tasks.len(), "scheduler reset");
        self.push_event(SchedulerEvent::SchedulerReset);
    }

    /// Discard all tasks, events and container contents.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.rebuild_containers();
        self.events.clear();
        self.recent = RingQueue::with_capacity(self.recent.capacity());
        info!("scheduler cleared");
        self.push_event(SchedulerEvent::SchedulerCleared);
    }

    fn rebuild_containers(&mut self) {
        self.fifo = FifoQueue::new();
        self.heap = Heap::new(HeapKind::Max);
        self.active = SinglyLinkedList::new();
        self.completed = DoublyLinkedList::new();
        self.analysis = Bst::new();
        self.next_seq = 0;
        for index in 0..self.tasks.len() {
            self.seed(index);
        }
    }

    fn push_event(&mut self, event: SchedulerEvent) {
        let line = format!("[{}] {}", Utc::now().format("%H:%M:%S"), event);
        if let Err(line) = self.recent.enqueue(line) {
            let _ = self.recent.dequeue();
            let _ = self.recent.enqueue(line);
        }
        self.events.push(event);
    }

    /// Every known task, in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// First task with the given id, if any.
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn has_pending(&self) -> bool {
        self.tasks
            .iter()
            .any(|task| task.status == TaskStatus::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .count()
    }

    /// Ids of completed tasks, in execution order.
    pub fn completed_ids(&self) -> Vec<TaskId> {
        self.completed
            .iter()
            .map(|&index| self.tasks[index].id.clone())
            .collect()
    }

    /// Completion timestamps from the analysis BST, ascending.
    pub fn analysis_timestamps(&self) -> Vec<i64> {
        self.analysis.to_sorted_vec()
    }

    /// Drain accumulated events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SchedulerEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent event lines (bounded by the ring capacity), oldest
    /// first, each prefixed with its wall-clock time.
    pub fn recent_log(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }

    /// Owned read-only view of the full scheduler state.
    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            tasks: self
                .tasks
                .iter()
                .map(|task| TaskView {
                    id: task.id.clone(),
                    name: task.name.clone(),
                    priority: task.priority,
                    status: task.status,
                    result: task.result,
                    failure: task.failure.clone(),
                })
                .collect(),
            heap: self
                .heap
                .iter()
                .map(|(key, &index)| HeapEntryView {
                    priority: key.priority(),
                    id: self.tasks[index].id.clone(),
                })
                .collect(),
            queue: self
                .fifo
                .iter()
                .map(|&index| self.tasks[index].id.clone())
                .collect(),
            active: self
                .active
                .iter()
                .map(|&index| self.tasks[index].id.clone())
                .collect(),
            completed: self
                .completed
                .iter()
                .map(|&index| CompletedView {
                    id: self.tasks[index].id.clone(),
                    result: self.tasks[index].result,
                })
                .collect(),
            analysis: self.analysis.to_sorted_vec(),
            analysis_shape: self.analysis.shape(),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
