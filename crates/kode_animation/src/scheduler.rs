//! Deferred task scheduler
//!
//! A main-thread-affine equivalent of "post" / "post delayed". Tasks are
//! plain records (target widget + token); the host advances the clock and
//! delivers each due task back to its widget as a timer event, so a task
//! never runs on another thread and never blocks.

use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    pub struct TaskId;
}

struct PendingTask {
    due: Duration,
    /// Insertion order, breaks ties between tasks due at the same instant
    seq: u64,
    target: u64,
    token: u64,
}

/// A task whose due time has been reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTask {
    pub id: TaskId,
    pub target: u64,
    pub token: u64,
    pub due: Duration,
}

/// Schedules deferred tasks against a clock driven by the host
pub struct TimerScheduler {
    tasks: SlotMap<TaskId, PendingTask>,
    now: Duration,
    next_seq: u64,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            now: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Current time on the scheduler clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a task to run as soon as the host next drains the queue
    pub fn post(&mut self, target: u64, token: u64) -> TaskId {
        self.post_delayed(Duration::ZERO, target, token)
    }

    /// Schedule a task to run once `delay` has elapsed
    pub fn post_delayed(&mut self, delay: Duration, target: u64, token: u64) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now + delay;
        tracing::trace!(target_widget = target, token, ?due, "post delayed task");
        self.tasks.insert(PendingTask {
            due,
            seq,
            target,
            token,
        })
    }

    /// Cancel a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id).is_some()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Number of tasks waiting to run
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of pending tasks addressed to `target`
    pub fn pending_for(&self, target: u64) -> usize {
        self.tasks.values().filter(|t| t.target == target).count()
    }

    /// Due time of the earliest pending task
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.values().map(|t| t.due).min()
    }

    /// Remove and return the earliest task due at or before `deadline`.
    ///
    /// The clock moves forward to that task's due time, so tasks posted
    /// while handling it are scheduled relative to when it fired.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<FiredTask> {
        let id = self
            .tasks
            .iter()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(id, _)| id)?;

        let task = self.tasks.remove(id)?;
        self.now = self.now.max(task.due);
        Some(FiredTask {
            id,
            target: task.target,
            token: task.token,
            due: task.due,
        })
    }

    /// Move the clock forward without running anything
    pub fn advance_clock_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}
