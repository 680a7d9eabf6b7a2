//! Deferred tasks on the shell's logical clock.
use crate::models::WindowId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Work that runs once its deadline passes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    /// The minimize animation for this window has played out.
    FinishMinimize(WindowId),
    /// A single click on a desktop icon was not followed by a double click.
    OpenFromIcon(WindowId),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Scheduled {
    handle: TimerHandle,
    deadline: Duration,
    task: TimerTask,
}

/// Pending tasks. At most one copy of any task is pending: scheduling it again
/// replaces the earlier one.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Timers {
    next_handle: u64,
    pending: Vec<Scheduled>,
}

impl Timers {
    pub fn schedule(&mut self, deadline: Duration, task: TimerTask) -> TimerHandle {
        self.cancel_task(&task);
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending.push(Scheduled {
            handle,
            deadline,
            task,
        });
        handle
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        before != self.pending.len()
    }

    pub fn cancel_task(&mut self, task: &TimerTask) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| &s.task != task);
        before != self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    #[must_use]
    pub fn is_task_pending(&self, task: &TimerTask) -> bool {
        self.pending.iter().any(|s| &s.task == task)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.deadline).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<(TimerHandle, TimerTask)> {
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|s| s.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|s| (s.deadline, s.handle));
        due.into_iter().map(|s| (s.handle, s.task)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
