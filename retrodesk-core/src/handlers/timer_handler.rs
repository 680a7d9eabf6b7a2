#![allow(clippy::wildcard_imports)]

use super::*;
use crate::utils::timers::TimerTask;
use std::time::Duration;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Advance the logical clock to `now` and run every task that has come due.
    /// The clock never moves backwards.
    /// Returns true if changes need to be rendered.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.state.clock = self.state.clock.max(now);
        let due = self.state.timers.take_due(self.state.clock);
        let mut changed = false;
        for (handle, task) in due {
            tracing::trace!("Timer {:?} fired: {:?}", handle, task);
            changed = match task {
                TimerTask::FinishMinimize(id) => self.finish_minimize(&id),
                TimerTask::OpenFromIcon(id) => self.open_window(&id),
            } || changed;
        }
        changed
    }
}
