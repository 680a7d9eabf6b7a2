#![allow(clippy::wildcard_imports)]

use super::*;
use crate::utils::timers::TimerTask;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// A single click on a desktop icon opens its window once the double
    /// click delay has passed without another click.
    pub fn icon_click(&mut self, id: &WindowId) -> bool {
        if self.known_record(id).is_none() {
            return false;
        }
        let deadline = self.state.clock + self.state.icon_click_delay;
        self.state
            .timers
            .schedule(deadline, TimerTask::OpenFromIcon(id.clone()));
        false
    }

    pub fn icon_double_click(&mut self, id: &WindowId) -> bool {
        self.state
            .timers
            .cancel_task(&TimerTask::OpenFromIcon(id.clone()));
        self.open_window(id)
    }

    /// Pressing on an icon may start a drag of the icon; forget the click.
    pub fn icon_pointer_down(&mut self, id: &WindowId) -> bool {
        self.state
            .timers
            .cancel_task(&TimerTask::OpenFromIcon(id.clone()));
        false
    }
}
