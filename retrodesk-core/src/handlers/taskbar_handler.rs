#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::{running_apps, RunningApp};

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// A taskbar button toggles its window: a minimized (or collapsing)
    /// window is restored, the active window is minimized and any other
    /// window is brought to the front.
    pub fn taskbar_click(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_open {
            return self.open_window(id);
        }
        if record.is_minimized || self.is_collapsing(id) {
            return self.restore_window(id);
        }
        if self.state.focus_manager.is_active(id) {
            return self.minimize_window(id);
        }
        self.focus_window(id)
    }

    /// The task manager's list of applications.
    #[must_use]
    pub fn running_apps(&self) -> Vec<RunningApp> {
        running_apps(&self.state.registry, self.state.task_manager.as_ref())
    }

    /// "End Task" closes the selected application's window.
    pub fn end_task(&mut self, id: &WindowId) -> bool {
        if self.state.task_manager.as_ref() == Some(id) {
            tracing::debug!("The task manager does not list itself");
            return false;
        }
        self.close_window(id)
    }

    pub fn open_task_manager(&mut self) -> bool {
        match self.state.task_manager.clone() {
            Some(id) => self.open_window(&id),
            None => {
                tracing::warn!("No task manager window is configured");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppStatus;
    use std::time::Duration;

    #[test]
    fn clicking_an_inactive_window_brings_it_above_the_active_one() {
        let mut manager = Manager::new_test();
        let (notepad, cmd) = (WindowId::from("notepad"), WindowId::from("cmd"));
        manager.open_window(&notepad);
        manager.open_window(&cmd);
        assert_eq!(manager.state.focused_window(), Some(&cmd));

        assert!(manager.taskbar_click(&notepad));
        let notepad_z = manager.state.registry.get(&notepad).unwrap().z_index;
        let cmd_z = manager.state.registry.get(&cmd).unwrap().z_index;
        assert_eq!(manager.state.focused_window(), Some(&notepad));
        assert!(notepad_z > cmd_z);
        assert!(!manager.state.registry.get(&notepad).unwrap().is_minimized);
    }

    #[test]
    fn clicking_the_active_window_minimizes_it_and_clicking_again_restores() {
        let mut manager = Manager::new_test();
        let cmd = WindowId::from("cmd");
        manager.open_window(&cmd);
        assert!(manager.taskbar_click(&cmd));
        assert!(manager.state.minimize.is_animating_window(&cmd));
        manager.tick(Duration::from_millis(300));
        assert!(manager.state.registry.get(&cmd).unwrap().is_minimized);

        assert!(manager.taskbar_click(&cmd));
        assert!(!manager.state.registry.get(&cmd).unwrap().is_minimized);
        assert_eq!(manager.state.focused_window(), Some(&cmd));
    }

    #[test]
    fn clicking_a_collapsing_window_brings_it_back() {
        let mut manager = Manager::new_test();
        let cmd = WindowId::from("cmd");
        manager.open_window(&cmd);
        manager.taskbar_click(&cmd);
        assert!(manager.is_collapsing(&cmd));
        assert!(manager.taskbar_click(&cmd));
        assert!(!manager.is_collapsing(&cmd));
        manager.tick(Duration::from_secs(1));
        assert!(!manager.state.registry.get(&cmd).unwrap().is_minimized);
    }

    #[test]
    fn running_apps_skip_the_task_manager_and_report_minimized_windows() {
        let mut manager = Manager::new_test();
        manager.surface.measurable = false;
        let (about, cmd) = (WindowId::from("about"), WindowId::from("cmd"));
        manager.open_task_manager();
        manager.open_window(&about);
        manager.open_window(&cmd);
        manager.minimize_window(&cmd);

        let apps = manager.running_apps();
        let listed: Vec<(&str, AppStatus)> =
            apps.iter().map(|a| (a.id.as_str(), a.status)).collect();
        assert_eq!(
            listed,
            vec![("about", AppStatus::Running), ("cmd", AppStatus::NotResponding)]
        );
    }

    #[test]
    fn end_task_closes_the_window() {
        let mut manager = Manager::new_test();
        let about = WindowId::from("about");
        manager.open_window(&about);
        assert!(manager.end_task(&about));
        assert!(!manager.state.registry.get(&about).unwrap().is_open);
        assert!(!manager.end_task(&WindowId::from("taskManager")));
    }
}
