#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::errors::{DeskError, Result};
use crate::state::State;

impl State {
    /// Give `id` the next stacking number, placing it above every other window.
    ///
    /// # Errors
    ///
    /// Will error with `UnknownWindow` if `id` was never registered. No
    /// stacking number is used up in that case.
    pub fn bring_to_front(&mut self, id: &WindowId) -> Result<u32> {
        if !self.registry.contains(id) {
            return Err(DeskError::UnknownWindow(id.clone()));
        }
        let z_index = self.z_order.bring_to_front();
        let patch = WindowPatch {
            z_index: Some(z_index),
            ..WindowPatch::default()
        };
        self.registry.set(id, patch)?;
        Ok(z_index)
    }

    /// Mark `id` as the active window and create a `DisplayAction` to tell the surface.
    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        // No new history if no change.
        let Some(previous_window) = self.focus_manager.focus(id) else {
            return false;
        };
        let act = DisplayAction::WindowTakeFocus {
            window: id.clone(),
            previous_window,
        };
        self.actions.push_back(act);
        true
    }

    /// Drop focus if `id` holds it. Nothing else is focused in its place.
    pub fn unfocus_window(&mut self, id: &WindowId) -> bool {
        if !self.focus_manager.is_active(id) {
            return false;
        }
        self.focus_manager.unfocus();
        self.actions.push_back(DisplayAction::Unfocus(id.clone()));
        true
    }
}

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Raise and focus an open, visible window, e.g. when its body is clicked.
    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_visible() {
            tracing::debug!("Ignoring focus request for hidden window {}", id);
            return false;
        }
        if self.state.bring_to_front(id).is_err() {
            return false;
        }
        self.state.focus_window(id);
        self.state.update_window_order();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusing_a_window_should_make_it_active_and_top_most() {
        let mut manager = Manager::new_test();
        let (about, cmd) = (WindowId::from("about"), WindowId::from("cmd"));
        manager.open_window(&about);
        manager.open_window(&cmd);
        assert!(manager.focus_window(&about));
        assert_eq!(manager.state.focused_window(), Some(&about));
        assert_eq!(manager.state.registry.stacking_order()[0], about);
    }

    #[test]
    fn focusing_a_closed_window_does_nothing() {
        let mut manager = Manager::new_test();
        let before = manager.state.z_order.current();
        assert!(!manager.focus_window(&WindowId::from("about")));
        assert_eq!(manager.state.z_order.current(), before);
    }

    #[test]
    fn raising_an_unknown_window_does_not_use_a_stacking_number() {
        let mut manager = Manager::new_test();
        let before = manager.state.z_order.current();
        assert!(manager.state.bring_to_front(&WindowId::from("minesweeper")).is_err());
        assert_eq!(manager.state.z_order.current(), before);
    }

    #[test]
    fn every_raise_puts_the_raised_window_strictly_on_top() {
        let mut manager = Manager::new_test();
        let ids: Vec<WindowId> = ["about", "cmd", "notepad"].map(WindowId::from).to_vec();
        for id in &ids {
            manager.open_window(id);
        }
        let sequence = ["cmd", "about", "about", "notepad", "cmd"];
        let mut last = manager.state.z_order.current();
        for name in sequence {
            let id = WindowId::from(name);
            manager.focus_window(&id);
            let z = manager.state.registry.get(&id).unwrap().z_index;
            assert!(z > last);
            last = z;
            let others_max = ids
                .iter()
                .filter(|other| **other != id)
                .map(|other| manager.state.registry.get(other).unwrap().z_index)
                .max()
                .unwrap();
            assert!(z > others_max);
        }
    }
}
