#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Look a window up, logging ids that were never registered. Those are a
    /// bug in whoever sent them, not something the user can cause.
    pub(crate) fn known_record(&self, id: &WindowId) -> Option<WindowRecord> {
        match self.state.registry.get(id) {
            Ok(record) => Some(record.clone()),
            Err(err) => {
                tracing::error!("{}", err);
                None
            }
        }
    }

    /// Open a window, or bring it to the front if it is already open.
    /// Returns true if changes need to be rendered.
    pub fn open_window(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        // A pending minimize would otherwise collapse the window again.
        self.cancel_minimize(id);

        let z_index = self.state.z_order.bring_to_front();
        let patch = WindowPatch {
            is_open: Some(true),
            is_minimized: Some(false),
            z_index: Some(z_index),
            ..WindowPatch::default()
        };
        if self.state.registry.set(id, patch).is_err() {
            return false;
        }
        if !record.is_open {
            self.state.actions.push_back(DisplayAction::MountWindow(id.clone()));
        }
        self.state.focus_window(id);
        self.state.update_window_order();

        if let Some(app) = self.app_mut(id) {
            app.on_open();
        }
        tracing::debug!("Opened window {} at z-index {}", id, z_index);
        true
    }

    /// Close a window. Closing a closed window does nothing.
    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_open {
            return false;
        }
        self.cancel_minimize(id);
        if self.state.drag.is_dragging_window(id) {
            self.end_drag();
        }

        let patch = WindowPatch {
            is_open: Some(false),
            is_minimized: Some(false),
            is_maximized: Some(false),
            ..WindowPatch::default()
        };
        if self.state.registry.set(id, patch).is_err() {
            return false;
        }
        self.state.actions.push_back(DisplayAction::UnmountWindow(id.clone()));
        self.state.unfocus_window(id);
        self.state.update_window_order();

        if let Some(app) = self.app_mut(id) {
            app.on_close();
        }
        tracing::debug!("Closed window {}", id);
        true
    }

    /// Flip a window between maximized and its stored position and size,
    /// which are never touched while maximized.
    pub fn toggle_maximized(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_open {
            return false;
        }
        let maximized = !record.is_maximized;
        let patch = WindowPatch {
            is_maximized: Some(maximized),
            ..WindowPatch::default()
        };
        if self.state.registry.set(id, patch).is_err() {
            return false;
        }
        // Maximized windows can't be dragged.
        if maximized && self.state.drag.is_dragging_window(id) {
            self.end_drag();
        }
        true
    }

    /// Bring a minimized window back, or stop one that is still animating
    /// towards the taskbar.
    pub fn restore_window(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_open {
            return false;
        }
        let was_collapsing = self.cancel_minimize(id);
        if !record.is_minimized && !was_collapsing {
            return false;
        }

        let z_index = self.state.z_order.bring_to_front();
        let patch = WindowPatch {
            is_minimized: Some(false),
            z_index: Some(z_index),
            ..WindowPatch::default()
        };
        if self.state.registry.set(id, patch).is_err() {
            return false;
        }
        self.state.focus_window(id);
        self.state.update_window_order();

        if let Some(app) = self.app_mut(id) {
            app.on_restore();
        }
        true
    }
}
