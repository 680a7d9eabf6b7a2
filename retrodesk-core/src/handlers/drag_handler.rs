#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::errors::DeskError;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Begin dragging a window by its title bar. Raises and focuses it, and
    /// asks the surface for pointer events until the drag ends.
    pub fn start_drag(&mut self, id: &WindowId, pointer: Point) -> bool {
        if self.state.drag.is_dragging {
            tracing::debug!("{}, ignoring drag of {}", DeskError::DragAlreadyInProgress, id);
            return false;
        }
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_visible() || record.is_maximized {
            return false;
        }
        if self.state.bring_to_front(id).is_err() {
            return false;
        }
        self.state.focus_window(id);
        self.state.update_window_order();

        self.state.drag.begin(id.clone(), pointer - record.position);
        self.state.actions.push_back(DisplayAction::GrabPointer(id.clone()));
        true
    }

    /// Follow the pointer. Does nothing unless a drag is active. Positions are
    /// not clamped to the desktop.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some((id, position)) = self.state.drag.target(pointer) else {
            return false;
        };
        let id = id.clone();
        let patch = WindowPatch {
            position: Some(position),
            ..WindowPatch::default()
        };
        self.state.registry.set(&id, patch).is_ok()
    }

    /// End the drag gesture. Safe to call when nothing is being dragged.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.state.drag.is_dragging;
        let released = self.state.drag.clear();
        if was_dragging {
            self.state.actions.push_back(DisplayAction::ReleasePointer);
            tracing::trace!("Released {:?}", released);
        }
        was_dragging
    }
}
