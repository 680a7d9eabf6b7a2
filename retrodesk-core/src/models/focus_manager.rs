use super::{WindowId, WindowRecord, WindowRegistry};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Tracks which window has focus. The front of the history is the active
/// window; `None` at the front means nothing is focused.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FocusManager {
    pub window_history: VecDeque<Option<WindowId>>,
}

impl FocusManager {
    /// The window marked active, even if it has since been minimized.
    #[must_use]
    pub fn active(&self) -> Option<&WindowId> {
        self.window_history.front()?.as_ref()
    }

    /// Return the currently focused window. A minimized active window holds no focus.
    #[must_use]
    pub fn window<'a>(&self, registry: &'a WindowRegistry) -> Option<(&WindowId, &'a WindowRecord)> {
        let id = self.active()?;
        let record = registry.get(id).ok()?;
        if record.is_visible() {
            Some((id, record))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active() == Some(id)
    }

    /// Record `id` as the active window. Returns the previously active window,
    /// or `None` if nothing changed.
    pub(crate) fn focus(&mut self, id: &WindowId) -> Option<Option<WindowId>> {
        if self.is_active(id) {
            return None;
        }
        let previous = self.active().cloned();
        // Clean old history.
        self.window_history.truncate(10);
        self.window_history.push_front(Some(id.clone()));
        Some(previous)
    }

    /// Clear the active window. Nothing is promoted in its place.
    pub(crate) fn unfocus(&mut self) -> Option<WindowId> {
        let previous = self.active().cloned()?;
        self.window_history.truncate(10);
        self.window_history.push_front(None);
        Some(previous)
    }
}
