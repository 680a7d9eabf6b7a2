use super::{Point, WindowId};
use serde::{Deserialize, Serialize};

/// The single in-progress drag gesture, if any.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_dragging: bool,
    pub window_id: Option<WindowId>,
    /// Pointer position minus window origin, captured when the gesture starts.
    pub grab_offset: Point,
}

impl DragState {
    pub(crate) fn begin(&mut self, id: WindowId, grab_offset: Point) {
        self.is_dragging = true;
        self.window_id = Some(id);
        self.grab_offset = grab_offset;
    }

    /// The window being dragged and where its origin belongs for this pointer sample.
    #[must_use]
    pub fn target(&self, pointer: Point) -> Option<(&WindowId, Point)> {
        if !self.is_dragging {
            return None;
        }
        let id = self.window_id.as_ref()?;
        Some((id, pointer - self.grab_offset))
    }

    #[must_use]
    pub fn is_dragging_window(&self, id: &WindowId) -> bool {
        self.is_dragging && self.window_id.as_ref() == Some(id)
    }

    /// Returns the window that was being dragged.
    pub(crate) fn clear(&mut self) -> Option<WindowId> {
        self.is_dragging = false;
        self.grab_offset = Point::default();
        self.window_id.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_keeps_the_grab_offset() {
        let mut subject = DragState::default();
        subject.begin("about".into(), Point::new(30, 10));
        let (id, origin) = subject.target(Point::new(200, 100)).unwrap();
        assert_eq!(id.as_str(), "about");
        assert_eq!(origin, Point::new(170, 90));
    }

    #[test]
    fn cleared_drag_has_no_target() {
        let mut subject = DragState::default();
        subject.begin("about".into(), Point::new(30, 10));
        assert_eq!(subject.clear(), Some("about".into()));
        assert_eq!(subject.target(Point::new(1, 1)), None);
        assert_eq!(subject, DragState::default());
    }
}
