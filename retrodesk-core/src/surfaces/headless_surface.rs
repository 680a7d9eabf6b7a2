//! A surface with no screen behind it. It lays windows and taskbar buttons out
//! the way the shell would paint them, so they can be measured.
use super::Surface;
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{Rect, WindowId, WindowRecord};
use crate::DisplayEvent;
use std::collections::VecDeque;

const BUTTON_GAP: i32 = 2;
const TASKBAR_PADDING: i32 = 2;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    desktop: Rect,
    taskbar_height: i32,
    start_button_width: i32,
    button_width: i32,
    intrinsic: (i32, i32),
    windows: Vec<(WindowId, WindowRecord)>,
    pointer_grab: Option<WindowId>,
    overlay: Option<WindowId>,
    pending: VecDeque<DisplayEvent>,
}

impl HeadlessSurface {
    /// Queue input as if it came from the user. Pointer moves and releases are
    /// only listened for while the pointer is grabbed for a drag.
    pub fn inject(&mut self, event: DisplayEvent) {
        let is_drag_input = matches!(event, DisplayEvent::PointerMove(_) | DisplayEvent::PointerUp);
        if is_drag_input && self.pointer_grab.is_none() {
            tracing::trace!("Dropping pointer input, no drag in progress");
            return;
        }
        self.pending.push_back(event);
    }

    #[must_use]
    pub fn pointer_grab(&self) -> Option<&WindowId> {
        self.pointer_grab.as_ref()
    }

    /// The window whose minimize animation overlay is showing.
    #[must_use]
    pub fn overlay(&self) -> Option<&WindowId> {
        self.overlay.as_ref()
    }
}

impl Surface for HeadlessSurface {
    fn new(config: &impl Config) -> Self {
        Self {
            desktop: config.desktop(),
            taskbar_height: config.taskbar_height(),
            start_button_width: config.start_button_width(),
            button_width: config.taskbar_button_width(),
            intrinsic: (config.taskbar_button_width() * 2, config.auto_height()),
            windows: vec![],
            pointer_grab: None,
            overlay: None,
            pending: VecDeque::new(),
        }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        self.pending.drain(..).collect()
    }

    fn update_windows(&mut self, windows: Vec<(&WindowId, &WindowRecord)>, _focused: Option<&WindowId>) {
        self.windows = windows
            .into_iter()
            .map(|(id, record)| (id.clone(), record.clone()))
            .collect();
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        match act {
            DisplayAction::GrabPointer(id) => self.pointer_grab = Some(id),
            DisplayAction::ReleasePointer => {
                self.pointer_grab = None;
                // Anything still queued from the gesture is stale now.
                self.pending
                    .retain(|e| !matches!(e, DisplayEvent::PointerMove(_) | DisplayEvent::PointerUp));
            }
            DisplayAction::BeginMinimizeAnimation { window, .. } => self.overlay = Some(window),
            DisplayAction::EndMinimizeAnimation(id) if self.overlay.as_ref() == Some(&id) => {
                self.overlay = None;
            }
            _ => {}
        }
        None
    }

    fn measure_window(&self, id: &WindowId) -> Option<Rect> {
        let (_, record) = self.windows.iter().find(|(known, _)| known == id)?;
        record.frame(self.desktop, self.taskbar_height, self.intrinsic)
    }

    fn measure_taskbar_button(&self, id: &WindowId) -> Option<Rect> {
        let index = self
            .windows
            .iter()
            .filter(|(_, record)| record.is_open)
            .position(|(known, _)| known == id)?;
        let offset = (self.button_width + BUTTON_GAP) * index as i32;
        Some(Rect::new(
            self.desktop.x + self.start_button_width + TASKBAR_PADDING * 2 + offset,
            self.desktop.y + self.desktop.h - self.taskbar_height + TASKBAR_PADDING,
            self.button_width,
            self.taskbar_height - TASKBAR_PADDING * 2,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::models::{Point, WindowSize};

    fn record(open: bool) -> WindowRecord {
        let mut record = WindowRecord::new("W", Point::new(50, 40), WindowSize::pixels(500, 400));
        record.is_open = open;
        record
    }

    #[test]
    fn taskbar_buttons_are_laid_out_for_open_windows_only() {
        let mut subject = HeadlessSurface::new(&TestConfig::default());
        let (a, b, c) = (WindowId::from("a"), WindowId::from("b"), WindowId::from("c"));
        let (open, closed) = (record(true), record(false));
        subject.update_windows(vec![(&a, &open), (&b, &closed), (&c, &open)], None);

        assert_eq!(subject.measure_taskbar_button(&a), Some(Rect::new(64, 742, 160, 24)));
        assert_eq!(subject.measure_taskbar_button(&b), None);
        assert_eq!(subject.measure_taskbar_button(&c), Some(Rect::new(226, 742, 160, 24)));
        assert_eq!(subject.measure_window(&a), Some(Rect::new(50, 40, 500, 400)));
        assert_eq!(subject.measure_window(&b), None);
    }

    #[test]
    fn pointer_input_is_ignored_without_a_grab() {
        let mut subject = HeadlessSurface::new(&TestConfig::default());
        subject.inject(DisplayEvent::PointerMove(Point::new(1, 1)));
        assert!(subject.get_next_events().is_empty());

        subject.execute_action(DisplayAction::GrabPointer("a".into()));
        subject.inject(DisplayEvent::PointerMove(Point::new(1, 1)));
        subject.execute_action(DisplayAction::ReleasePointer);
        assert!(subject.get_next_events().is_empty());
        assert_eq!(subject.pointer_grab(), None);
    }
}
