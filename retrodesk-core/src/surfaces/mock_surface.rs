use super::Surface;
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{Rect, WindowId};
use crate::DisplayEvent;

pub struct MockSurface {
    /// When false every measurement fails, as if nothing were mounted.
    pub measurable: bool,
    pub window_rect: Rect,
    pub button_rect: Rect,
    pub executed: Vec<DisplayAction>,
}

impl Surface for MockSurface {
    fn new(_: &impl Config) -> Self {
        Self {
            measurable: true,
            window_rect: Rect::new(80, 70, 500, 300),
            button_rect: Rect::new(64, 742, 160, 24),
            executed: vec![],
        }
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        self.executed.push(act);
        None
    }

    fn measure_window(&self, _: &WindowId) -> Option<Rect> {
        self.measurable.then_some(self.window_rect)
    }

    fn measure_taskbar_button(&self, _: &WindowId) -> Option<Rect> {
        self.measurable.then_some(self.button_rect)
    }
}
