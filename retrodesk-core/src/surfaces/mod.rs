//! Where the shell is drawn and where its input comes from.
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{Rect, WindowId, WindowRecord};
use crate::DisplayEvent;

mod headless_surface;
#[cfg(test)]
mod mock_surface;

pub use self::headless_surface::HeadlessSurface;
#[cfg(test)]
pub use self::mock_surface::MockSurface;

pub trait Surface {
    fn new(config: &impl Config) -> Self;

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        vec![]
    }

    /// Lay the windows out again. Called after every change and before measuring.
    fn update_windows(&mut self, _windows: Vec<(&WindowId, &WindowRecord)>, _focused: Option<&WindowId>) {}

    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    /// The on-screen rect of a window, if it is mounted.
    fn measure_window(&self, id: &WindowId) -> Option<Rect>;

    /// The on-screen rect of a window's taskbar button, if it has one.
    fn measure_taskbar_button(&self, id: &WindowId) -> Option<Rect>;

    fn flush(&self) {}
}
