use crate::config::WindowConfig;
use crate::models::{Point, WindowId, WindowRecord};
use serde::{Deserialize, Serialize};

/// What a hosted application is allowed to see of its window.
#[derive(Debug, Clone, Copy)]
pub struct AppView<'a> {
    pub id: &'a WindowId,
    pub record: &'a WindowRecord,
    pub is_active: bool,
}

/// The only ways an application can affect its window. They are delivered to
/// the manager as events; applications never touch window state themselves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRequest {
    Close,
    Minimize,
    Maximize,
    StartDrag(Point),
}

/// A trait every application plugged into a window implements. The manager
/// calls the lifecycle hooks; the application keeps its content private.
pub trait HostedApp {
    fn new(window: &WindowConfig) -> Self
    where
        Self: Sized;

    fn on_open(&mut self) {}

    /// Release whatever the application holds while its window is shown.
    fn on_close(&mut self) {}

    /// Suspend any simulation loop.
    fn on_minimize(&mut self) {}

    fn on_restore(&mut self) {}

    /// Called with the current window state after every change, so the
    /// application can gate its own timers.
    fn render(&mut self, _view: &AppView<'_>) {}
}
