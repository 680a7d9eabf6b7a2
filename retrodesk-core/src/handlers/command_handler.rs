#![allow(clippy::wildcard_imports)]

use super::*;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /* Please also update the command pipe parser if a command is added or
     * changes the values it carries. */
    /// Processes a command and invokes the associated function.
    /// Returns true if changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        match command {
            Command::OpenWindow(id) => self.open_window(id),
            Command::CloseWindow(id) => self.close_window(id),
            Command::MinimizeWindow(id) => self.minimize_window(id),
            Command::RestoreWindow(id) => self.restore_window(id),
            Command::ToggleMaximized(id) => self.toggle_maximized(id),
            Command::FocusWindow(id) => self.focus_window(id),

            Command::StartDrag { window, x, y } => self.start_drag(window, Point::new(*x, *y)),
            Command::DragTo { x, y } => self.drag_to(Point::new(*x, *y)),
            Command::EndDrag => self.end_drag(),

            Command::TaskbarClick(id) => self.taskbar_click(id),
            Command::IconClick(id) => self.icon_click(id),
            Command::IconDoubleClick(id) => self.icon_double_click(id),

            Command::EndTask(id) => self.end_task(id),
            Command::OpenTaskManager => self.open_task_manager(),

            Command::Other(cmd) => {
                tracing::warn!("Unrecognised command: {}", cmd);
                false
            }
        }
    }
}
