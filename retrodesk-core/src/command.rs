use crate::models::WindowId;
use serde::{Deserialize, Serialize};

/// Named operations that can be sent to the manager from outside, e.g. over
/// the command pipe.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    OpenWindow(WindowId),
    CloseWindow(WindowId),
    MinimizeWindow(WindowId),
    RestoreWindow(WindowId),
    ToggleMaximized(WindowId),
    FocusWindow(WindowId),
    StartDrag { window: WindowId, x: i32, y: i32 },
    DragTo { x: i32, y: i32 },
    EndDrag,
    TaskbarClick(WindowId),
    IconClick(WindowId),
    IconDoubleClick(WindowId),
    EndTask(WindowId),
    OpenTaskManager,
    Other(String),
}
