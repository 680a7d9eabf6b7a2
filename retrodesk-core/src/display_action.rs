use crate::models::{Rect, Transform, WindowId};
use serde::{Deserialize, Serialize};

/// These are responses from the window manager.
/// The surface should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// The window is open and its application should be mounted.
    MountWindow(WindowId),

    /// The window was closed; unmount its application.
    UnmountWindow(WindowId),

    /// Sets the stacking order of the open windows,
    /// first in the array is top most.
    SetWindowOrder(Vec<WindowId>),

    /// Tell a window that it is to become focused.
    WindowTakeFocus {
        window: WindowId,
        previous_window: Option<WindowId>,
    },

    /// Remove focus from this window without focusing another.
    Unfocus(WindowId),

    /// Start routing pointer move/up events to the manager for a drag.
    GrabPointer(WindowId),

    /// Stop routing pointer move/up events. Sent on every way a drag can end.
    ReleasePointer,

    /// Play the fly-to-taskbar animation above every window.
    BeginMinimizeAnimation {
        window: WindowId,
        start: Rect,
        end: Rect,
        transform: Option<Transform>,
        z_index: u32,
    },

    /// The animation for this window is over; remove its overlay.
    EndMinimizeAnimation(WindowId),
}
