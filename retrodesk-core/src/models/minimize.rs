//! State of the fly-to-taskbar animation played when a window is minimized.
use super::{Point, Rect, WindowId};
use crate::utils::timers::TimerHandle;
use serde::{Deserialize, Serialize};

/// The single minimize animation on screen. `pending` holds the timer that will
/// flip the window to minimized once the animation has played.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimizeAnimation {
    pub window_id: Option<WindowId>,
    pub start_rect: Option<Rect>,
    pub end_rect: Option<Rect>,
    pub is_animating: bool,
    pub pending: Option<TimerHandle>,
}

/// How the presentation layer should morph the start rect into the end rect.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Point,
    pub scale_x: f32,
    pub scale_y: f32,
    pub opacity: f32,
}

impl MinimizeAnimation {
    pub(crate) fn begin(&mut self, id: WindowId, start: Rect, end: Rect, pending: TimerHandle) {
        self.window_id = Some(id);
        self.start_rect = Some(start);
        self.end_rect = Some(end);
        self.is_animating = true;
        self.pending = Some(pending);
    }

    #[must_use]
    pub fn is_animating_window(&self, id: &WindowId) -> bool {
        self.is_animating && self.window_id.as_ref() == Some(id)
    }

    /// Stop animating `id`. The rects are kept for inspection until the next
    /// minimize replaces them. Returns the timer that was pending, if any.
    pub(crate) fn finish(&mut self, id: &WindowId) -> Option<TimerHandle> {
        if self.window_id.as_ref() != Some(id) {
            return None;
        }
        self.is_animating = false;
        self.pending.take()
    }

    /// The end state of the animation: moved onto the taskbar button, scaled
    /// down to its size and fully faded.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        let (start, end) = (self.start_rect?, self.end_rect?);
        if start.w == 0 || start.h == 0 {
            return None;
        }
        Some(Transform {
            translate: end.origin() - start.origin(),
            scale_x: end.w as f32 / start.w as f32,
            scale_y: end.h as f32 / start.h as f32,
            opacity: 0.0,
        })
    }
}
