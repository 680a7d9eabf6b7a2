//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::{Point, Rect, WindowSize};
use serde::{Deserialize, Serialize};

/// Store the state of one named shell window.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Top left corner. Ignored while maximized.
    pub position: Point,
    /// Sizing hint. Ignored while maximized.
    pub size: WindowSize,
    pub z_index: u32,
    pub title: String,
}

impl WindowRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, position: Point, size: WindowSize) -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            position,
            size,
            z_index: 1,
            title: title.into(),
        }
    }

    /// Open and not collapsed to the taskbar.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Where the window paints on a desktop of the given size. `None` when it is
    /// not displayed at all. Maximized windows cover the desktop above the taskbar.
    #[must_use]
    pub fn frame(&self, desktop: Rect, taskbar_height: i32, intrinsic: (i32, i32)) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        if self.is_maximized {
            return Some(Rect::new(
                desktop.x,
                desktop.y,
                desktop.w,
                desktop.h.saturating_sub(taskbar_height),
            ));
        }
        Some(Rect::new(
            self.position.x,
            self.position.y,
            self.size.width.into_absolute(intrinsic.0),
            self.size.height.into_absolute(intrinsic.1),
        ))
    }
}

/// A partial update to a [`WindowRecord`]. Unset fields keep their current value.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowPatch {
    pub is_open: Option<bool>,
    pub is_minimized: Option<bool>,
    pub is_maximized: Option<bool>,
    pub position: Option<Point>,
    pub size: Option<WindowSize>,
    pub z_index: Option<u32>,
    pub title: Option<String>,
}

impl WindowPatch {
    /// Build the record that results from applying this patch.
    #[must_use]
    pub fn merge(self, current: &WindowRecord) -> WindowRecord {
        WindowRecord {
            is_open: self.is_open.unwrap_or(current.is_open),
            is_minimized: self.is_minimized.unwrap_or(current.is_minimized),
            is_maximized: self.is_maximized.unwrap_or(current.is_maximized),
            position: self.position.unwrap_or(current.position),
            size: self.size.unwrap_or(current.size),
            z_index: self.z_index.unwrap_or(current.z_index),
            title: self.title.unwrap_or_else(|| current.title.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimension;

    fn about() -> WindowRecord {
        WindowRecord::new(
            "About Me",
            Point::new(50, 50),
            WindowSize::new(Dimension::Pixel(500), Dimension::Auto),
        )
    }

    #[test]
    fn patch_only_touches_the_given_fields() {
        let record = about();
        let patched = WindowPatch {
            is_open: Some(true),
            z_index: Some(4),
            ..WindowPatch::default()
        }
        .merge(&record);
        assert!(patched.is_open);
        assert_eq!(patched.z_index, 4);
        assert_eq!(patched.position, record.position);
        assert_eq!(patched.title, record.title);
    }

    #[test]
    fn closed_and_minimized_windows_have_no_frame() {
        let desktop = Rect::new(0, 0, 1024, 768);
        let mut record = about();
        assert_eq!(record.frame(desktop, 28, (0, 300)), None);
        record.is_open = true;
        record.is_minimized = true;
        assert_eq!(record.frame(desktop, 28, (0, 300)), None);
    }

    #[test]
    fn maximized_frame_fills_the_desktop_above_the_taskbar() {
        let desktop = Rect::new(0, 0, 1024, 768);
        let mut record = about();
        record.is_open = true;
        assert_eq!(
            record.frame(desktop, 28, (0, 300)),
            Some(Rect::new(50, 50, 500, 300))
        );
        record.is_maximized = true;
        assert_eq!(
            record.frame(desktop, 28, (0, 300)),
            Some(Rect::new(0, 0, 1024, 740))
        );
    }
}
