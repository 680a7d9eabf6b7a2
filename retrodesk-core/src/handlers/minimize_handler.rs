#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::errors::{DeskError, Result};
use crate::models::Rect;
use crate::utils::timers::TimerTask;

/// Painted above every window for the length of the animation.
const OVERLAY_RAISE: u32 = 200;

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Collapse a window into its taskbar button. When both rects can be
    /// measured the window animates first and is flagged minimized once the
    /// animation has played; otherwise it is flagged minimized at once.
    pub fn minimize_window(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.known_record(id) else {
            return false;
        };
        if !record.is_open || record.is_minimized {
            return false;
        }
        // Minimizing again mid-animation replaces the pending flip.
        self.cancel_minimize(id);
        // A window on its way to the taskbar can't follow the pointer.
        if self.state.drag.is_dragging_window(id) {
            self.end_drag();
        }

        if let Some(app) = self.app_mut(id) {
            app.on_minimize();
        }
        self.state.unfocus_window(id);

        // Make sure the surface measures the current layout.
        self.update_windows();
        match self.measure_minimize(id) {
            Ok((start, end)) => {
                let deadline = self.state.clock + self.state.minimize_duration;
                let pending = self
                    .state
                    .timers
                    .schedule(deadline, TimerTask::FinishMinimize(id.clone()));
                self.state.minimize.begin(id.clone(), start, end, pending);
                let act = DisplayAction::BeginMinimizeAnimation {
                    window: id.clone(),
                    start,
                    end,
                    transform: self.state.minimize.transform(),
                    z_index: self.state.z_order.current().saturating_add(OVERLAY_RAISE),
                };
                self.state.actions.push_back(act);
                tracing::debug!("Animating {} from {:?} to {:?}", id, start, end);
            }
            Err(err) => {
                tracing::debug!("{}, minimizing without animation", err);
                let patch = WindowPatch {
                    is_minimized: Some(true),
                    ..WindowPatch::default()
                };
                if self.state.registry.set(id, patch).is_err() {
                    return false;
                }
            }
        }
        true
    }

    /// Stop any minimize in flight for `id`. Returns true if a pending flip to
    /// minimized was cancelled.
    pub(crate) fn cancel_minimize(&mut self, id: &WindowId) -> bool {
        let cancelled = self
            .state
            .timers
            .cancel_task(&TimerTask::FinishMinimize(id.clone()));
        if self.state.minimize.is_animating_window(id) {
            self.state.minimize.finish(id);
            self.state
                .actions
                .push_back(DisplayAction::EndMinimizeAnimation(id.clone()));
        }
        cancelled
    }

    /// True while `id` is animating towards the taskbar.
    #[must_use]
    pub fn is_collapsing(&self, id: &WindowId) -> bool {
        self.state
            .timers
            .is_task_pending(&TimerTask::FinishMinimize(id.clone()))
    }

    /// The animation has played out: flag the window minimized.
    pub(crate) fn finish_minimize(&mut self, id: &WindowId) -> bool {
        if self.state.minimize.is_animating_window(id) {
            self.state.minimize.finish(id);
            self.state
                .actions
                .push_back(DisplayAction::EndMinimizeAnimation(id.clone()));
        }
        match self.state.registry.get(id) {
            Ok(record) if record.is_open => {}
            _ => return false,
        }
        let patch = WindowPatch {
            is_minimized: Some(true),
            ..WindowPatch::default()
        };
        self.state.registry.set(id, patch).is_ok()
    }

    fn measure_minimize(&self, id: &WindowId) -> Result<(Rect, Rect)> {
        let start = self.surface.measure_window(id);
        let end = self.surface.measure_taskbar_button(id);
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(DeskError::MeasurementUnavailable(id.clone())),
        }
    }
}
