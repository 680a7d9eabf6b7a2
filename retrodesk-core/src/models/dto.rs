use super::{running_apps, Rect, RunningApp, WindowId, WindowRecord};
use crate::state::State;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: WindowId,
    #[serde(flatten)]
    pub record: WindowRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnimationEntry {
    pub window: WindowId,
    pub start: Rect,
    pub end: Rect,
}

/// Snapshot of the shell published to observers after every change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    pub active_window: Option<WindowId>,
    pub window_title: Option<String>,
    pub windows: Vec<WindowEntry>,
    pub stacking_order: Vec<WindowId>,
    pub dragging: Option<WindowId>,
    pub animating: Option<AnimationEntry>,
    pub running_apps: Vec<RunningApp>,
    pub highest_z_index: u32,
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let focused = state.focus_manager.window(&state.registry);
        let animating = match (
            &state.minimize.window_id,
            state.minimize.start_rect,
            state.minimize.end_rect,
        ) {
            (Some(window), Some(start), Some(end)) if state.minimize.is_animating => {
                Some(AnimationEntry {
                    window: window.clone(),
                    start,
                    end,
                })
            }
            _ => None,
        };
        Self {
            active_window: focused.map(|(id, _)| id.clone()),
            window_title: focused.map(|(_, record)| record.title.clone()),
            windows: state
                .registry
                .all()
                .map(|(id, record)| WindowEntry {
                    id: id.clone(),
                    record: record.clone(),
                })
                .collect(),
            stacking_order: state.registry.stacking_order(),
            dragging: state.drag.window_id.clone(),
            animating,
            running_apps: running_apps(&state.registry, state.task_manager.as_ref()),
            highest_z_index: state.z_order.current(),
        }
    }
}
