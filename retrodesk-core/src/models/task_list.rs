use super::{WindowId, WindowRegistry};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Running,
    /// Minimized windows are reported the way the task manager always has.
    NotResponding,
}

/// A row in the task manager's application list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunningApp {
    pub id: WindowId,
    pub title: String,
    pub status: AppStatus,
}

/// Every open window except the task manager itself, in registry order.
#[must_use]
pub fn running_apps(registry: &WindowRegistry, task_manager: Option<&WindowId>) -> Vec<RunningApp> {
    registry
        .all()
        .filter(|(id, record)| record.is_open && Some(*id) != task_manager)
        .map(|(id, record)| RunningApp {
            id: id.clone(),
            title: record.title.clone(),
            status: if record.is_minimized {
                AppStatus::NotResponding
            } else {
                AppStatus::Running
            },
        })
        .collect()
}
