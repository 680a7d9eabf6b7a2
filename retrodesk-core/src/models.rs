//! Objects (such as windows) tracked by the shell.
mod drag;
mod focus_manager;
mod geometry;
mod minimize;
mod registry;
mod task_list;
mod window_id;
mod window_record;
mod window_size;
mod z_order;

pub mod dto;
mod manager;

pub use drag::DragState;
pub use dto::ManagerState;
pub use focus_manager::FocusManager;
pub use geometry::{Point, Rect};
pub use manager::Manager;
pub use minimize::{MinimizeAnimation, Transform};
pub use registry::WindowRegistry;
pub use task_list::{running_apps, AppStatus, RunningApp};
pub use window_id::WindowId;
pub use window_record::{WindowPatch, WindowRecord};
pub use window_size::{Dimension, WindowSize};
pub use z_order::ZOrderAllocator;
