pub mod command_handler;
pub mod display_event_handler;
mod drag_handler;
mod focus_handler;
mod icon_handler;
mod minimize_handler;
mod taskbar_handler;
mod timer_handler;
mod window_handler;

use super::apps::HostedApp;
use super::command::Command;
use super::config::Config;
use super::models::{Manager, Point, WindowId, WindowPatch, WindowRecord};
use super::surfaces::Surface;
use super::DisplayEvent;
