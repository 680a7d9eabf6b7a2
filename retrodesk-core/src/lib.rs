//! The window manager at the heart of a retro desktop shell.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod apps;
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod surfaces;
pub mod utils;

pub use apps::{AppKind, AppRequest, AppView, Application, HostedApp};
pub use command::Command;
pub use config::{Config, WindowConfig};
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, Modifiers, TitleButton};
pub use models::Manager;
pub use models::ManagerState;
pub use models::WindowId;
pub use state::State;
pub use surfaces::{HeadlessSurface, Surface};
pub use utils::command_pipe::{parse_command, CommandPipe};
