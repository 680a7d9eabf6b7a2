//! Applications hosted inside shell windows.
mod application;
mod hosted_app;

pub use application::{AppKind, Application, GameSession, NotepadBuffer, Playback};
pub use hosted_app::{AppRequest, AppView, HostedApp};
