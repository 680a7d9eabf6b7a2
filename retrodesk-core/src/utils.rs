//! Shared plumbing for the manager.
pub mod command_pipe;
pub mod timers;
