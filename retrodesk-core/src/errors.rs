use crate::models::WindowId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Unknown window: {0}")]
    UnknownWindow(WindowId),
    #[error("Unable to measure window or taskbar button: {0}")]
    MeasurementUnavailable(WindowId),
    #[error("A drag is already in progress")]
    DragAlreadyInProgress,
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
