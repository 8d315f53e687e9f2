//! Launcher error types and utilities

use thiserror::Error;

/// Launcher-specific error types
#[derive(Error, Debug)]
pub enum LauncherError {
    /// No installed binary matches the requested name for the running
    /// platform/architecture. Fatal; a missing binary will not appear
    /// without external intervention.
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// The OS refused to create the child process.
    #[error("Spawn error: {0}")]
    Spawn(String),

    /// A signal could not be delivered to the child.
    #[error("Signal error: {0}")]
    Signal(String),

    /// Waiting on the child's termination status failed.
    #[error("Wait error: {0}")]
    Wait(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            LauncherError::Resolution(_) => "BRUN001",
            LauncherError::Spawn(_) => "BRUN002",
            LauncherError::Signal(_) => "BRUN003",
            LauncherError::Wait(_) => "BRUN004",
            LauncherError::Io(_) => "BRUN005",
        }
    }
}

/// Launcher-specific result type
pub type Result<T> = std::result::Result<T, LauncherError>;
