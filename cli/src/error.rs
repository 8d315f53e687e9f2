//! CLI error types

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invocation error: {0}")]
    Invocation(String),

    #[error(transparent)]
    Launcher(#[from] binrun_core::LauncherError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Invocation(_) => "CLI001",
            CliError::Launcher(e) => e.code(),
            CliError::Io(_) => "CLI002",
        }
    }
}

/// CLI-specific result type
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::Invocation("test".to_string()).code(), "CLI001");
        let core = binrun_core::LauncherError::Resolution("test".to_string());
        assert_eq!(CliError::Launcher(core).code(), "BRUN001");
    }

    #[test]
    fn test_error_display() {
        let error = CliError::Invocation("cannot determine binary name".to_string());
        assert_eq!(
            error.to_string(),
            "Invocation error: cannot determine binary name"
        );
    }
}
