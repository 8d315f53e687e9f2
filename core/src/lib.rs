//! Core functionality for the binrun launcher
//!
//! This crate contains binary resolution, process spawning, signal relaying
//! and launch orchestration. The `binrun` binary is a thin shell around
//! [`launcher::launch`].

pub mod config;
pub mod error;
#[cfg(unix)]
pub mod launcher;
#[cfg(unix)]
pub mod process;
#[cfg(unix)]
pub mod relay;
pub mod resolve;

pub use config::LaunchConfig;
pub use error::{LauncherError, Result};
#[cfg(unix)]
pub use launcher::{launch, LaunchRequest, ABNORMAL_EXIT_CODE};
pub use resolve::{Resolver, Target};

/// Core utilities and helper functions
pub mod utils {
    use tracing::debug;

    /// Initialize tracing for the launcher.
    ///
    /// Logs go to stderr only; stdout belongs to the launched child. The
    /// default filter keeps the launcher silent unless `RUST_LOG` says
    /// otherwise.
    pub fn init_tracing(default_level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::LauncherError::Io(std::io::Error::other(e.to_string())))?;

        debug!("Tracing initialized with default level: {}", default_level);
        Ok(())
    }
}
