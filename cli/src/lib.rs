//! binrun launcher library
//!
//! Invocation derivation and error types for the `binrun` binary. The actual
//! resolve/spawn/relay machinery lives in `binrun-core`.

pub mod error;
pub mod invocation;

pub use error::{CliError, Result};
pub use invocation::{Invocation, ENV_BIN_NAME};
