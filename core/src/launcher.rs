//! Launch orchestration
//!
//! A launch is strictly linear: resolve the binary, spawn it, relay signals
//! until it terminates, then derive the launcher's own exit code from the
//! child's termination status. Resolution and spawn failures short-circuit
//! straight to exit; no state is ever revisited.

use crate::config::LaunchConfig;
use crate::error::Result;
use crate::process::unix;
use crate::relay::SignalRelay;
use crate::resolve::{Resolver, Target};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitStatus;
use tracing::debug;

/// Exit code reported when the child terminated abnormally (signaled or
/// crashed without a normal exit code).
pub const ABNORMAL_EXIT_CODE: i32 = 1;

/// Everything a single launch needs: the logical binary name, the argument
/// vector forwarded verbatim, and the working directory for the child.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub name: String,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

/// Resolve, spawn and supervise the child, returning the launcher's exit code.
///
/// The returned code is observably indistinguishable from the child's:
/// normal exits propagate their code (zero included), abnormal terminations
/// collapse to [`ABNORMAL_EXIT_CODE`] instead of re-encoding a signal number.
pub async fn launch(config: &LaunchConfig, request: &LaunchRequest) -> Result<i32> {
    let target = Target::current();
    let path = Resolver::new(config).resolve(&request.name, &target)?;

    let mut child = unix::spawn(&path, &request.args, &request.cwd)?;

    // Handlers go in only now that a child handle exists; before this point
    // default signal dispositions apply.
    let relay = SignalRelay::install();
    let status = relay.forward_until_exit(&mut child).await?;

    debug!("Child terminated with status {}", status);
    Ok(exit_code(status))
}

/// Map a child termination status to the launcher's exit code.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(ABNORMAL_EXIT_CODE)
}
