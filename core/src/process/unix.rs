//! Unix process spawning and signal delivery
//!
//! The spawned child inherits the parent's standard streams directly (no
//! piping, no buffering) and runs in the parent's process group, so terminal
//! job control keeps working as if the child were the foreground process.
//!
//! Signal delivery deliberately tolerates `ESRCH` and `EPERM`: between "relay
//! decided to forward" and "kill reached the kernel" the child may have
//! exited, and that window must not turn into a launcher failure.

use crate::error::{LauncherError, Result};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, error};

/// The single child process owned by a launcher invocation
///
/// Exactly one `ChildProcess` is live per launch; it is destroyed once the
/// exit status has been consumed by [`ChildProcess::wait`].
#[derive(Debug)]
pub struct ChildProcess {
    /// The process ID of the spawned process
    pid: Pid,
    /// The underlying Child handle for waiting and status checking
    child: Child,
}

impl ChildProcess {
    /// Get the process ID
    pub fn pid(&self) -> u32 {
        self.pid.as_raw() as u32
    }

    /// Get the raw pid for signal delivery
    pub fn raw_pid(&self) -> Pid {
        self.pid
    }

    /// Wait for the process to exit and return its exit status (async)
    pub async fn wait(&mut self) -> Result<std::process::ExitStatus> {
        self.child.wait().await.map_err(|e| {
            LauncherError::Wait(format!("Failed to wait for process {}: {}", self.pid, e))
        })
    }

    /// Try to wait for the process to exit without blocking
    pub fn try_wait(&mut self) -> Result<Option<std::process::ExitStatus>> {
        self.child.try_wait().map_err(|e| {
            LauncherError::Wait(format!(
                "Failed to try_wait for process {}: {}",
                self.pid, e
            ))
        })
    }
}

/// Spawn the resolved executable as the launcher's child process
///
/// The argument vector is passed through unmodified and order-preserving,
/// the working directory is set to `cwd`, and stdin/stdout/stderr are
/// inherited from the parent.
///
/// ## Arguments
///
/// * `path` - Absolute path to the executable, as returned by resolution
/// * `args` - Forwarded command-line arguments
/// * `cwd` - Working directory for the child
pub fn spawn<S: AsRef<OsStr>>(path: &Path, args: &[S], cwd: &Path) -> Result<ChildProcess> {
    debug!(
        "Spawning child: {} with {} arg(s) in {}",
        path.display(),
        args.len(),
        cwd.display()
    );

    let child = Command::new(path)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn '{}': {}", path.display(), e);
            LauncherError::Spawn(format!("Failed to spawn '{}': {}", path.display(), e))
        })?;

    // tokio::process::Child::id() may return Option on some platforms
    let raw_pid = child.id().ok_or_else(|| {
        LauncherError::Spawn("Spawned child did not have a PID".to_string())
    })?;
    let pid = Pid::from_raw(raw_pid as i32);
    debug!("Successfully spawned child process {}", pid);

    Ok(ChildProcess { pid, child })
}

/// Deliver `signal` to the process `pid`
///
/// ## Error Handling
///
/// - `ESRCH` (no such process) is treated as success: the child already
///   exited and reaping will observe that shortly
/// - `EPERM` is treated the same way, since it usually means the pid was
///   reused or ownership changed after exit
/// - Other errors are propagated as `Signal` errors
pub fn send_signal(pid: Pid, signal: Signal) -> Result<()> {
    debug!("Forwarding {} to process {}", signal, pid);

    match kill(pid, signal) {
        Ok(()) => Ok(()),
        Err(nix::errno::Errno::ESRCH) => {
            debug!("Process {} already exited, dropping {}", pid, signal);
            Ok(())
        }
        Err(nix::errno::Errno::EPERM) => {
            debug!(
                "Permission denied signaling process {} (likely already exited)",
                pid
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to send {} to process {}: {}", signal, pid, e);
            Err(LauncherError::Signal(format!(
                "Failed to send {} to process {}: {}",
                signal, pid, e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[tokio::test]
    async fn test_spawn_and_wait() {
        let mut child = spawn(&sh(), &["-c", "true"], &cwd()).expect("Failed to spawn sh");
        assert!(child.pid() > 0);
        let status = child.wait().await.expect("Failed to wait for process");
        assert!(status.success());
    }

    #[tokio::test]
    async fn test_spawn_nonexistent_executable() {
        let result = spawn(
            Path::new("/nonexistent/binary_12345"),
            &[] as &[&str],
            &cwd(),
        );
        match result.unwrap_err() {
            LauncherError::Spawn(_) => {}
            e => panic!("Expected Spawn error, got: {}", e),
        }
    }

    #[tokio::test]
    async fn test_send_signal_to_exited_process_is_ok() {
        // A pid that almost certainly does not exist; ESRCH must map to Ok
        let result = send_signal(Pid::from_raw(999_999), Signal::SIGTERM);
        assert!(result.is_ok());
    }
}
