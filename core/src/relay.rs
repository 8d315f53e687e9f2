//! Signal relay
//!
//! Forwards termination-related signals received by the launcher to the
//! child, making the launcher a transparent relay: graceful shutdown,
//! terminal resize and broken-pipe notifications reach the child exactly as
//! if it were the foreground process.
//!
//! The relay is explicitly scoped: it is installed only once a child handle
//! exists and its forwarder tasks are torn down as soon as the child's exit
//! status has been observed, so no handler can ever act on a stale handle.
//! Each forwarder task feeds a channel consumed by the wait loop, which is
//! the only place signals and child exit are arbitrated.

use crate::error::Result;
use crate::process::unix::{send_signal, ChildProcess};
use nix::sys::signal::Signal;
use std::process::ExitStatus;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// The fixed set of signals the launcher relays.
///
/// `BREAK` exists only on Windows and is therefore absent here; signals the
/// running platform refuses to register are skipped silently at install time.
const FORWARDED_SIGNALS: [(SignalKind, Signal); 8] = [
    (SignalKind::terminate(), Signal::SIGTERM),
    (SignalKind::interrupt(), Signal::SIGINT),
    (SignalKind::quit(), Signal::SIGQUIT),
    (SignalKind::hangup(), Signal::SIGHUP),
    (SignalKind::user_defined1(), Signal::SIGUSR1),
    (SignalKind::user_defined2(), Signal::SIGUSR2),
    (SignalKind::pipe(), Signal::SIGPIPE),
    (SignalKind::window_change(), Signal::SIGWINCH),
];

/// A scoped set of signal forwarders feeding the wait loop
#[derive(Debug)]
pub struct SignalRelay {
    rx: mpsc::UnboundedReceiver<Signal>,
    tasks: Vec<JoinHandle<()>>,
}

impl SignalRelay {
    /// Install handlers for the forwarded signal set.
    ///
    /// Must be called only after the child process exists; until then the
    /// default signal dispositions apply. Signals that cannot be registered
    /// on this platform are skipped without failing the launch.
    pub fn install() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut tasks = Vec::with_capacity(FORWARDED_SIGNALS.len());

        for (kind, sig) in FORWARDED_SIGNALS {
            let mut stream = match signal(kind) {
                Ok(stream) => stream,
                Err(e) => {
                    debug!("Skipping unsupported signal {}: {}", sig, e);
                    continue;
                }
            };
            let tx = tx.clone();
            tasks.push(tokio::spawn(async move {
                while stream.recv().await.is_some() {
                    if tx.send(sig).is_err() {
                        break;
                    }
                }
            }));
        }

        Self { rx, tasks }
    }

    /// Number of signals actually registered for forwarding
    pub fn installed(&self) -> usize {
        self.tasks.len()
    }

    /// Relay signals to `child` until it terminates, returning its exit status.
    ///
    /// This is the launcher's sole suspension point: it blocks indefinitely
    /// until the child exits or is killed. Each signal received while the
    /// child is alive is forwarded identically, exactly once, with no other
    /// action taken.
    pub async fn forward_until_exit(mut self, child: &mut ChildProcess) -> Result<ExitStatus> {
        let pid = child.raw_pid();
        loop {
            tokio::select! {
                status = child.wait() => {
                    debug!("Child {} terminated, tearing down signal relay", pid);
                    self.teardown();
                    return status;
                }
                received = self.rx.recv() => match received {
                    Some(sig) => send_signal(pid, sig)?,
                    // Nothing registered (or every forwarder is gone): just wait
                    None => {
                        let status = child.wait().await;
                        self.teardown();
                        return status;
                    }
                },
            }
        }
    }

    fn teardown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for SignalRelay {
    fn drop(&mut self) {
        self.teardown();
    }
}
