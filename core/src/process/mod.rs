//! Process management for the launcher
//!
//! The launcher owns exactly one child process per invocation. The child is
//! spawned with the parent's stdin/stdout/stderr and working directory, so
//! from the terminal's point of view it behaves as the foreground process.
//!
//! ## Platform Support
//!
//! - **Unix**: full support, including signal delivery with `nix`
//! - **Windows**: not yet implemented

#[cfg(unix)]
pub mod unix;

#[cfg(unix)]
pub use unix::*;
