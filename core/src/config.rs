//! Launcher configuration
//!
//! The launcher is configured entirely through the environment so the
//! forwarded command line stays untouched. `BINRUN_PATH` overrides where
//! binary packages are searched for; `BINRUN_PKG_PREFIX` mirrors the
//! package-name prefix an installation may put in front of every binary
//! package directory.

use std::env;
use std::path::PathBuf;

/// Environment variable holding a path-separated list of search roots.
pub const ENV_SEARCH_PATH: &str = "BINRUN_PATH";
/// Environment variable holding the binary package name prefix.
pub const ENV_PKG_PREFIX: &str = "BINRUN_PKG_PREFIX";

/// Where and how to look for installed binary packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Directories that may contain `{prefix}{name}-{platform}-{arch}` packages
    pub search_roots: Vec<PathBuf>,
    /// Prefix prepended to every binary package directory name
    pub package_prefix: String,
}

impl LaunchConfig {
    /// Build a configuration from the process environment.
    ///
    /// When `BINRUN_PATH` is unset, the search roots default to the directory
    /// containing the launcher executable and its parent, which covers the
    /// common install layout where binary packages sit next to the launcher.
    pub fn from_env() -> Self {
        let search_roots = match env::var_os(ENV_SEARCH_PATH) {
            Some(paths) => env::split_paths(&paths).collect(),
            None => default_search_roots(),
        };
        let package_prefix = env::var(ENV_PKG_PREFIX).unwrap_or_default();
        Self {
            search_roots,
            package_prefix,
        }
    }

    /// Build a configuration with explicit roots (used by tests and embedders).
    pub fn with_roots(search_roots: Vec<PathBuf>, package_prefix: impl Into<String>) -> Self {
        Self {
            search_roots,
            package_prefix: package_prefix.into(),
        }
    }
}

fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            roots.push(dir.to_path_buf());
            if let Some(parent) = dir.parent() {
                roots.push(parent.to_path_buf());
            }
        }
    }
    roots
}
