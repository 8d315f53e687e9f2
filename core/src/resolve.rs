//! Binary resolution
//!
//! Locates the platform/architecture-specific executable for a logical binary
//! name. Binary packages are directories named
//! `{prefix}{name}-{platform}-{arch}` containing the executable itself; the
//! resolver walks the configured search roots and returns the first match as
//! an absolute path. There is no fallback and no retry: a miss is fatal.

use crate::config::LaunchConfig;
use crate::error::{LauncherError, Result};
use std::path::PathBuf;
use tracing::debug;

/// The platform/architecture pair a binary package is built for.
///
/// Identifiers follow the node naming scheme the binary packages are
/// published under (`darwin`/`linux`/`win32`, `x64`/`arm64`/`ia32`), not
/// Rust's own target triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub platform: String,
    pub arch: String,
}

impl Target {
    /// The target describing the running host.
    pub fn current() -> Self {
        Self {
            platform: platform_id(std::env::consts::OS).to_string(),
            arch: arch_id(std::env::consts::ARCH).to_string(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}

fn platform_id(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

fn arch_id(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        other => other,
    }
}

/// Resolves logical binary names against the configured search roots.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    config: &'a LaunchConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a LaunchConfig) -> Self {
        Self { config }
    }

    /// The package directory name for `name` on `target`.
    pub fn package_dir(&self, name: &str, target: &Target) -> String {
        format!("{}{}-{}", self.config.package_prefix, name, target)
    }

    /// Resolve `name` to an absolute executable path for `target`.
    ///
    /// Fails with [`LauncherError::Resolution`] when no search root contains
    /// a matching binary package. The returned path is canonicalized so it
    /// stays valid regardless of the child's working directory.
    pub fn resolve(&self, name: &str, target: &Target) -> Result<PathBuf> {
        let package_dir = self.package_dir(name, target);
        let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);

        for root in &self.config.search_roots {
            let candidate = root.join(&package_dir).join(&file_name);
            debug!("Considering candidate binary {}", candidate.display());
            if candidate.is_file() {
                let path = candidate.canonicalize()?;
                debug!("Resolved '{}' to {}", name, path.display());
                return Ok(path);
            }
        }

        Err(LauncherError::Resolution(format!(
            "no binary package '{}' for '{}' on {} in {} search root(s)",
            package_dir,
            name,
            target,
            self.config.search_roots.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_target() -> Target {
        Target {
            platform: "linux".to_string(),
            arch: "x64".to_string(),
        }
    }

    fn install_package(root: &std::path::Path, dir: &str, file: &str) -> PathBuf {
        let pkg = root.join(dir);
        fs::create_dir_all(&pkg).unwrap();
        let bin = pkg.join(file);
        fs::write(&bin, b"#!/bin/sh\n").unwrap();
        bin
    }

    #[test]
    fn test_platform_arch_mapping() {
        assert_eq!(platform_id("macos"), "darwin");
        assert_eq!(platform_id("windows"), "win32");
        assert_eq!(platform_id("linux"), "linux");
        assert_eq!(arch_id("x86_64"), "x64");
        assert_eq!(arch_id("aarch64"), "arm64");
        assert_eq!(arch_id("x86"), "ia32");
    }

    #[test]
    fn test_target_display() {
        let target = fake_target();
        assert_eq!(target.to_string(), "linux-x64");
    }

    #[test]
    fn test_resolve_finds_installed_package() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = install_package(tmp.path(), "mytool-linux-x64", "mytool");

        let config = LaunchConfig::with_roots(vec![tmp.path().to_path_buf()], "");
        let resolved = Resolver::new(&config)
            .resolve("mytool", &fake_target())
            .expect("should resolve");
        assert_eq!(resolved, bin.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_honors_package_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        install_package(tmp.path(), "@acme-mytool-linux-x64", "mytool");

        let config = LaunchConfig::with_roots(vec![tmp.path().to_path_buf()], "@acme-");
        let resolver = Resolver::new(&config);
        assert_eq!(
            resolver.package_dir("mytool", &fake_target()),
            "@acme-mytool-linux-x64"
        );
        assert!(resolver.resolve("mytool", &fake_target()).is_ok());
    }

    #[test]
    fn test_resolve_searches_roots_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        install_package(first.path(), "mytool-linux-x64", "mytool");
        let shadowed = install_package(second.path(), "mytool-linux-x64", "mytool");

        let config = LaunchConfig::with_roots(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            "",
        );
        let resolved = Resolver::new(&config)
            .resolve("mytool", &fake_target())
            .unwrap();
        assert_ne!(resolved, shadowed.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_package_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LaunchConfig::with_roots(vec![tmp.path().to_path_buf()], "");
        let err = Resolver::new(&config)
            .resolve("mytool", &fake_target())
            .unwrap_err();
        match err {
            LauncherError::Resolution(_) => {}
            e => panic!("Expected Resolution error, got: {}", e),
        }
    }

    #[test]
    fn test_resolve_ignores_directory_named_like_binary() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory where the executable should be must not resolve
        fs::create_dir_all(tmp.path().join("mytool-linux-x64/mytool")).unwrap();

        let config = LaunchConfig::with_roots(vec![tmp.path().to_path_buf()], "");
        assert!(Resolver::new(&config)
            .resolve("mytool", &fake_target())
            .is_err());
    }
}
