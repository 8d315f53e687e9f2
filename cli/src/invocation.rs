//! Invocation derivation
//!
//! The launcher never parses its command line: everything after the program
//! name is forwarded to the child verbatim. The only thing derived here is
//! the logical binary name, taken from `BINRUN_BIN_NAME` when set and
//! otherwise from the launcher's own argv0 file name — the shim convention
//! where the launcher is installed under the name of the tool it fronts.

use crate::error::{CliError, Result};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable overriding the logical binary name.
pub const ENV_BIN_NAME: &str = "BINRUN_BIN_NAME";

/// One parsed-but-not-interpreted launcher invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Logical name of the binary to resolve
    pub name: String,
    /// Arguments forwarded verbatim, order-preserving
    pub args: Vec<OsString>,
    /// Working directory inherited by the child
    pub cwd: PathBuf,
}

impl Invocation {
    /// Derive the invocation from the process environment and argv.
    pub fn from_env() -> Result<Self> {
        let mut argv = env::args_os();
        let argv0 = argv
            .next()
            .ok_or_else(|| CliError::Invocation("empty argument vector".to_string()))?;

        let name = match env::var(ENV_BIN_NAME) {
            Ok(name) if !name.is_empty() => name,
            _ => name_from_argv0(&argv0)?,
        };

        Ok(Self {
            name,
            args: argv.collect(),
            cwd: env::current_dir()?,
        })
    }
}

/// Extract the logical binary name from argv0.
///
/// Only the platform executable suffix is stripped; dots inside the name are
/// preserved (`my.tool` stays `my.tool`).
pub fn name_from_argv0(argv0: &OsStr) -> Result<String> {
    let file_name = Path::new(argv0)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CliError::Invocation(format!("cannot determine binary name from {:?}", argv0))
        })?;

    let name = match std::env::consts::EXE_SUFFIX {
        "" => file_name,
        suffix => file_name.strip_suffix(suffix).unwrap_or(file_name),
    };

    if name.is_empty() {
        return Err(CliError::Invocation(format!(
            "cannot determine binary name from {:?}",
            argv0
        )));
    }
    Ok(name.to_string())
}
