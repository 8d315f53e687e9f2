//! binrun launcher binary
//!
//! Resolves the platform-specific binary named by the invocation, spawns it
//! with the caller's streams and working directory, relays termination
//! signals, and exits with a code derived from the child's termination.

#![allow(unused_crate_dependencies)]

#[cfg(unix)]
#[tokio::main]
async fn main() {
    use binrun_core::utils;

    // Launcher stays silent unless RUST_LOG opts in; stderr only
    let _ = utils::init_tracing("warn");

    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("binrun: {}", e);
            1
        }
    };
    std::process::exit(code);
}

#[cfg(unix)]
async fn run() -> binrun_cli::Result<i32> {
    use binrun_cli::Invocation;
    use binrun_core::{launch, LaunchConfig, LaunchRequest};

    let invocation = Invocation::from_env()?;
    let config = LaunchConfig::from_env();
    let request = LaunchRequest {
        name: invocation.name,
        args: invocation.args,
        cwd: invocation.cwd,
    };
    Ok(launch(&config, &request).await?)
}

#[cfg(not(unix))]
fn main() {
    eprintln!("binrun: unsupported platform");
    std::process::exit(1);
}
