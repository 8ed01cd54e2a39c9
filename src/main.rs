//! Map2Dif Wrapper - texture-aware frontend for the map2dif Torque map compiler.
//!
//! CLI entry point. The wrapper forwards all of its own arguments verbatim to
//! the first map2dif executable found in the current working directory, scans
//! the compiler's output for missing-texture diagnostics, copies matched
//! texture files into place, and reruns the compiler once so the second pass
//! can pick them up.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/map2dif_wrapper.<date>
//! 2. Ensure `map2dif_wrapper.yaml` exists (created with defaults on first run)
//! 3. Load and validate the config
//! 4. Locate a compiler executable, run it with the forwarded arguments
//! 5. Scan the captured output, copy missing textures, rerun once if needed
//! 6. Exit with 0, -1 (pre-flight failure), or the compiler's own exit code
//!
//! # Platform
//!
//! Primary platform: Windows (map2dif is a Windows tool); the wrapper itself
//! is cross-platform.

use camino::Utf8PathBuf;
use map2dif_wrapper::{APP_NAME, Orchestrator, VERSION};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // The wrapper must still work when the log directory is not writable, so
    // a logging failure is reported on stderr and otherwise ignored.
    let _guard = match map2dif_wrapper::logging::setup_logging("logs", "map2dif_wrapper", false, false)
    {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging unavailable: {:#}", err);
            None
        }
    };

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let cwd = match std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| Utf8PathBuf::try_from(dir).map_err(anyhow::Error::from))
    {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Could not determine the current directory: {:#}", err);
            return -1;
        }
    };

    let exit_code = Orchestrator::new(cwd).run(&raw_args);
    tracing::info!("Exiting with code {}", exit_code);
    exit_code
}
