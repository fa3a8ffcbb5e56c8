//! # DYNBUF Demo
//!
//! Runs a script against a fresh array and prints one line per operation.
//!
//! ```bash
//! # Builtin smoke scenario
//! ./dynbuf_demo
//!
//! # A script file
//! ./dynbuf_demo crates/dynbuf/scripts/insert.toml
//!
//! # With per-operation logs (stderr)
//! RUST_LOG=debug ./dynbuf_demo
//! ```
//!
//! Exit status is non-zero only when the script cannot be loaded or the
//! output cannot be written. Failed array operations are part of normal
//! output.

use std::process::ExitCode;

use dynbuf::{run_script, Script};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let script = match std::env::args_os().nth(1) {
        Some(path) => match Script::load(&path) {
            Ok(script) => {
                tracing::info!(path = %path.to_string_lossy(), "loaded script");
                script
            }
            Err(err) => {
                tracing::error!(path = %path.to_string_lossy(), error = %err, "cannot load script");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::info!("no script given, running builtin scenario");
            Script::builtin()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_script(&script, &mut out) {
        Ok(report) => {
            tracing::info!(
                executed = report.executed,
                failed = report.failed,
                final_len = report.final_contents.len(),
                "script finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "script aborted");
            ExitCode::FAILURE
        }
    }
}
