#![forbid(unsafe_code)]

//! Tracing bootstrap.
//!
//! The animator owns the terminal, so log output must never reach stdout.
//! Logging is off unless `SORTVIZ_LOG` names a file; `SORTVIZ_LOG_FILTER`
//! takes a standard tracing filter directive (default `info`).

use std::env;
use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the environment.
///
/// A missing `SORTVIZ_LOG` leaves tracing uninitialized (all macros become
/// no-ops); an unwritable path is reported once on stderr before the
/// terminal session starts.
pub fn init() {
    let Ok(path) = env::var("SORTVIZ_LOG") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("sortviz: cannot open log file {path:?}: {e}");
            return;
        }
    };

    let filter = EnvFilter::try_from_env("SORTVIZ_LOG_FILTER")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(log = %path, "logging initialized");
}
