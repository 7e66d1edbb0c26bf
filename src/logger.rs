//! File-backed tracing setup.
//!
//! The terminal belongs to the animation, so logs go to
//! `$XDG_STATE_HOME/raffle/raffle.log`. Verbosity comes from `RAFFLE_LOG`
//! (an `EnvFilter` directive), defaulting to `info`.

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RAFFLE_LOG";
const LOG_FILE: &str = "raffle.log";

/// Install the global subscriber.
///
/// Returns the writer guard, which must be held until exit so buffered lines
/// are flushed. Returns None when no log file can be set up; the program runs
/// without logging in that case.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Directory holding the log file.
///
/// Checks XDG_STATE_HOME first, falls back to ~/.local/state.
fn log_dir() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_STATE_HOME") {
        Some(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
        _ => home::home_dir()?.join(".local/state"),
    };
    Some(base.join("raffle"))
}
