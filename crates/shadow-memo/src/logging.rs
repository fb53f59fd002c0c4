//! File logging.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `$XDG_STATE_HOME/shadow-memo/shadow-memo.log` (or
//! `~/.local/state/shadow-memo/`). The filter comes from `SHADOW_MEMO_LOG`
//! and defaults to `info`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHADOW_MEMO_LOG";
const LOG_FILE: &str = "shadow-memo.log";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines get flushed; `None` means logging is off.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn log_dir() -> Option<PathBuf> {
    let root =
        dirs::state_dir().or_else(|| dirs::home_dir().map(|home| home.join(".local/state")))?;
    Some(root.join("shadow-memo"))
}
