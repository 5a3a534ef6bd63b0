//! Opt-in file logging for hosts and the demo binary.
//!
//! Nothing is installed unless [`LOG_ENV`] is set. Library code only emits
//! `tracing` events; whether they go anywhere is the host's choice.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path.
pub const LOG_ENV: &str = "PROPWIRE_LOG";

/// Directives used when `RUST_LOG` is unset or invalid. Only this crate's
/// events are kept so a host's dependencies don't flood the file.
pub const DEFAULT_FILTER: &str = "propwire=info";

/// Initialize tracing with file output when [`LOG_ENV`] is set.
///
/// The level filter comes from `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. An already installed global subscriber is left alone.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };

    let path = unique_log_path(&base, SystemTime::now(), std::process::id());
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("propwire: cannot create log file {path}: {err}");
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `{base}.{unix_secs}.{pid}`, so concurrent processes never share a file.
fn unique_log_path(base: &str, now: SystemTime, pid: u32) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{secs}.{pid}")
}
