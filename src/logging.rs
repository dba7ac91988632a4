use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;

pub const LOG_FILE: &str = "spend-dashboard.log";

/// Where log lines go. The terminal UI owns stdout, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// `RUST_LOG` is honoured only when debug logging is on; otherwise the level
/// is pinned to `info`.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise the global subscriber and record the resolved configuration
/// through it. Keep the returned guard alive for the whole session or
/// buffered file output is lost.
pub fn init(
    cfg: &DashboardConfig,
    target: LogTarget<'_>,
) -> Result<Option<WorkerGuard>, TryInitError> {
    let guard = match target {
        LogTarget::File(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter(cfg.debug))
                .with_ansi(false)
                .with_writer(writer)
                .finish()
                .try_init()?;
            Some(guard)
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(cfg.debug))
                .with_writer(std::io::stderr)
                .finish()
                .try_init()?;
            None
        }
    };
    log_loaded(cfg);
    Ok(guard)
}

fn log_loaded(cfg: &DashboardConfig) {
    info!(?cfg, "configuration loaded");
}
