// src/log.rs
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

/// Install the global subscriber: stderr filtered by `RUST_LOG` (default `info`),
/// plus a debug-level copy in `.store/debug.log`.
///
/// Keep the returned guard alive for the whole run or buffered lines are lost.
/// A second call leaves the first subscriber in place.
pub fn init() -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(STORE_DIR)?;

    let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(stderr_filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(LevelFilter::DEBUG),
        )
        .try_init();
    if let Err(e) = installed {
        logd!("log::init: keeping the existing subscriber ({e})");
    }

    Ok(guard)
}
