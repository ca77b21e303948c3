//! Tracing initialization for binaries and tests embedding this crate
//!
//! The engine itself only emits `tracing` events (refused edits, unknown
//! status labels); hosts decide where those go. These helpers set up the
//! stdout subscriber with a sensible filter for interactive use.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize stdout tracing at the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize stdout tracing, honoring `RUST_LOG` when set
pub fn init_tracing_with_level(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("campaign_core={base_level}")));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
