//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "video_album=info";

/// Build the env filter, falling back to `default` when `RUST_LOG` is unset or invalid
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Filter directive for a configured level name (`"debug"` -> `video_album=debug`)
pub fn filter_for_level(level: &str) -> String {
    format!("video_album={}", level.to_lowercase())
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

pub fn init_tracing_with(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .try_init();
}
