//! Network utilities and helpers

use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Get user agent string
pub fn get_user_agent() -> &'static str {
    concat!("VideoAlbum/", env!("CARGO_PKG_VERSION"))
}
