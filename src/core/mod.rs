//! Core business logic module
//!
//! Video ID resolution and duration formatting, the data model, and the
//! collaborators the album is built from (API client, document store, notifier).

pub mod album;
pub mod config;
pub mod duration;
pub mod models;
pub mod notifier;
pub mod routes;
pub mod store;
pub mod video_id;
pub mod youtube_api;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod config_test;


// Re-export commonly used types
pub use album::Album;
pub use config::AppConfig;
pub use duration::{format_duration, FormattedDuration};
pub use video_id::{resolve_video_id, VideoId};
