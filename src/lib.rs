//! Video Album - Core Library
//!
//! Catalogs YouTube videos into a personal album: resolves video IDs from
//! pasted links, formats API durations for display, and stores entries in a
//! typed document collection.

pub mod core;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    album::Album,
    config::AppConfig,
    duration::{format_duration, FormattedDuration, ParsedDuration},
    models::{AppError, AppResult, Thumbnail, Video},
    notifier::{Alert, AlertType, Notifier, Position, TracingNotifier},
    store::{Collection, MemoryCollection},
    video_id::{resolve_video_id, VideoId},
    youtube_api::{VideoSource, YoutubeApiClient},
};

use std::sync::Arc;

/// The album as wired for production use
pub type DefaultAlbum = Album<YoutubeApiClient, MemoryCollection<Video>, TracingNotifier>;

/// Application state shared by front ends
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub album: Arc<DefaultAlbum>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = YoutubeApiClient::new(config.youtube.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create YouTube API client: {}", e))?;
        let videos = MemoryCollection::new(&config.store.videos_collection, &[]);

        tracing::info!(
            "🗂️ Album ready (collection: {})",
            config.store.videos_collection
        );

        Ok(Self {
            config: Arc::new(config),
            album: Arc::new(Album::new(
                Arc::new(client),
                Arc::new(videos),
                Arc::new(TracingNotifier),
            )),
        })
    }

    /// Build state from the saved configuration file, overlaid with environment variables
    pub fn from_environment() -> anyhow::Result<Self> {
        Self::new(Self::load_or_initialize_config())
    }

    fn load_or_initialize_config() -> AppConfig {
        let mut config = match AppConfig::load() {
            Ok(cfg) => {
                if let Err(err) = cfg.validate() {
                    tracing::warn!(
                        "Invalid configuration detected ({}), falling back to defaults",
                        err
                    );
                    AppConfig::default()
                } else {
                    cfg
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to load configuration from disk: {}. Using defaults",
                    err
                );
                AppConfig::default()
            }
        };

        // secrets come from the environment only
        config.apply_env_overrides();
        config
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the library with default settings
pub fn init() -> anyhow::Result<()> {
    utils::logging::init_tracing();
    tracing::info!("📚 {} v{} initialized", NAME, VERSION);
    Ok(())
}
