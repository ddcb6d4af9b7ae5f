//! Core data models for the video album

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::duration::{format_duration, FormattedDuration};
use crate::core::video_id::VideoId;

/// A single thumbnail rendition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,

    pub width: u32,

    pub height: u32,
}

/// Thumbnail renditions keyed by quality, as returned by the YouTube Data API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    pub maxres: Option<Thumbnail>,

    pub standard: Option<Thumbnail>,

    pub high: Option<Thumbnail>,

    pub medium: Option<Thumbnail>,

    pub default: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest quality thumbnail available
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }
}

/// Descriptive metadata of an album entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub channel_id: String,

    pub channel_title: String,

    pub description: String,

    pub published_at: DateTime<Utc>,

    pub thumbnail: Option<Thumbnail>,

    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetails {
    /// Raw ISO 8601 duration (`PT4M13S`)
    pub duration: String,
}

/// A video stored in the album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,

    pub snippet: Snippet,

    pub content_details: ContentDetails,

    pub added_at: DateTime<Utc>,
}

impl Video {
    pub fn formatted_duration(&self) -> AppResult<FormattedDuration> {
        format_duration(&self.content_details.duration)
    }

    pub fn embed_url(&self) -> String {
        self.id.embed_url()
    }
}

/// Application error types

#[derive(Debug, thiserror::Error)]

pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid YouTube video duration: {0}")]
    InvalidDuration(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Video already in album: {0}")]
    DuplicateVideo(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Result type alias for application operations

pub type AppResult<T> = Result<T, AppError>;
