//! YouTube Data API client
//!
//! Fetches `snippet` and `contentDetails` for a single video and maps the
//! response onto the album's [`Video`] model.
//! See <https://developers.google.com/youtube/v3/docs/videos/list>.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::models::{AppError, AppResult, ContentDetails, Snippet, Thumbnails, Video};
use crate::core::video_id::{resolve_video_id, VideoId};
use crate::utils::network::{get_user_agent, DEFAULT_TIMEOUT};

/// Base URL for the YouTube Data API
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeApiConfig {
    /// Google services API key
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for YoutubeApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Anything that can produce album metadata for a video ID
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch_video(&self, video_id: &VideoId) -> AppResult<Video>;
}

/// `videos.list` response body
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

/// A single `youtube#video` resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub id: String,
    pub snippet: ResourceSnippet,
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnippet {
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub channel_title: String,
}

impl VideoResource {
    /// Convert into an album entry, keeping only the best thumbnail
    pub fn into_video(self, added_at: DateTime<Utc>) -> AppResult<Video> {
        let id = VideoId::parse(&self.id)
            .ok_or_else(|| AppError::VideoNotFound(format!("malformed id in response: {}", self.id)))?;
        let thumbnail = self.snippet.thumbnails.best().cloned();

        Ok(Video {
            id,
            snippet: Snippet {
                channel_id: self.snippet.channel_id,
                channel_title: self.snippet.channel_title,
                description: self.snippet.description,
                published_at: self.snippet.published_at,
                thumbnail,
                title: self.snippet.title,
            },
            content_details: self.content_details,
            added_at,
        })
    }
}

impl VideoListResponse {
    /// Pick the resource for `video_id`; the API answers unknown IDs with an empty list
    pub fn into_video(self, video_id: &VideoId, added_at: DateTime<Utc>) -> AppResult<Video> {
        let resource = self
            .items
            .into_iter()
            .find(|item| item.id == video_id.as_str())
            .ok_or_else(|| AppError::VideoNotFound(video_id.to_string()))?;
        resource.into_video(added_at)
    }
}

/// Client for the YouTube Data API v3
pub struct YoutubeApiClient {
    config: YoutubeApiConfig,
    client: Client,
}

impl YoutubeApiClient {
    pub fn new(config: YoutubeApiConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Config("YouTube API key must not be empty".to_string()));
        }

        if config.timeout_seconds == 0 {
            return Err(AppError::Config(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("Invalid API base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(get_user_agent())
            .build()?;

        info!("📺 Initialized YouTube API client for {}", config.base_url);

        Ok(Self { config, client })
    }

    /// Build the `videos.list` request URL for a video
    pub fn video_request_url(&self, video_id: &VideoId) -> AppResult<Url> {
        let endpoint = format!("{}/videos", self.config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint)
            .map_err(|e| AppError::Config(format!("Invalid API base URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("part", "snippet")
            .append_pair("part", "contentDetails")
            .append_pair("id", video_id.as_str())
            .append_pair("key", &self.config.api_key);

        Ok(url)
    }

    /// Get the video information by ID
    pub async fn get_video_by_id(&self, video_id: &VideoId) -> AppResult<Video> {
        let url = self.video_request_url(video_id)?;
        debug!("🔍 Fetching video metadata for {}", video_id);

        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        let body: VideoListResponse = response.json().await?;

        let video = body.into_video(video_id, Utc::now()).map_err(|e| {
            warn!("⚠️ No metadata returned for {}: {}", video_id, e);
            e
        })?;

        info!("📋 Fetched video info: {}", video.snippet.title);
        Ok(video)
    }

    /// Get the video information by any supported YouTube URL
    pub async fn get_video_by_url(&self, url: &str) -> AppResult<Video> {
        let video_id = resolve_video_id(url).ok_or_else(|| AppError::InvalidUrl(url.to_string()))?;
        self.get_video_by_id(&video_id).await
    }

    pub fn get_config(&self) -> &YoutubeApiConfig {
        &self.config
    }
}

#[async_trait]
impl VideoSource for YoutubeApiClient {
    async fn fetch_video(&self, video_id: &VideoId) -> AppResult<Video> {
        self.get_video_by_id(video_id).await
    }
}
