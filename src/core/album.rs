//! Album service
//!
//! Composes a metadata source, a document collection and a notifier into the
//! operations the album view needs.

use std::sync::Arc;
use tracing::{debug, info};

use crate::core::models::{AppError, AppResult, Video};
use crate::core::notifier::Notifier;
use crate::core::store::Collection;
use crate::core::video_id::{resolve_video_id, VideoId};
use crate::core::youtube_api::VideoSource;
use crate::utils::validation::sanitize_pasted_url;

/// The user's video album
pub struct Album<S, C, N> {
    source: Arc<S>,
    videos: Arc<C>,
    notifier: Arc<N>,
}

impl<S, C, N> Album<S, C, N>
where
    S: VideoSource,
    C: Collection<Video>,
    N: Notifier,
{
    pub fn new(source: Arc<S>, videos: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            source,
            videos,
            notifier,
        }
    }

    /// Resolve a pasted URL, fetch its metadata and store it in the album
    pub async fn add_video_by_url(&self, url: &str) -> AppResult<Video> {
        let Some(video_id) = resolve_video_id(sanitize_pasted_url(url)) else {
            self.notifier.warning("Invalid YouTube URL");
            return Err(AppError::InvalidUrl(url.to_string()));
        };

        self.ensure_absent(&video_id).await?;

        let video = match self.source.fetch_video(&video_id).await {
            Ok(video) => video,
            Err(e) => {
                self.notifier.error(&format!("Could not load video: {}", e));
                return Err(e);
            }
        };

        self.store(video).await
    }

    /// Store an already fetched video
    pub async fn add_video(&self, video: Video) -> AppResult<Video> {
        self.ensure_absent(&video.id).await?;
        self.store(video).await
    }

    /// Remove a video, returning whether it was in the album
    pub async fn remove_video(&self, video_id: &VideoId) -> AppResult<bool> {
        if !self.videos.exists(video_id.as_str()).await? {
            debug!("{} is not in the album, nothing to remove", video_id);
            return Ok(false);
        }

        self.videos.delete_document(video_id.as_str()).await?;
        info!("🗑️ Removed {} from album", video_id);
        self.notifier.info("Video removed from album");
        Ok(true)
    }

    pub async fn get_video(&self, video_id: &VideoId) -> AppResult<Option<Video>> {
        self.videos.get_document(video_id.as_str()).await
    }

    pub async fn contains_video(&self, video_id: &VideoId) -> AppResult<bool> {
        self.videos.exists(video_id.as_str()).await
    }

    /// All videos, most recently added first
    pub async fn videos(&self) -> AppResult<Vec<Video>> {
        let mut videos = self.videos.list_documents().await?;
        videos.sort_by(|a, b| b.added_at.cmp(&a.added_at).then_with(|| a.id.cmp(&b.id)));
        Ok(videos)
    }

    pub async fn videos_by_channel(&self, channel_id: &str) -> AppResult<Vec<Video>> {
        let mut videos = self
            .videos
            .get_documents_by_field("snippet.channelId", channel_id)
            .await?;
        videos.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(videos)
    }

    /// Remove every video of a channel, returning how many were removed
    pub async fn remove_channel(&self, channel_id: &str) -> AppResult<usize> {
        let removed = self
            .videos
            .delete_documents_by_field("snippet.channelId", channel_id)
            .await?;
        debug!("Removed {} videos of channel {}", removed, channel_id);
        Ok(removed)
    }

    async fn ensure_absent(&self, video_id: &VideoId) -> AppResult<()> {
        if self.videos.exists(video_id.as_str()).await? {
            self.notifier.warning("This video is already in your album");
            return Err(AppError::DuplicateVideo(video_id.to_string()));
        }
        Ok(())
    }

    async fn store(&self, video: Video) -> AppResult<Video> {
        // validated up front so a malformed duration never reaches the store
        let duration = video.formatted_duration().map_err(|e| {
            self.notifier.error("Unexpected response from YouTube");
            e
        })?;

        self.videos
            .set_document(&video, Some(video.id.as_str()))
            .await?;

        info!(
            "📥 Added {} ({}, {}) to album",
            video.id, video.snippet.title, duration
        );
        self.notifier
            .success(&format!("Added \"{}\" to your album", video.snippet.title));
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifier::{AlertType, MemoryNotifier};
    use crate::core::store::MemoryCollection;
    use crate::core::test_support::{sample_video, video_with, SAMPLE_ID};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        calls: AtomicUsize,
        duration: &'static str,
    }

    impl StubSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                duration: "PT3M33S",
            }
        }
    }

    #[async_trait]
    impl VideoSource for StubSource {
        async fn fetch_video(&self, video_id: &VideoId) -> AppResult<Video> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if video_id.as_str() == "missingVid0" {
                return Err(AppError::VideoNotFound(video_id.to_string()));
            }
            let mut video = video_with(video_id.as_str(), "UC1", 2024, 2, 1);
            video.content_details.duration = self.duration.to_string();
            Ok(video)
        }
    }

    type TestAlbum = Album<StubSource, MemoryCollection<Video>, MemoryNotifier>;

    fn album_with(source: StubSource) -> (TestAlbum, Arc<StubSource>, Arc<MemoryNotifier>) {
        let source = Arc::new(source);
        let notifier = Arc::new(MemoryNotifier::new());
        let album = Album::new(
            source.clone(),
            Arc::new(MemoryCollection::new("videos", &[])),
            notifier.clone(),
        );
        (album, source, notifier)
    }

    #[tokio::test]
    async fn test_add_video_by_url() {
        let (album, source, notifier) = album_with(StubSource::new());

        let video = album
            .add_video_by_url(&format!("https://youtu.be/{SAMPLE_ID}"))
            .await
            .unwrap();
        assert_eq!(video.id.as_str(), SAMPLE_ID);
        assert!(album.contains_video(&video.id).await.unwrap());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.last().unwrap().alert_type, AlertType::Success);
    }

    #[tokio::test]
    async fn test_pasted_url_is_sanitized() {
        let (album, _source, _notifier) = album_with(StubSource::new());

        let video = album
            .add_video_by_url(&format!("  <https://youtu.be/{SAMPLE_ID}>\n"))
            .await
            .unwrap();
        assert_eq!(video.id.as_str(), SAMPLE_ID);
    }

    #[tokio::test]
    async fn test_invalid_url_warns_without_fetching() {
        let (album, source, notifier) = album_with(StubSource::new());

        let result = album.add_video_by_url("https://vimeo.com/123").await;
        assert!(matches!(result, Err(AppError::InvalidUrl(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.last().unwrap().alert_type, AlertType::Warning);
    }

    #[tokio::test]
    async fn test_duplicate_is_rejected_before_fetch() {
        let (album, source, _notifier) = album_with(StubSource::new());
        let url = format!("https://www.youtube.com/watch?v={SAMPLE_ID}");

        album.add_video_by_url(&url).await.unwrap();
        let result = album.add_video_by_url(&url).await;
        assert!(matches!(result, Err(AppError::DuplicateVideo(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let (album, _source, notifier) = album_with(StubSource::new());

        let result = album.add_video_by_url("https://youtu.be/missingVid0").await;
        assert!(matches!(result, Err(AppError::VideoNotFound(_))));
        assert_eq!(notifier.last().unwrap().alert_type, AlertType::Error);
        assert!(album.videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_duration_is_not_stored() {
        let mut source = StubSource::new();
        source.duration = "P1D";
        let (album, _source, _notifier) = album_with(source);

        let result = album.add_video_by_url(&format!("https://youtu.be/{SAMPLE_ID}")).await;
        assert!(matches!(result, Err(AppError::InvalidDuration(_))));
        assert!(album.videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_and_removal() {
        let (album, _source, _notifier) = album_with(StubSource::new());
        album.add_video(video_with("aaaaaaaaaaa", "UC1", 2024, 1, 1)).await.unwrap();
        album.add_video(video_with("bbbbbbbbbbb", "UC2", 2024, 3, 1)).await.unwrap();
        album.add_video(video_with("ccccccccccc", "UC1", 2024, 2, 1)).await.unwrap();

        let ids: Vec<String> = album
            .videos()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id.into())
            .collect();
        assert_eq!(ids, vec!["bbbbbbbbbbb", "ccccccccccc", "aaaaaaaaaaa"]);

        let uc1 = album.videos_by_channel("UC1").await.unwrap();
        assert_eq!(uc1.len(), 2);
        assert_eq!(uc1[0].id.as_str(), "ccccccccccc");

        assert!(album.remove_video(&VideoId::parse("bbbbbbbbbbb").unwrap()).await.unwrap());
        assert_eq!(album.remove_channel("UC1").await.unwrap(), 2);
        assert!(album.videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_removing_absent_video_is_silent() {
        let (album, _source, notifier) = album_with(StubSource::new());
        album.add_video(sample_video()).await.unwrap();
        let alerts_before = notifier.alerts().len();

        let absent = VideoId::parse("zzzzzzzzzzz").unwrap();
        assert!(!album.remove_video(&absent).await.unwrap());
        assert_eq!(notifier.alerts().len(), alerts_before);
        assert_eq!(album.videos().await.unwrap().len(), 1);

        assert!(album.remove_video(&sample_video().id).await.unwrap());
        assert_eq!(notifier.last().unwrap().alert_type, AlertType::Info);
        assert!(!album.remove_video(&sample_video().id).await.unwrap());
        assert_eq!(notifier.alerts().len(), alerts_before + 1);
    }

    #[tokio::test]
    async fn test_add_video_rejects_duplicate() {
        let (album, _source, notifier) = album_with(StubSource::new());
        album.add_video(sample_video()).await.unwrap();

        let result = album.add_video(sample_video()).await;
        assert!(matches!(result, Err(AppError::DuplicateVideo(_))));
        assert_eq!(notifier.last().unwrap().alert_type, AlertType::Warning);
        assert_eq!(
            album.get_video(&sample_video().id).await.unwrap(),
            Some(sample_video())
        );
    }
}
