//! Shared fixtures for unit and integration tests

use chrono::{TimeZone, Utc};

use super::models::{ContentDetails, Snippet, Thumbnail, Video};
use super::video_id::VideoId;

pub(crate) const SAMPLE_ID: &str = "dQw4w9WgXcQ";

pub(crate) fn sample_video() -> Video {
    video_with(SAMPLE_ID, "UCuAXFkgsw1L7xaCfnd5JJOw", 2024, 1, 1)
}

pub(crate) fn video_with(id: &str, channel_id: &str, year: i32, month: u32, day: u32) -> Video {
    Video {
        id: VideoId::parse(id).unwrap(),
        snippet: Snippet {
            channel_id: channel_id.to_string(),
            channel_title: "Rick Astley".to_string(),
            description: "The official video".to_string(),
            published_at: Utc.with_ymd_and_hms(2009, 10, 25, 6, 57, 33).unwrap(),
            thumbnail: Some(Thumbnail {
                url: format!("https://i.ytimg.com/vi/{id}/maxresdefault.jpg"),
                width: 1280,
                height: 720,
            }),
            title: "Never Gonna Give You Up".to_string(),
        },
        content_details: ContentDetails {
            duration: "PT3M33S".to_string(),
        },
        added_at: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
    }
}

/// Canned `videos.list` response body for [`SAMPLE_ID`]
pub(crate) fn sample_api_response() -> &'static str {
    r#"{
  "kind": "youtube#videoListResponse",
  "etag": "abc",
  "items": [
    {
      "kind": "youtube#video",
      "etag": "def",
      "id": "dQw4w9WgXcQ",
      "snippet": {
        "publishedAt": "2009-10-25T06:57:33Z",
        "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
        "title": "Never Gonna Give You Up",
        "description": "The official video",
        "thumbnails": {
          "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "width": 120, "height": 90 },
          "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg", "width": 320, "height": 180 },
          "high": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg", "width": 480, "height": 360 }
        },
        "channelTitle": "Rick Astley",
        "categoryId": "10"
      },
      "contentDetails": {
        "duration": "PT3M33S",
        "dimension": "2d",
        "definition": "hd",
        "caption": "false"
      }
    }
  ],
  "pageInfo": { "totalResults": 1, "resultsPerPage": 1 }
}"#
}
