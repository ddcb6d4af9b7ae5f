//! YouTube video identifier resolution
//!
//! Extracts the 11-character video ID from the URL shapes YouTube hands out:
//! short links, embed/v/shorts/feeds paths and `watch` query strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Length of every YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Host used to build privacy-enhanced embed links
pub const EMBED_HOST: &str = "www.youtube-nocookie.com";

// The regex crate has no lookahead, so the "not followed by another ID character"
// rule is expressed as a consumed non-ID character or end of input.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:https?://|/)?",
        r"(?:www\.|m\.|.+\.)?",
        r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|shorts/|feeds/api/videos/|watch\?v=|watch\?.+&v=))",
        r"([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    ))
    .expect("video URL pattern is valid")
});

/// A validated 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Accept a bare identifier, rejecting anything that is not exactly
    /// 11 characters from `[A-Za-z0-9_-]`
    pub fn parse(token: &str) -> Option<Self> {
        if token.len() == VIDEO_ID_LEN && token.bytes().all(is_id_byte) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Player URL on the privacy-enhanced embed host
    pub fn embed_url(&self) -> String {
        format!("https://{}/embed/{}", EMBED_HOST, self.0)
    }

    /// Canonical watch page URL
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VideoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid YouTube video id: {value:?}"))
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Resolve the video ID from a YouTube URL (supports most YouTube URL shapes).
///
/// Returns `None` when no shape matches; never panics or errors.
pub fn resolve_video_id(url: &str) -> Option<VideoId> {
    VIDEO_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}
