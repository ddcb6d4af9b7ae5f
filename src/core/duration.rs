//! ISO 8601 duration formatting
//!
//! The YouTube Data API reports `contentDetails.duration` as an ISO 8601
//! elapsed time (`PT1H2M3S`). This module turns it into the compact
//! `H:MM:SS` / `M:SS` form shown next to each video.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{AppError, AppResult};

// Searched, not anchored: the first `PT` run wins and anything around it is ignored.
// `[0-9]` rather than `\d`: the regex crate's `\d` matches every Unicode digit.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?")
        .expect("duration pattern is valid")
});

/// Hours, minutes and seconds as reported by the API; components are not normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ParsedDuration {
    /// Parse the first `PT[nH][nM][nS]` run in `duration`, defaulting absent components to zero
    pub fn parse(duration: &str) -> AppResult<Self> {
        let caps = DURATION_RE
            .captures(duration)
            .ok_or_else(|| AppError::InvalidDuration(duration.to_string()))?;

        let component = |index: usize| -> AppResult<u64> {
            match caps.get(index) {
                Some(m) => m
                    .as_str()
                    .parse::<u64>()
                    .map_err(|_| AppError::InvalidDuration(duration.to_string())),
                None => Ok(0),
            }
        };

        Ok(Self {
            hours: component(1)?,
            minutes: component(2)?,
            seconds: component(3)?,
        })
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    /// Render for display. Minutes are only zero-padded when an hour segment is present.
    pub fn format(&self) -> FormattedDuration {
        let text = if self.hours > 0 {
            format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            format!("{}:{:02}", self.minutes, self.seconds)
        };
        FormattedDuration(text)
    }
}

/// Display form of a video duration (`1:02:03`, `15:00`, `0:45`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedDuration(String);

impl FormattedDuration {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FormattedDuration> for String {
    fn from(duration: FormattedDuration) -> Self {
        duration.0
    }
}

/// Format the ISO 8601 duration given by the YouTube API for display.
///
/// Fails with [`AppError::InvalidDuration`] only when no `PT` run occurs anywhere in the
/// input; that only happens if the upstream response shape changed.
pub fn format_duration(duration: &str) -> AppResult<FormattedDuration> {
    ParsedDuration::parse(duration).map(|parsed| parsed.format())
}
