//! Data carried through a single torrent search

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the caller is looking for
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Usually the romanized title from the tracking service, always required
    pub romaji_name: String,
    /// Canonical English title, preferred as the search term when present
    pub english_name: Option<String>,
    /// Episode the viewer needs next
    pub episode: Option<u32>,
}

impl SearchQuery {
    pub fn new(romaji_name: impl Into<String>) -> Self {
        Self {
            romaji_name: romaji_name.into(),
            ..Default::default()
        }
    }

    pub fn with_english_name(mut self, english_name: impl Into<String>) -> Self {
        self.english_name = Some(english_name.into());
        self
    }

    pub fn with_episode(mut self, episode: u32) -> Self {
        self.episode = Some(episode);
        self
    }

    /// The literal term sent to the index: the English title unless it is blank
    pub fn search_term(&self) -> &str {
        match self.english_name.as_deref().map(str::trim) {
            Some(english) if !english.is_empty() => english,
            _ => self.romaji_name.trim(),
        }
    }
}

/// One row of the results table before any filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCandidate {
    pub title: String,
    pub detail_link: Option<String>,
    pub magnet_link: Option<String>,
    pub published_text: String,
    pub seeders_text: String,
}

/// A release that survived the recency filter, with its parsed metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentResult {
    pub name: String,
    pub date: DateTime<Utc>,
    /// Kept as the page printed it
    pub seeders: String,
    pub magnet_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}
