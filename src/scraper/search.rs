//! One search request: fetch, extract, parse, filter, match
//!
//! [`search`] never fails from the caller's point of view; any error is
//! logged and the result is an empty list. [`try_search`] exposes the same
//! pipeline with its error intact.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::matcher::match_episode;
use super::nyaasi::{extract_candidates, parse_listing_rows, search_url};
use super::recency::recent_publish_date;
use super::release_parser::parse_release_name;
use crate::models::{RawCandidate, SearchQuery, TorrentResult};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Invalid selector {0}")]
    Selector(String),
}

/// Raw response of an upstream page request
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of search result pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, SearchError>;
}

/// Runs a search, degrading any failure to an empty list
pub async fn search(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    query: &SearchQuery,
) -> Vec<TorrentResult> {
    match try_search(fetcher, base_url, query, Utc::now()).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Torrent search for '{}' failed: {}", query.search_term(), e);
            Vec::new()
        }
    }
}

/// Runs a search against the page returned for `query`, judging recency at `now`
pub async fn try_search(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    query: &SearchQuery,
    now: DateTime<Utc>,
) -> Result<Vec<TorrentResult>, SearchError> {
    let url = search_url(base_url, query.search_term());
    tracing::debug!("Searching nyaa: {} (episode {:?})", url, query.episode);

    let page = fetcher.fetch(&url).await?;
    if !page.is_success() {
        return Err(SearchError::Status(page.status));
    }

    let results = parse_results(&page.body, now)?;
    tracing::debug!("{} recent release(s) for '{}'", results.len(), query.search_term());

    Ok(match_episode(results, query.episode))
}

/// Extracts every row of a results page that was published inside the window
pub fn parse_results(html: &str, now: DateTime<Utc>) -> Result<Vec<TorrentResult>, SearchError> {
    let rows = parse_listing_rows(html)?;

    Ok(extract_candidates(&rows)
        .into_iter()
        .filter_map(|candidate| to_result(candidate, now))
        .collect())
}

fn to_result(candidate: RawCandidate, now: DateTime<Utc>) -> Option<TorrentResult> {
    let date = recent_publish_date(&candidate.published_text, now)?;
    let info = parse_release_name(&candidate.title);

    Some(TorrentResult {
        name: candidate.title,
        date,
        seeders: candidate.seeders_text,
        magnet_link: candidate.magnet_link.unwrap_or_default(),
        detail_link: candidate.detail_link,
        episode: info.episode,
        resolution: info.resolution,
    })
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Fetcher returning a canned response and recording requested URLs
    pub struct MockFetcher {
        pub response: Result<FetchedPage, SearchError>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn with_page(status: u16, body: &str) -> Self {
            Self {
                response: Ok(FetchedPage {
                    status,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(error: SearchError) -> Self {
            Self {
                response: Err(error),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, SearchError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }
}
