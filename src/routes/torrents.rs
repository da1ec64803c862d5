use axum::{
    Json,
    extract::{Query, State},
};

use super::AppState;
use crate::models::{SearchQuery, TorrentResult};
use crate::scraper::search;

/// `GET /api/torrents?romajiName=..&englishName=..&episode=..`
///
/// A missing `romajiName` is rejected with 400 before any search. Otherwise
/// always answers 200; an upstream failure is an empty list.
pub async fn find_torrents(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<TorrentResult>> {
    let results = search::search(state.fetcher.as_ref(), &state.nyaa_base_url, &query).await;
    tracing::info!(
        "Found {} torrent(s) for '{}' episode {:?}",
        results.len(),
        query.search_term(),
        query.episode
    );
    Json(results)
}
