use axum::{Json, extract::Query};
use serde::Deserialize;

use crate::scraper::availability::EpisodeAvailability;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub progress: u32,
    pub next_airing_episode: Option<u32>,
}

/// `GET /api/availability?progress=..&nextAiringEpisode=..`
pub async fn check(Query(params): Query<AvailabilityParams>) -> Json<EpisodeAvailability> {
    Json(EpisodeAvailability::check(
        params.progress,
        params.next_airing_episode,
    ))
}
