//! Whether the episode a viewer needs next can already be searched for

use serde::Serialize;

/// Episode after the last one the viewer watched
pub fn next_needed_episode(progress: u32) -> u32 {
    progress.saturating_add(1)
}

/// True when the needed episode should already be out
///
/// With no scheduled next episode (finished or unscheduled shows) everything
/// is assumed released. Otherwise the needed episode must come strictly
/// before the next airing one.
pub fn is_episode_available(progress: u32, next_airing_episode: Option<u32>) -> bool {
    match next_airing_episode {
        Some(next_airing) => next_needed_episode(progress) < next_airing,
        None => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeAvailability {
    pub next_episode: u32,
    pub available: bool,
}

impl EpisodeAvailability {
    pub fn check(progress: u32, next_airing_episode: Option<u32>) -> Self {
        Self {
            next_episode: next_needed_episode(progress),
            available: is_episode_available(progress, next_airing_episode),
        }
    }
}
