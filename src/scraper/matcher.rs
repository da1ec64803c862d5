//! Picks the releases for the episode the viewer needs

use crate::models::TorrentResult;

/// Maximum number of releases returned for one search
pub const MAX_MATCHES: usize = 5;

/// Keeps releases whose parsed episode equals `target`, in upstream order
///
/// A release with no recognizable episode never matches a concrete target.
/// Without a target every release is kept. Either way at most
/// [`MAX_MATCHES`] are returned.
pub fn match_episode(results: Vec<TorrentResult>, target: Option<u32>) -> Vec<TorrentResult> {
    results
        .into_iter()
        .filter(|result| match target {
            Some(episode) => result.episode == Some(episode),
            None => true,
        })
        .take(MAX_MATCHES)
        .collect()
}
