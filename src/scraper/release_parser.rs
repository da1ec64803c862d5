//! Episode number and resolution detection from release titles
//!
//! Episode markers, tried in this order (first accepted match wins):
//! - S01E01, S1E1 (season + episode)
//! - ` - 03` followed by whitespace, end of title or `[` (fansub convention)
//! - EP03, ep3
//! - Episode 03, episode3
//! - E01 as a standalone word
//! - [01] bracketed number
//!
//! The order matters: looser patterns would otherwise pick up season
//! numbers, years or resolutions.

use std::sync::LazyLock;

use regex::Regex;

/// Episode numbers outside `1..=999` are treated as false positives
const MAX_EPISODE: u32 = 999;

// ASCII classes throughout; only the separators around ` - ` accept any whitespace
const EPISODE_PATTERNS: [&str; 6] = [
    r"(?i-u)S[0-9]+E([0-9]+)",
    r"(?-u)(?u:\s)-(?u:\s)([0-9]+)(?:(?u:\s)|$|\[)",
    r"(?i-u)EP([0-9]+)",
    r"(?i-u)episode(?u:\s)*([0-9]+)",
    r"(?i-u)\bE([0-9]+)\b",
    r"(?-u)\[([0-9]+)\]",
];

// Literal tokens match anywhere in the title, so `FHD` and `HDTV` report "hd"
const RESOLUTION_PATTERNS: [&str; 7] = [
    r"(?i-u)([0-9]{3,4}p)",
    r"(?i-u)([0-9]{3,4}x[0-9]{3,4})",
    r"(?i-u)(4K)",
    r"(?i-u)(8K)",
    r"(?i-u)(HD)",
    r"(?i-u)(FHD)",
    r"(?i-u)(UHD)",
];

static EPISODE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&EPISODE_PATTERNS));
static RESOLUTION_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&RESOLUTION_PATTERNS));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!("Invalid release pattern {}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Metadata recovered from a release title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseInfo {
    pub episode: Option<u32>,
    pub resolution: Option<String>,
}

/// Parses both the episode number and the resolution tag
///
/// # Examples
/// ```ignore
/// let info = parse_release_name("[SubsPlease] Frieren - 12 (1080p) [ABC123].mkv");
/// assert_eq!(info.episode, Some(12));
/// assert_eq!(info.resolution.as_deref(), Some("1080p"));
/// ```
pub fn parse_release_name(title: &str) -> ReleaseInfo {
    ReleaseInfo {
        episode: extract_episode_number(title),
        resolution: extract_resolution(title),
    }
}

/// Detects the episode number, `None` when no rule yields a plausible value
pub fn extract_episode_number(title: &str) -> Option<u32> {
    EPISODE_RULES.iter().find_map(|re| {
        let digits = re.captures(title)?.get(1)?.as_str();
        // Overlong digit runs fail to parse and fall through like any other miss
        let episode: u32 = digits.parse().ok()?;
        (1..=MAX_EPISODE).contains(&episode).then_some(episode)
    })
}

/// Detects the resolution tag, lower-cased
pub fn extract_resolution(title: &str) -> Option<String> {
    RESOLUTION_RULES.iter().find_map(|re| {
        let token = re.captures(title)?.get(1)?.as_str();
        Some(token.to_lowercase())
    })
}
