use std::net::SocketAddr;
use std::time::Duration;

use crate::scraper::nyaasi::DEFAULT_BASE_URL;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Service settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub nyaa_base_url: String,
    /// Transport timeout for upstream requests, none when unset
    pub http_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            nyaa_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; bad values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid BIND_ADDRESS '{}' ({}), using {}",
                    value,
                    e,
                    DEFAULT_BIND_ADDRESS
                );
                defaults.bind_address
            }),
            None => defaults.bind_address,
        };

        let nyaa_base_url = lookup("NYAA_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.nyaa_base_url);

        let http_timeout = lookup("HTTP_TIMEOUT_SECS").and_then(|value| {
            match value.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!("Invalid HTTP_TIMEOUT_SECS '{}' ({}), no timeout set", value, e);
                    None
                }
            }
        });

        Self {
            bind_address,
            nyaa_base_url,
            http_timeout,
        }
    }
}
