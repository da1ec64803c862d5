pub mod availability;
pub mod matcher;
pub mod nyaasi;
pub mod recency;
pub mod release_parser;
pub mod search;

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Global HTTP client for connection pooling across all searches.
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Sets up the shared HTTP client. The first call wins; later calls are ignored.
///
/// `timeout` is the transport-level timeout; searches themselves add none.
pub fn init_http_client(timeout: Option<Duration>) -> anyhow::Result<()> {
    let client = build_client(timeout)?;
    if HTTP_CLIENT.set(client).is_err() {
        tracing::debug!("HTTP client already initialized");
    }
    Ok(())
}

fn build_client(timeout: Option<Duration>) -> anyhow::Result<Client> {
    let mut builder = Client::builder()
        .user_agent(concat!("anime_torrent_finder/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(2); // Limit idle connections for memory savings
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Returns a reference to the shared HTTP client.
/// Falls back to a client without a timeout when [`init_http_client`] was never called.
pub fn http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| build_client(None).unwrap_or_else(|_| Client::new()))
}
