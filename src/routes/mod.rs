pub mod availability;
pub mod torrents;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::scraper::search::PageFetcher;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub nyaa_base_url: Arc<str>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, nyaa_base_url: &str) -> Self {
        Self {
            fetcher,
            nyaa_base_url: Arc::from(nyaa_base_url),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/torrents", get(torrents::find_torrents))
        .route("/api/availability", get(availability::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::scraper::search::mock::MockFetcher;

    pub fn app_with(fetcher: MockFetcher) -> (Router, Arc<MockFetcher>) {
        let fetcher = Arc::new(fetcher);
        let state = AppState::new(fetcher.clone(), "https://nyaa.si");
        (router(state), fetcher)
    }

    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}
