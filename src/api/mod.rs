use anyhow::Result;
use axum::{Router, routing::any};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::fetch::PageFetcher;
use crate::search::SearchClient;

pub mod error;
pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: SearchClient,
    pub pages: PageFetcher,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<AppState> {
        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        let search = SearchClient::new(&config.search_url, timeout)?;
        let pages = PageFetcher::new(timeout)?;
        Ok(AppState {
            config,
            search,
            pages,
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every path and method funnels into the one relay handler; it rejects
    // anything that isn't a POST itself.
    Router::new()
        .route("/", any(handlers::relay_handler))
        .fallback(handlers::relay_handler)
        .layer(cors)
        .with_state(state)
}
