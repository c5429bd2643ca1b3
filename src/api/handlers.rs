use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;

use crate::extract::html_to_text;

use super::AppState;
use super::error::ApiError;
use super::models::{ApiResponse, Context, SearchRequest};

/// The whole relay: validate the request, query the backend, fetch pages
/// one at a time until enough contexts are collected, return the envelope.
pub async fn relay_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<ApiResponse>, ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: SearchRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    if request.query.trim().is_empty() {
        return Err(ApiError::QueryRequired);
    }

    let hits = state.search.search(&request.query).await?;

    // Sequential on purpose: fetch N+1 starts only after N finished, and
    // failed pages just shrink the output.
    let mut contexts: Vec<Context> = Vec::new();
    for hit in &hits {
        if contexts.len() >= state.config.max_contexts {
            break;
        }
        match state.pages.fetch_html(&hit.url).await {
            Ok(html) => contexts.push(Context {
                url: hit.url.clone(),
                content: html_to_text(&html),
            }),
            Err(e) => {
                tracing::warn!("skipping {}, error: {}", hit.url, e);
            }
        }
    }

    Ok(Json(ApiResponse::ok(contexts)))
}
