use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::search::SearchError;

use super::models::ApiResponse;

/// Terminal error type of the relay: every fallible step maps into one of
/// these, and `into_response` is the single place errors become HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON format")]
    InvalidJson,
    #[error("Query parameter is required")]
    QueryRequired,
    #[error("Invalid search results format")]
    InvalidSearchResults,
    #[error("{0}")]
    Search(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson | ApiError::QueryRequired => StatusCode::BAD_REQUEST,
            ApiError::InvalidSearchResults | ApiError::Search(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> ApiError {
        match err {
            SearchError::InvalidResults => ApiError::InvalidSearchResults,
            other => ApiError::Search(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("processing error: {self}");
        }
        match self {
            // The method gate carries a bare error body, no success flag.
            ApiError::MethodNotAllowed => {
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            _ => (status, Json(ApiResponse::err(self.to_string()))).into_response(),
        }
    }
}
