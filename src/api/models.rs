use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Defaulted so that a body without the field parses and fails the
    /// emptiness check instead of the JSON check.
    #[serde(default)]
    pub query: String,
}

/// One successfully fetched and text-extracted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub url: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Context>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(contexts: Vec<Context>) -> ApiResponse {
        ApiResponse {
            success: true,
            data: Some(contexts),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
