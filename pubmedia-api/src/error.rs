/// Errors that can occur while talking to the publisher's servers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 404: no such publication, track or page
    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
