//! Upstream client error types.

/// Errors from fetching or decoding the upstream feed.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with something other than 200
    #[error("unexpected status code {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Local snapshot could not be read
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl UpstreamError {
    /// Whether the upstream answered but with an unusable body.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, UpstreamError::Json { .. })
    }
}
