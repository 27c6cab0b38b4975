use thiserror::Error;

/// Top-level error type for the `satellite-api` crate.
///
/// Every call either fully succeeds (decoded JSON returned) or surfaces
/// one of these. The crate performs no retries and no interpretation of
/// individual HTTP status codes -- callers decide what a 404 means.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The instance URL passed at construction is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The server answered with a non-2xx status. Carries the raw body
    /// so callers can inspect the server's error payload.
    #[error("Satellite API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// Response body is not valid JSON, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// The HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
