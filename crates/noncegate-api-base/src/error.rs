//! Error types for API operations.

use reqwest::StatusCode;

/// Exact 401 body the server uses to signal a rejected credential or nonce.
///
/// Any other 401 body is a generic failure, not an authentication failure:
/// the distinction is made on the full body, not the status alone.
pub const INVALID_TOKEN_BODY: &str = "Invalid token\n";

/// An error returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server rejected the presented credentials or token (401 with the
    /// agreed sentinel body). Callers typically prompt for a new login
    /// instead of showing a generic failure message.
    #[error("authentication failed: {content}")]
    AuthenticationFailed {
        /// Raw response body content.
        content: String,
    },

    /// Server returned any other HTTP error response.
    #[error("API error {status}: {content}")]
    Response {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// A 200 response whose body was expected to be JSON but did not parse.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Could not reach the server (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Catch-all for other errors (request building, IO, etc.)
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Error::Response {
                status,
                // A reqwest::Error carries no response body, so leave it
                // empty. Responses we read ourselves never take this path.
                content: String::new(),
            };
        }

        // Connection errors, timeouts, and errors sending the request all
        // mean we failed to communicate with the server at all.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return Error::NotConnected(e.to_string());
        }

        Error::Other(e.to_string())
    }
}
