//! Configuration types for API clients.

/// Configuration for an API client.
///
/// Everything needed to issue requests against one server: where it lives,
/// the HTTP client to reach it with, and how to identify ourselves.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the server (e.g. "<http://localhost:8018>"), without a trailing slash.
    pub base_path: String,
    /// HTTP client used for the actual transport.
    pub client: reqwest::Client,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
}
