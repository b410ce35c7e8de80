use noncegate_api_base::Configuration;

/// Shared state behind a [`Client`](crate::Client).
///
/// Any mutable state added here must stay behind the `Arc` so that cloning
/// a `Client` keeps handing out references to the same instance.
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) api_config: Configuration,
    pub(crate) auth_prefix: String,
}

impl InternalClient {
    /// Configuration for issuing API requests.
    pub fn api_configuration(&self) -> &Configuration {
        &self.api_config
    }

    /// Path prefix the auth endpoints are mounted under.
    pub fn auth_prefix(&self) -> &str {
        &self.auth_prefix
    }
}
