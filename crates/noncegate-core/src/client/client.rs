use std::sync::Arc;

use noncegate_api_base::Configuration;

use crate::client::{client_settings::ClientSettings, internal::InternalClient};

/// The main struct to interact with the noncegate SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Cloning a `Client` must hand out another reference to the same
    // instance, so all shared state lives behind this Arc.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new client, using default settings when `None` is given.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        let http_client = reqwest::Client::builder()
            .build()
            .expect("HTTP client build should not fail");

        let api_config = Configuration {
            base_path: settings.base_url,
            client: http_client,
            user_agent: Some(settings.user_agent),
        };

        Self {
            internal: Arc::new(InternalClient {
                api_config,
                auth_prefix: settings.auth_prefix,
            }),
        }
    }
}
