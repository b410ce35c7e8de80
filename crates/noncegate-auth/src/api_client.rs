use noncegate_api_base::{Error, RequestClient, RequestOptions, parse_json_body};
use noncegate_core::Client;

/// Passthrough client for arbitrary authenticated endpoints.
///
/// No endpoint-specific logic lives here. Whether a call needs elevated
/// permission is decided entirely server-side; this client only classifies
/// the outcome by the same rules as every other request, so a caller can
/// react to [`Error::AuthenticationFailed`] by prompting for a login.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
}

impl ApiClient {
    /// Constructs a new `ApiClient` over the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Issues a request to `endpoint` and parses the JSON result.
    ///
    /// An empty 200 body parses as `null`. Independently issued requests
    /// resolve independently; callers that need ordering must await one
    /// before sending the next.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value, Error> {
        let config = self.client.internal.api_configuration().clone();
        let mut request = RequestClient::new(config);
        let content = request.send(endpoint, options).await?;
        parse_json_body(&content)
    }
}

/// Extension trait for `Client` to provide access to the `ApiClient`.
pub trait ApiClientExt {
    /// Creates a new `ApiClient` instance.
    fn api(&self) -> ApiClient;
}

impl ApiClientExt for Client {
    fn api(&self) -> ApiClient {
        ApiClient {
            client: self.clone(),
        }
    }
}
