//! The logout operation.

use noncegate_api_base::{RequestClient, RequestOptions};

use crate::AuthClient;

impl AuthClient {
    /// Logs out.
    ///
    /// Idempotent and infallible from the caller's perspective: logging out
    /// twice is not an error, and after a transport failure the caller is
    /// in the same place as after a success. Failures are logged and
    /// dropped.
    pub async fn logout(&self) {
        let internal = &self.client.internal;
        let path = format!("{}logout", internal.auth_prefix());
        let mut request = RequestClient::new(internal.api_configuration().clone());
        if let Err(e) = request.send(&path, RequestOptions::default()).await {
            log::debug!("logout request failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use noncegate_core::{Client, ClientSettings};
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    use super::*;
    use crate::AuthClientExt;

    fn make_auth_client(mock_server: &MockServer) -> AuthClient {
        let settings = ClientSettings {
            base_url: mock_server.uri(),
            ..ClientSettings::default()
        };
        Client::new(Some(settings)).auth()
    }

    #[tokio::test]
    async fn logout_hits_the_logout_endpoint() {
        let mock = Mock::given(matchers::method("GET"))
            .and(matchers::path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\": \"ok\"}"))
            .expect(1);
        let server = MockServer::start().await;
        server.register(mock).await;

        make_auth_client(&server).logout().await;
    }

    #[tokio::test]
    async fn logout_twice_is_not_an_error() {
        let mock = Mock::given(matchers::method("GET"))
            .and(matchers::path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\": \"ok\"}"))
            .expect(2);
        let server = MockServer::start().await;
        server.register(mock).await;

        let auth_client = make_auth_client(&server);
        auth_client.logout().await;
        auth_client.logout().await;
    }

    #[tokio::test]
    async fn logout_swallows_server_errors() {
        let mock = Mock::given(matchers::method("GET"))
            .and(matchers::path("/auth/logout"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"));
        let server = MockServer::start().await;
        server.register(mock).await;

        // Completing at all is the assertion.
        make_auth_client(&server).logout().await;
    }
}
