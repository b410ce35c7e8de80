//! Integration tests for the full login / call / logout flow.

use noncegate_api_base::{Error, RequestClient, RequestOptions};
use noncegate_auth::{ApiClientExt, AuthClient, AuthClientExt, LoginError, Permission};
use noncegate_core::{Client, ClientSettings};
use noncegate_test::start_api_mock;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

const TEST_USERNAME: &str = "fred";
const TEST_PASSWORD: &str = "hunter2";

fn make_client(mock_server: &MockServer) -> Client {
    let settings = ClientSettings {
        base_url: mock_server.uri(),
        ..ClientSettings::default()
    };
    Client::new(Some(settings))
}

fn make_auth_client(mock_server: &MockServer) -> AuthClient {
    make_client(mock_server).auth()
}

#[tokio::test]
async fn full_flow_status_login_call_logout() {
    let status_mock = Mock::given(matchers::method("GET"))
        .and(matchers::path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "LoggedIn": false,
            "Permissions": ""
        })));
    let login_mock = Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/login/"))
        .and(matchers::body_string_contains("name=\"userid\""))
        .and(matchers::body_string_contains("name=\"nonce\""))
        .and(matchers::body_string_contains("name=\"time\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "LoggedIn": true,
            "Permissions": "edit root"
        })));
    let secret_mock = Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"the secret\""));
    let logout_mock = Mock::given(matchers::method("GET"))
        .and(matchers::path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\": \"ok\"}"))
        .expect(1);

    let (server, _api_config) =
        start_api_mock(vec![status_mock, login_mock, secret_mock, logout_mock]).await;
    let client = make_client(&server);

    // Before logging in the server does not recognize us.
    let status = client.auth().check_status().await;
    assert!(!status.logged_in);

    // Login succeeds and reports the granted permissions.
    let login = client
        .auth()
        .login(TEST_USERNAME, TEST_PASSWORD)
        .await
        .unwrap();
    assert!(login.permission_set().has_permission(&Permission::from("root")));

    // An authenticated call is a plain passthrough.
    let secret = client
        .api()
        .request("/api/secret", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(secret, serde_json::json!("the secret"));

    client.auth().logout().await;
}

#[tokio::test]
async fn login_sends_a_fresh_nonce_per_attempt() {
    let login_mock = Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "LoggedIn": true,
            "Permissions": ""
        })))
        .expect(2);

    let (server, _api_config) = start_api_mock(vec![login_mock]).await;
    let auth_client = make_auth_client(&server);

    // Two attempts both reach the server; each derives its own nonce from a
    // freshly sampled timestamp rather than reusing the first one. The
    // derivation itself is covered in noncegate-crypto.
    auth_client
        .login(TEST_USERNAME, TEST_PASSWORD)
        .await
        .unwrap();
    auth_client
        .login(TEST_USERNAME, TEST_PASSWORD)
        .await
        .unwrap();
}

#[tokio::test]
async fn validation_failure_issues_no_request() {
    let any_mock = Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0);
    let (server, _api_config) = start_api_mock(vec![any_mock]).await;

    let auth_client = make_auth_client(&server);
    assert!(matches!(
        auth_client.login("", TEST_PASSWORD).await.unwrap_err(),
        LoginError::MissingCredentials
    ));
    assert!(matches!(
        auth_client.login(TEST_USERNAME, "").await.unwrap_err(),
        LoginError::MissingCredentials
    ));
}

#[tokio::test]
async fn protected_endpoint_rejection_is_distinguished() {
    let secret_mock = Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/secret"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(noncegate_api_base::INVALID_TOKEN_BODY),
        );
    let (server, _api_config) = start_api_mock(vec![secret_mock]).await;

    let err = make_client(&server)
        .api()
        .request("/api/secret", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn request_client_drives_the_same_server_directly() {
    // The configuration returned by the harness drives the state machine
    // without going through a Client.
    let hello_mock = Mock::given(matchers::method("GET"))
        .and(matchers::path("/open/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"hello\""));
    let (_server, api_config) = start_api_mock(vec![hello_mock]).await;

    let mut request = RequestClient::new(api_config);
    let content = request
        .send("/open/hello", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(content, "\"hello\"");
}
