//! The login operation.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use noncegate_api_base::{Encoding, Method, RequestClient, RequestOptions};
use noncegate_core::{MissingFieldError, require};
use noncegate_crypto::LoginNonce;

use crate::{AuthClient, Permissions};

/// Successful login result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Space-separated permissions granted to the user.
    pub permissions: String,
}

impl LoginResponse {
    /// The permissions string parsed into a set.
    pub fn permission_set(&self) -> Permissions {
        Permissions::from_string(&self.permissions)
    }
}

/// Represents errors that can occur when attempting to log in.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Username or password was empty. Raised before any network call;
    /// recoverable by re-prompting the user.
    #[error("a username and a password must both be provided")]
    MissingCredentials,

    /// The request failed or the server rejected the credentials. A
    /// rejected credential or nonce surfaces as
    /// [`noncegate_api_base::Error::AuthenticationFailed`].
    #[error(transparent)]
    Api(#[from] noncegate_api_base::Error),

    /// A required field was missing in the response.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LoginApiResponse {
    #[serde(default)]
    permissions: Option<String>,
}

impl TryFrom<LoginApiResponse> for LoginResponse {
    type Error = MissingFieldError;

    fn try_from(response: LoginApiResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            permissions: require!(response.permissions),
        })
    }
}

impl AuthClient {
    /// Logs in with the given credentials.
    ///
    /// The password never crosses the wire. A fresh [`LoginNonce`] is
    /// derived at send time and posted together with the username and the
    /// timestamp it is bound to, as the form fields `userid`, `nonce`, and
    /// `time`. Every call samples a new timestamp; nothing is cached or
    /// reused between attempts, so a retry produces a different nonce.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, LoginError> {
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let nonce = LoginNonce::fresh(username, password);
        let options = RequestOptions {
            method: Method::Post,
            encoding: Encoding::Direct,
            params: Some(json!({
                "userid": username,
                "nonce": nonce.value,
                "time": nonce.timestamp.to_string(),
            })),
        };

        let internal = &self.client.internal;
        let path = format!("{}login/", internal.auth_prefix());
        let mut request = RequestClient::new(internal.api_configuration().clone());
        let content = request.send(&path, options).await?;

        let response: LoginApiResponse =
            serde_json::from_str(&content).map_err(noncegate_api_base::Error::from)?;
        Ok(LoginResponse::try_from(response)?)
    }
}
