//! The status-check operation.

use serde::Deserialize;

use noncegate_api_base::{Error, RequestClient, RequestOptions};

use crate::{AuthClient, Permissions};

/// The server's answer to a status probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStatus {
    /// Whether the server recognizes this client as logged in.
    pub logged_in: bool,
    /// Space-separated permissions of the logged-in user; empty when logged
    /// out.
    pub permissions: String,
}

impl LoginStatus {
    /// Status representing a client the server does not recognize.
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            permissions: String::new(),
        }
    }

    /// The permissions string parsed into a set.
    pub fn permission_set(&self) -> Permissions {
        Permissions::from_string(&self.permissions)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct StatusApiResponse {
    logged_in: bool,
    permissions: String,
}

impl AuthClient {
    /// Asks the server whether this client is currently logged in.
    ///
    /// This never fails the caller: anything short of a well-formed 200
    /// response means logged-out. The underlying error is logged for
    /// diagnosis and dropped.
    pub async fn check_status(&self) -> LoginStatus {
        match self.request_status().await {
            Ok(status) => status,
            Err(e) => {
                log::debug!("status check failed, treating as logged out: {e}");
                LoginStatus::logged_out()
            }
        }
    }

    async fn request_status(&self) -> Result<LoginStatus, Error> {
        let internal = &self.client.internal;
        let path = format!("{}status", internal.auth_prefix());
        let mut request = RequestClient::new(internal.api_configuration().clone());
        let content = request.send(&path, RequestOptions::default()).await?;

        let response: StatusApiResponse = serde_json::from_str(&content)?;
        Ok(LoginStatus {
            logged_in: response.logged_in,
            permissions: response.permissions,
        })
    }
}
