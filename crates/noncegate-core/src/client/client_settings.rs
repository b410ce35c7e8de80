use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings: where the server lives and how we
/// identify ourselves to it. They are optional and uneditable once the
/// client is initialized.
///
/// Defaults target a local instance of the stock example server:
///
/// ```
/// # use noncegate_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "http://localhost:8018".to_string(),
///     auth_prefix: "/auth/".to_string(),
///     user_agent: "Noncegate Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Base URL of the targeted server, without a trailing slash. Defaults
    /// to `http://localhost:8018`.
    pub base_url: String,
    /// Path prefix the auth API is mounted under; the status, login, and
    /// logout paths are derived from it. Defaults to `/auth/`.
    pub auth_prefix: String,
    /// The user_agent to send. Defaults to `Noncegate Rust-SDK`.
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8018".into(),
            auth_prefix: "/auth/".into(),
            user_agent: "Noncegate Rust-SDK".into(),
        }
    }
}
