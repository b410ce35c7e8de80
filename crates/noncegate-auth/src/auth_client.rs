use noncegate_core::Client;

/// Subclient containing the login, logout, and status operations.
///
/// The subclient holds no authentication state of its own: the server
/// tracks the session, and every operation returns a structured result the
/// caller uses to update its own view of whether it is logged in.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` over the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
