#![doc = include_str!("../README.md")]

mod api_client;
mod auth_client;
mod login;
mod logout;
mod permissions;
mod status;

pub use api_client::{ApiClient, ApiClientExt};
pub use auth_client::{AuthClient, AuthClientExt};
pub use login::{LoginError, LoginResponse};
pub use permissions::{Permission, Permissions};
pub use status::LoginStatus;
