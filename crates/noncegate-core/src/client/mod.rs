//! The SDK entry-point client.

#[allow(clippy::module_inception)]
mod client;
/// Client behavior settings.
pub mod client_settings;
/// Shared state behind a client.
pub mod internal;

pub use client::Client;
pub use client_settings::ClientSettings;
pub use internal::InternalClient;
