//! Core client types for the noncegate SDK.
//!
//! The [`Client`] is the entry point: it owns the HTTP client and the
//! settings, and operation subclients in the other crates borrow it.

mod client;
mod error;

pub use client::{Client, ClientSettings, InternalClient};
pub use error::MissingFieldError;
