//! Hashing primitives for the noncegate login protocol.
//!
//! The protocol never sends a password over the wire. A login attempt
//! presents a [`LoginNonce`]: a SHA-256 chain over the credentials and the
//! attempt's timestamp, which the server can verify from its stored
//! password-derived digest while rejecting stale timestamps.

mod digest;
mod nonce;

pub use digest::sha256_hex;
pub use nonce::LoginNonce;
