use chrono::Utc;

use crate::sha256_hex;

/// A one-time login credential bound to a username, password, and timestamp.
///
/// Derivation is a two-stage hash chain: the inner digest binds identity to
/// secret, the outer binds that to the attempt's timestamp. The nonce is a
/// function of those three values only, never of prior nonces or any
/// session state, so attempts at different timestamps always produce
/// different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginNonce {
    /// Hex digest presented to the server as the `nonce` form field.
    pub value: String,
    /// Unix timestamp (seconds) the nonce is bound to; sent as `time`.
    pub timestamp: i64,
}

impl LoginNonce {
    /// Derives the nonce for `username` and `password` at a given timestamp.
    pub fn at(username: &str, password: &str, timestamp: i64) -> Self {
        let cryptword = sha256_hex(&format!("{username}-{password}"));
        let value = sha256_hex(&format!("{cryptword}-{timestamp}"));
        Self { value, timestamp }
    }

    /// Samples the clock and derives a nonce for the current second.
    ///
    /// Call this immediately before sending a login request, and never cache
    /// the result across attempts: a retry gets a new timestamp and
    /// therefore a new nonce. Freshness enforcement is the server's job; the
    /// client's only obligation is to sample at send time.
    pub fn fresh(username: &str, password: &str) -> Self {
        Self::at(username, password, Utc::now().timestamp())
    }
}
