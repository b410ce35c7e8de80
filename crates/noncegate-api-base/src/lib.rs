//! Base types for the noncegate API clients.
//!
//! This crate provides the common plumbing shared by every operation:
//! - Configuration for reaching a server
//! - The single-use request client and its outcome classification
//! - Error handling types

mod configuration;
mod error;
mod request;

pub use configuration::Configuration;
pub use error::{Error, INVALID_TOKEN_BODY};
pub use request::{
    Encoding, Method, RequestClient, RequestOptions, RequestState, parse_json_body,
};
