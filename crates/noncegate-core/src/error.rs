//! Errors shared across the SDK crates.

use thiserror::Error;

/// Missing required field.
#[derive(Debug, Error)]
#[error("The response received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// Requires that an `Option` holds a value, or returns early with a
/// [`MissingFieldError`] naming the missing expression. Shorthand for
/// `val.ok_or(MissingFieldError(...))?` with a better message.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
