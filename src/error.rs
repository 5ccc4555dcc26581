//! Wrapper module for the crate's error type

use thiserror::Error;

/// The error from random-access token lookup with an index past the available tokens
///
/// Out-of-range lookup is the only operation in this crate that can fail: every other operation
/// is total, with degenerate inputs (empty body, empty separator, separator longer than the body)
/// producing well-defined results instead of errors. See [`Split::token`].
///
/// [`Split::token`]: crate::Split::token
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("token index {index} out of range for a split with {count} tokens")]
pub struct TokenIndexError {
    /// The index that was requested
    pub index: usize,
    /// How many tokens the split actually has
    pub count: usize,
}
