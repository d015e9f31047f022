//! Error types for gradops.
//!
//! Every failure in this crate is a precondition violation detected before any
//! computation proceeds. Nothing is retried or substituted with a default; the
//! error is returned to the caller unchanged, even when it originates inside a
//! function handed to one of the [`crate::seq`] combinators.

use thiserror::Error;

/// Result type alias using gradops' [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gradops operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A mathematical precondition was violated (e.g. a zero denominator).
    #[error("domain violation in `{op}`: input {arg} is outside the valid domain")]
    Domain {
        /// The operator that rejected its input
        op: &'static str,
        /// The offending input value
        arg: f64,
    },

    /// Two sequences that must be the same length were not.
    #[error("length mismatch: left sequence has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the left-hand sequence
        left: usize,
        /// Length of the right-hand sequence
        right: usize,
    },
}
