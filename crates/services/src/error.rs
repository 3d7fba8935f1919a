//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by tracker session operations.
///
/// All are local, recoverable conditions; a failed operation leaves prior
/// state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("invalid tracker configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },

    #[error("career {name:?} not found in catalog")]
    CareerNotFound { name: String },
}
