//! Errors raised by body-transform operations.
//!
//! A single error kind originates in this layer:
//! [`InterceptError::UnexpectedSubjectType`], raised when a transform's
//! precondition on the current subject shape is violated. It is never
//! recovered locally; it aborts the phase chain for the call and the
//! surrounding pipeline turns it into a call-level failure. Errors raised
//! inside caller-supplied transforms travel through
//! [`InterceptError::Transform`] unmodified.

use std::fmt;

/// Boxed error type carried by failed transforms.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the phase contexts' transform operations.
#[derive(Debug, thiserror::Error)]
pub enum InterceptError {
    /// The current subject does not have the shape the operation requires.
    ///
    /// Carries the expected type's name and a rendering of the actual value
    /// for diagnostics.
    #[error("expected the current call subject to be {expected}, got {actual}")]
    UnexpectedSubjectType {
        expected: &'static str,
        actual: String,
    },

    /// A caller-supplied transform failed.
    #[error("body transform failed: {0}")]
    Transform(#[from] BoxError),
}

impl InterceptError {
    /// Build the subject-type-mismatch error from the expected type name and
    /// the value actually found in the subject slot.
    pub fn unexpected_subject(expected: &'static str, actual: &dyn fmt::Debug) -> Self {
        Self::UnexpectedSubjectType {
            expected,
            actual: format!("{actual:?}"),
        }
    }
}
