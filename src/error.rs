//! Error type shared by every fallible operation of the engine.
//!
//! All errors are contract violations raised synchronously at the call that
//! triggered them. An operation returning `Err` leaves the receiver untouched.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphicsError>;

/// Errors returned by matrices, regions and graphics contexts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is not invertible")]
    DegenerateMatrix,

    /// An argument is outside the range the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A required value, such as a font family name, was not supplied.
    #[error("argument `{name}` is required")]
    NullArgument { name: &'static str },
}

impl GraphicsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GraphicsError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn null(name: &'static str) -> Self {
        GraphicsError::NullArgument { name }
    }
}
