//! Error types for the Galaxy3D frustum crate
//!
//! The frustum itself never fails: degenerate input produces degenerate planes.
//! These errors are only returned by the validating `try_*` entry points.

use std::fmt;

/// Result type for validated frustum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Projection parameters violate `0 < near < far`, `0 < fov < 180` or `aspect > 0`
    InvalidProjection(String),

    /// Camera orientation cannot produce an orthonormal basis
    /// (zero-length direction, up vector parallel to the direction, non-finite input)
    DegenerateOrientation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::DegenerateOrientation(msg) => write!(f, "Degenerate orientation: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
