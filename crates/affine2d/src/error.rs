//! Error types for invalid usage of the kernel.
//!
//! Numerical degeneracies (zero-length vectors, singular matrices) are not
//! errors; they propagate as non-finite floats. The variants here are
//! programmer errors that must fail loudly rather than clamp or wrap.

use thiserror::Error;

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when the kernel API is misused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `Stroke::line_to` was called before `Stroke::move_to`.
    #[error("must call move_to() before line_to()")]
    LineBeforeMove,

    /// `Stroke::move_to` was called on a stroke that already has vertices.
    #[error("move_to() may only begin an empty stroke (has {0} vertices)")]
    AlreadyStarted(usize),

    /// A struct buffer was indexed outside `[0, len)`.
    #[error("index {index} is out of bounds for buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A mesh generator would exceed the 16-bit index range.
    #[error("{count} vertices cannot be addressed by 16-bit indices")]
    TooManyVertices { count: usize },

    /// A mesh generator was asked for too few vertices.
    #[error("vertex count {n} is below the minimum of {min}")]
    InvalidVertexCount { n: usize, min: usize },
}
