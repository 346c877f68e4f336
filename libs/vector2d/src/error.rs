//! # Error Types
//!
//! Errors reported by the checked (`try_*`) geometry operations.
//!
//! The plain operations never fail: they let NaN and infinity flow through
//! their results. The checked variants reject degenerate inputs up front.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during checked vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2d::{geometry, Vector, VectorError};
///
/// match geometry::try_normalize(Vector::ZERO) {
///     Ok(unit) => println!("direction: {unit}"),
///     Err(VectorError::ZeroLength) => eprintln!("no direction"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// The operation needs a direction but the vector has zero length.
    #[error("vector has zero length and no direction")]
    ZeroLength,

    /// A component is NaN or infinite.
    #[error("vector ({x}, {y}) has a non-finite component")]
    NonFinite {
        /// X component of the rejected vector
        x: f64,
        /// Y component of the rejected vector
        y: f64,
    },

    /// A length range whose minimum exceeds its maximum.
    #[error("invalid length range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested minimum length
        min: f64,
        /// Requested maximum length
        max: f64,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
