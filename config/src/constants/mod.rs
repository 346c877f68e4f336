//! Centralized configuration values shared by the vector crates.
//!
//! Exact vector equality never consults these values. They only back the
//! opt-in approximate comparisons and the degree/radian helpers.

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default tolerance for approximate floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() <= EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Number of degrees in one radian (`180 / PI`).
///
/// # Example
///
/// ```rust
/// use config::constants::DEGREES_PER_RADIAN;
///
/// let half_turn = std::f64::consts::PI * DEGREES_PER_RADIAN;
/// assert!((half_turn - 180.0).abs() < 1e-12);
/// ```
pub const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;

// =============================================================================
// TOLERANCE CONFIGURATION
// =============================================================================

/// Immutable tolerance setting handed to approximate comparisons.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let config = ToleranceConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Largest absolute per-component difference still considered equal.
    pub tolerance: f64,
}

impl ToleranceConfig {
    /// Builds a configuration, rejecting tolerances that are not positive
    /// finite numbers.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { tolerance: EPSILON }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative, or not finite.
    #[error("tolerance must be a positive finite number: {0}")]
    InvalidTolerance(f64),
}

#[cfg(test)]
mod tests;
