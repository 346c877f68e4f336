//! Degree/radian conversion helpers.
//!
//! All geometry functions in this crate take and return radians; these
//! helpers are for callers that think in degrees.

use config::constants::DEGREES_PER_RADIAN;

/// Converts an angle in degrees to radians.
///
/// # Examples
/// ```
/// use vector2d::to_radians;
/// assert_eq!(to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn to_radians(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.0
}

/// Converts an angle in radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}
