//! Tests for the centralized configuration constants.

use super::*;

#[test]
fn test_epsilon_is_small_and_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_degrees_per_radian() {
    assert!((DEGREES_PER_RADIAN - 57.295_779_513_082_32).abs() < 1e-12);
}

/// Ensures the default configuration uses the shared epsilon.
#[test]
fn default_config_uses_epsilon() {
    let cfg = ToleranceConfig::default();
    assert_eq!(cfg.tolerance, EPSILON);
}

#[test]
fn new_accepts_positive_tolerance() {
    let cfg = ToleranceConfig::new(0.5).unwrap();
    assert_eq!(cfg.tolerance, 0.5);
}

/// Validates the constructor rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ToleranceConfig::new(0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        ToleranceConfig::new(-1.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
    assert!(ToleranceConfig::new(f64::INFINITY).is_err());
    assert!(ToleranceConfig::new(f64::NAN).is_err());
}

#[test]
fn test_error_display() {
    let err = ConfigError::InvalidTolerance(-2.0);
    assert!(err.to_string().contains("tolerance"));
    assert!(err.to_string().contains("-2"));
}
