//! # Config Crate
//!
//! Centralized constants for the 2D vector library. Tolerances used by the
//! approximate comparison helpers and the angle conversion factor are defined
//! here so that no crate in the workspace scatters its own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEGREES_PER_RADIAN};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let right_angle = std::f64::consts::FRAC_PI_2 * DEGREES_PER_RADIAN;
//! assert!((right_angle - 90.0).abs() < EPSILON);
//! ```

pub mod constants;

pub use constants::{ConfigError, ToleranceConfig};
