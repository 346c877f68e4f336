//! Immutable 2D vectors and planar geometry for simulation and graphics code.
//!
//! [`Vector`] is a `Copy` value: every operation hands back a new vector and
//! nothing is mutated in place. The [`geometry`] module holds the derived
//! operations (dot/cross products, normalization, rotation, reflection,
//! interpolation, clamping, polar construction and rectangle containment).
//!
//! Invalid arithmetic is never trapped. Division by zero and similar cases
//! surface as IEEE-754 infinities or NaN components, exactly as `f64` does.
//! Callers that prefer an explicit failure use the `try_*` functions, which
//! return [`VectorResult`].
//!
//! ```
//! use vector2d::{geometry, Vector};
//!
//! let v = Vector::new(10.0, 10.0) + Vector::new(5.0, -5.0);
//! assert_eq!(v, Vector::new(15.0, 5.0));
//! assert_eq!(geometry::dot(Vector::new(2.0, 6.0), Vector::new(3.0, -5.0)), -24.0);
//! ```

pub mod angle;
pub mod error;
pub mod geometry;
pub mod vector;

pub use angle::{to_degrees, to_radians};
pub use error::{VectorError, VectorResult};
pub use vector::Vector;
