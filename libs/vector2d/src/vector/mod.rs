//! The immutable 2D vector value type.
//!
//! `Vector` is `Copy`, so passing it around never shares state. All
//! arithmetic is componentwise and follows plain `f64` semantics: dividing by
//! zero yields infinities or NaN rather than an error.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use config::ToleranceConfig;
use glam::DVec2;

/// A 2D vector with `f64` components.
///
/// Equality is exact: two vectors are equal only when both components
/// compare equal with `==`. Use [`Vector::abs_diff_eq`] for tolerant
/// comparisons.
///
/// No method or operator changes a vector in place; each returns a new one.
/// Arithmetic is carried out on `glam::DVec2`.
///
/// # Examples
/// ```
/// use vector2d::Vector;
///
/// let v = Vector::new(3.0, -4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.to_string(), "(3, -4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The vector `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    ///
    /// Computed with `hypot`, so very small or very large finite components
    /// do not underflow to zero or overflow to infinity.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length. Cheaper than [`Vector::length`] when only comparing.
    pub fn squared_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Absolute angle in radians, `atan2(y, x)`, in the range (-PI, PI].
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector;
    /// assert_eq!(Vector::UNIT_Y.angle(), std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns `true` when neither component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compares componentwise, allowing an absolute difference of `tolerance`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector;
    /// let a = Vector::new(1.0, 2.0);
    /// let b = Vector::new(1.0 + 1e-12, 2.0);
    /// assert_ne!(a, b);
    /// assert!(a.abs_diff_eq(b, 1e-9));
    /// ```
    pub fn abs_diff_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// [`Vector::abs_diff_eq`] with the workspace default tolerance.
    pub fn approx_eq(self, other: Self) -> bool {
        self.abs_diff_eq(other, ToleranceConfig::default().tolerance)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

/// Componentwise product.
impl Mul for Vector {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        (DVec2::from(self) * DVec2::from(rhs)).into()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        (DVec2::from(self) * rhs).into()
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

/// Componentwise quotient.
impl Div for Vector {
    type Output = Vector;

    fn div(self, rhs: Vector) -> Vector {
        (DVec2::from(self) / DVec2::from(rhs)).into()
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        (DVec2::from(self) / rhs).into()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        (-DVec2::from(self)).into()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests;
