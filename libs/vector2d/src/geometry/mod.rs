//! Planar geometry over [`Vector`] values.
//!
//! Every function here is pure: inputs are taken by value and a new result is
//! returned. Angles are in radians, counter-clockwise for positive values.
//!
//! The plain functions follow `f64` semantics and never fail. The `try_*`
//! variants reject zero-length, non-finite, or inverted-range inputs with a
//! [`VectorError`] instead of producing a silent zero vector or NaN.

use glam::DVec2;
use log::debug;

use crate::error::{VectorError, VectorResult};
use crate::vector::Vector;

// =============================================================================
// PRODUCTS
// =============================================================================

/// Dot product, `a.x * b.x + a.y * b.y`.
///
/// # Examples
/// ```
/// use vector2d::{geometry::dot, Vector};
/// assert_eq!(dot(Vector::new(2.0, 6.0), Vector::new(3.0, -5.0)), -24.0);
/// ```
pub fn dot(a: Vector, b: Vector) -> f64 {
    DVec2::from(a).dot(b.into())
}

/// 2D cross product, the signed area of the parallelogram spanned by `a`
/// and `b`. Positive when `b` is counter-clockwise from `a`.
///
/// # Examples
/// ```
/// use vector2d::{geometry::cross, Vector};
/// assert_eq!(cross(Vector::new(2.0, 6.0), Vector::new(3.0, -5.0)), -28.0);
/// ```
pub fn cross(a: Vector, b: Vector) -> f64 {
    DVec2::from(a).perp_dot(b.into())
}

// =============================================================================
// LENGTH AND DIRECTION
// =============================================================================

/// Scales `v` to unit length.
///
/// The zero vector has no direction and is returned unchanged instead of
/// dividing by zero. See [`try_normalize`] for a failing variant.
///
/// # Examples
/// ```
/// use vector2d::{geometry::normalize, Vector};
/// assert_eq!(normalize(Vector::new(0.0, 3.0)), Vector::UNIT_Y);
/// assert_eq!(normalize(Vector::ZERO), Vector::ZERO);
/// ```
pub fn normalize(v: Vector) -> Vector {
    if v == Vector::ZERO {
        return Vector::ZERO;
    }
    let length = v.length();
    if length.is_infinite() && v.is_finite() {
        // Components near f64::MAX: halve first so the length stays finite.
        let half = v * 0.5;
        return half / half.length();
    }
    v / length
}

/// Unsigned angle between `a` and `b`, in `[0, PI]`.
///
/// NaN when either input is the zero vector.
pub fn angle_between(a: Vector, b: Vector) -> f64 {
    if a == Vector::ZERO || b == Vector::ZERO {
        return f64::NAN;
    }
    dot(normalize(a), normalize(b)).acos()
}

/// Absolute angle of a single vector; same as [`Vector::angle`].
pub fn angle_of(v: Vector) -> f64 {
    v.angle()
}

/// Returns a vector with the direction of `v` and the given length.
///
/// The zero vector stays zero whatever `length` is.
pub fn set_length(v: Vector, length: f64) -> Vector {
    normalize(v) * length
}

/// Limits the length of `v` to the inclusive range `[min, max]`.
///
/// Vectors already in range are returned untouched. The result is
/// unspecified when `min > max`; [`try_clamp_length`] rejects that case.
///
/// # Examples
/// ```
/// use vector2d::{geometry::clamp_length, Vector};
/// assert_eq!(clamp_length(Vector::new(0.0, 6.0), 1.0, 5.0), Vector::new(0.0, 5.0));
/// assert_eq!(clamp_length(Vector::new(0.0, 4.0), 1.0, 5.0), Vector::new(0.0, 4.0));
/// ```
pub fn clamp_length(v: Vector, min: f64, max: f64) -> Vector {
    let length = v.length();
    if length < min {
        return set_length(v, min);
    }
    if length > max {
        return set_length(v, max);
    }
    v
}

// =============================================================================
// ROTATION
// =============================================================================

/// Rotates `v` counter-clockwise by `angle` radians.
pub fn rotate(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Points `v` along the absolute `angle`, keeping its length.
pub fn rotate_to(v: Vector, angle: f64) -> Vector {
    from_polar(v.length(), angle)
}

/// Exact 90° counter-clockwise turn.
pub fn turn_left(v: Vector) -> Vector {
    DVec2::from(v).perp().into()
}

/// Exact 90° clockwise turn.
pub fn turn_right(v: Vector) -> Vector {
    Vector::new(v.y, -v.x)
}

/// Builds a vector from polar coordinates.
///
/// # Examples
/// ```
/// use vector2d::{geometry::from_polar, Vector};
/// let v = from_polar(2.0, 0.0);
/// assert_eq!(v, Vector::new(2.0, 0.0));
/// ```
pub fn from_polar(length: f64, angle: f64) -> Vector {
    rotate(Vector::UNIT_X * length, angle)
}

// =============================================================================
// DISTANCE, INTERPOLATION, REFLECTION
// =============================================================================

/// Euclidean distance between two points.
pub fn distance(a: Vector, b: Vector) -> f64 {
    (a - b).length()
}

/// Squared distance between two points.
pub fn squared_distance(a: Vector, b: Vector) -> f64 {
    (a - b).squared_length()
}

/// Linear interpolation, `(1 - t) * a + t * b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use vector2d::{geometry::lerp, Vector};
/// let mid = lerp(Vector::new(1.0, 1.0), Vector::new(3.0, 3.0), 0.5);
/// assert_eq!(mid, Vector::new(2.0, 2.0));
/// ```
pub fn lerp(a: Vector, b: Vector, t: f64) -> Vector {
    (1.0 - t) * a + t * b
}

/// Mirrors `v` about the line through the origin with direction `normal`.
///
/// `normal` need not be unit length.
pub fn reflect(v: Vector, normal: Vector) -> Vector {
    let n = normalize(normal);
    2.0 * dot(v, n) * n - v
}

// =============================================================================
// CONTAINMENT
// =============================================================================

/// Strict containment test against an axis-aligned rectangle.
///
/// Y increases upward, so `top_left.y > bottom_right.y`. Points lying on an
/// edge are outside. Screen-style rectangles with Y pointing down must be
/// flipped by the caller.
///
/// # Examples
/// ```
/// use vector2d::{geometry::inside_rectangle, Vector};
/// let top_left = Vector::new(-1.0, 3.0);
/// let bottom_right = Vector::new(4.0, 0.0);
/// assert!(inside_rectangle(Vector::new(1.0, 2.0), top_left, bottom_right));
/// assert!(!inside_rectangle(Vector::new(4.0, 2.0), top_left, bottom_right));
/// ```
pub fn inside_rectangle(point: Vector, top_left: Vector, bottom_right: Vector) -> bool {
    let horizontal = top_left.x < point.x && point.x < bottom_right.x;
    let vertical = bottom_right.y < point.y && point.y < top_left.y;
    horizontal && vertical
}

// =============================================================================
// CHECKED VARIANTS
// =============================================================================

fn ensure_finite(v: Vector) -> VectorResult<Vector> {
    if !v.is_finite() {
        debug!("rejecting non-finite vector {v}");
        return Err(VectorError::NonFinite { x: v.x, y: v.y });
    }
    Ok(v)
}

/// Like [`normalize`], but fails on a zero-length or non-finite input.
///
/// # Examples
/// ```
/// use vector2d::{geometry::try_normalize, Vector, VectorError};
/// assert_eq!(try_normalize(Vector::new(4.0, 0.0)), Ok(Vector::UNIT_X));
/// assert_eq!(try_normalize(Vector::ZERO), Err(VectorError::ZeroLength));
/// ```
pub fn try_normalize(v: Vector) -> VectorResult<Vector> {
    let v = ensure_finite(v)?;
    if v == Vector::ZERO {
        debug!("cannot normalize the zero vector");
        return Err(VectorError::ZeroLength);
    }
    ensure_finite(normalize(v))
}

/// Like [`set_length`], but fails when `v` has no direction.
pub fn try_set_length(v: Vector, length: f64) -> VectorResult<Vector> {
    Ok(try_normalize(v)? * length)
}

/// Like [`angle_between`], but fails on zero-length inputs.
///
/// The dot product of the unit vectors is clamped to `[-1, 1]`, so nearly
/// parallel inputs give `0` or `PI` rather than NaN from rounding.
pub fn try_angle_between(a: Vector, b: Vector) -> VectorResult<f64> {
    let cos = dot(try_normalize(a)?, try_normalize(b)?);
    Ok(cos.clamp(-1.0, 1.0).acos())
}

/// Like [`clamp_length`], but validates its inputs.
///
/// Fails when `min > max` (or either bound is NaN), when `v` is not finite,
/// and when a zero vector would have to grow to a positive `min`.
pub fn try_clamp_length(v: Vector, min: f64, max: f64) -> VectorResult<Vector> {
    if min.is_nan() || max.is_nan() || min > max {
        debug!("rejecting length range [{min}, {max}]");
        return Err(VectorError::InvalidRange { min, max });
    }
    let v = ensure_finite(v)?;
    if v == Vector::ZERO && min > 0.0 {
        debug!("cannot grow the zero vector to length {min}");
        return Err(VectorError::ZeroLength);
    }
    Ok(clamp_length(v, min, max))
}
