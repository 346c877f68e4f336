//! Tests for the `Vector` value type and its operators.

use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_vector_creation() {
    let v = Vector::new(1.0, 2.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Vector::default(), Vector::ZERO);
}

#[test]
fn test_constants() {
    assert_eq!(Vector::ZERO, Vector::new(0.0, 0.0));
    assert_eq!(Vector::ONE, Vector::new(1.0, 1.0));
    assert_eq!(Vector::UNIT_X, Vector::new(1.0, 0.0));
    assert_eq!(Vector::UNIT_Y, Vector::new(0.0, 1.0));
}

#[test]
fn test_length() {
    assert_eq!(Vector::new(3.0, -4.0).length(), 5.0);
}

#[test]
fn test_length_does_not_underflow_or_overflow() {
    assert_eq!(Vector::new(1e-170, 0.0).length(), 1e-170);
    assert_eq!(Vector::new(0.0, -1e200).length(), 1e200);
    assert_relative_eq!(
        Vector::new(1e200, 1e200).length(),
        1e200 * std::f64::consts::SQRT_2,
        max_relative = 1e-15
    );
}

#[test]
fn test_squared_length() {
    assert_eq!(Vector::new(-3.0, -4.0).squared_length(), 25.0);
}

#[test]
fn test_angle() {
    assert_abs_diff_eq!(Vector::new(1.0, 1.0).angle(), std::f64::consts::FRAC_PI_4);
    assert_eq!(Vector::new(-1.0, 0.0).angle(), std::f64::consts::PI);
}

#[test]
fn test_equality() {
    let v1 = Vector::new(10.0, 10.0);
    let v2 = Vector::new(10.0, 10.0);
    let v3 = Vector::new(10.0, 5.0);
    assert_eq!(v1, v2);
    assert_ne!(v3, v2);
    assert_ne!(v1, v3);
    assert_eq!(v3, v3);
}

#[test]
fn test_equality_is_exact() {
    let v = Vector::new(0.1 + 0.2, 0.0);
    assert_ne!(v, Vector::new(0.3, 0.0));
    assert!(v.approx_eq(Vector::new(0.3, 0.0)));
}

#[test]
fn test_never_equal_to_absent() {
    let present = Some(Vector::ZERO);
    assert_ne!(present, None);
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    let v = Vector::new(f64::NAN, 0.0);
    assert_ne!(v, v);
    assert!(!v.is_finite());
}

#[test]
fn test_addition() {
    let v = Vector::new(10.0, 10.0) + Vector::new(5.0, -5.0);
    assert_eq!(v, Vector::new(15.0, 5.0));
}

#[test]
fn test_subtraction() {
    let v = Vector::new(10.0, 10.0) - Vector::new(5.0, -5.0);
    assert_eq!(v, Vector::new(5.0, 15.0));
}

#[test]
fn test_component_multiplication() {
    let v = Vector::new(2.0, 6.0) * Vector::new(3.0, -5.0);
    assert_eq!(v, Vector::new(6.0, -30.0));
}

#[test]
fn test_scalar_multiplication_commutes() {
    let v = Vector::new(2.0, 6.0);
    assert_eq!(v * 10.0, Vector::new(20.0, 60.0));
    assert_eq!(10.0 * v, Vector::new(20.0, 60.0));

    for s in [-3.5, 0.0, 1e-7, 42.0] {
        for v in [Vector::new(0.3, -7.1), Vector::new(1e9, 2.5)] {
            assert_eq!(v * s, s * v);
        }
    }
}

#[test]
fn test_component_division() {
    let v = Vector::new(30.0, 25.0) / Vector::new(3.0, -5.0);
    assert_eq!(v, Vector::new(10.0, -5.0));
}

#[test]
fn test_scalar_division() {
    let v = Vector::new(200.0, 600.0) / 10.0;
    assert_eq!(v, Vector::new(20.0, 60.0));
}

#[test]
fn test_division_by_zero_propagates() {
    let v = Vector::new(1.0, -1.0) / 0.0;
    assert_eq!(v.x, f64::INFINITY);
    assert_eq!(v.y, f64::NEG_INFINITY);

    let v = Vector::ZERO / Vector::ZERO;
    assert!(v.x.is_nan() && v.y.is_nan());
}

#[test]
fn test_negation() {
    assert_eq!(-Vector::new(200.0, 600.0), Vector::new(-200.0, -600.0));
}

#[test]
fn test_additive_inverse() {
    for v in [Vector::new(3.0, -4.0), Vector::new(1e-3, 7e5), Vector::ONE] {
        assert_eq!(v + (-v), Vector::ZERO);
    }
}

#[test]
fn test_display() {
    assert_eq!(Vector::new(10.0, 5.0).to_string(), "(10, 5)");
    assert_eq!(Vector::new(-0.5, 2.25).to_string(), "(-0.5, 2.25)");
}

#[test]
fn test_abs_diff_eq() {
    let a = Vector::new(1.0, 1.0);
    assert!(a.abs_diff_eq(Vector::new(1.05, 0.95), 0.1));
    assert!(!a.abs_diff_eq(Vector::new(1.2, 1.0), 0.1));
}

#[test]
fn test_glam_conversion() {
    let v = Vector::new(1.5, -2.0);
    let g: DVec2 = v.into();
    assert_eq!(g, DVec2::new(1.5, -2.0));
    assert_eq!(Vector::from(g), v);
}

#[test]
fn test_tuple_and_array_conversion() {
    assert_eq!(Vector::from((1.0, 2.0)), Vector::new(1.0, 2.0));
    assert_eq!(Vector::from([3.0, 4.0]), Vector::new(3.0, 4.0));
    let t: (f64, f64) = Vector::new(5.0, 6.0).into();
    assert_eq!(t, (5.0, 6.0));
    let a: [f64; 2] = Vector::new(7.0, 8.0).into();
    assert_eq!(a, [7.0, 8.0]);
}

#[test]
fn test_vector_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Vector>();
}
