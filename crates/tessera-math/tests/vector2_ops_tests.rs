// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use tessera_math::{Cross, Mask, MathError, Vector2};

#[test]
fn arithmetic() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, -4.0);
    assert_eq!(a + b, Vector2::new(4.0, -2.0));
    assert_eq!(a - b, Vector2::new(-2.0, 6.0));
    assert_eq!(a * b, Vector2::new(3.0, -8.0));
    assert_eq!(a * 2.0, 2.0 * a);
    assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));

    let mut c = a;
    c += b;
    c -= b;
    c *= 4.0;
    c /= Vector2::new(2.0, 4.0);
    assert_eq!(c, Vector2::new(2.0, 2.0));
}

#[test]
fn dot_cross_and_perpendiculars() {
    let a = Vector2::UNIT_X;
    let b = Vector2::UNIT_Y;
    assert_eq!(a.dot(&b), 0.0);
    assert_eq!(a.cross(b), 1.0);
    assert_eq!(b.cross(a), -1.0);
    assert_eq!(Vector2::new(1.0, 2.0).cross(3.0), Vector2::new(6.0, -3.0));
    assert_eq!(Vector2::right_perp(&a), Vector2::NEG_UNIT_Y);
    assert_eq!(Vector2::left_perp(&a), Vector2::UNIT_Y);
}

#[test]
fn length_and_normalize() {
    let mut v = Vector2::new(3.0, 4.0);
    assert_eq!(v.length_squared(), 25.0);
    assert_eq!(v.normalize_with_length(), 5.0);
    assert!(v.equals_within(&Vector2::new(0.6, 0.8), 1e-6));
    assert_eq!(Vector2::distance(&Vector2::ZERO, &Vector2::new(0.0, -2.0)), 2.0);
    assert_eq!(Vector2::distance_squared(&Vector2::ONE, &Vector2::NEG_ONE), 8.0);
}

#[test]
fn comparisons_only_touch_x_and_y() {
    let a = Vector2::new(1.0, 5.0);
    let b = Vector2::new(2.0, 2.0);
    assert_eq!(a.comp_less(&b).get_mask(), Mask::X);
    assert_eq!(a.comp_greater(&b).get_mask(), Mask::Y);
    assert_eq!(a.comp_not_equal(&b).get_mask(), Mask::XY);
    assert_eq!(a.comp_equal(&a).get_mask(), Mask::XY);
    assert!(!a.comp_equal(&a).any_is_set(Mask::Z | Mask::W));
    assert_eq!(b.comp_less_equal(&b).get_mask(), Mask::XY);
    assert_eq!(a.comp_greater_equal(&b).get_mask(), Mask::Y);
}

#[test]
fn min_max_and_zero() {
    let a = Vector2::new(-1.0, 4.0);
    let b = Vector2::new(2.0, -3.0);
    assert_eq!(a.min(&b), Vector2::new(-1.0, -3.0));
    assert_eq!(a.max(&b), Vector2::new(2.0, 4.0));

    let mut v = a;
    v.set_zero();
    assert!(v.is_zero());
    assert!(Vector2::new(1e-7, -1e-7).is_zero_within(1e-6));
    v.set_all(3.0);
    assert_eq!(v, Vector2::new(3.0, 3.0));
}

#[test]
fn interpolation_and_reflection() {
    let a = Vector2::ZERO;
    let b = Vector2::new(4.0, -8.0);
    assert_eq!(Vector2::lerp(&a, &b, 0.25), Vector2::new(1.0, -2.0));
    assert_eq!(Vector2::smooth_step(&a, &b, 1.0), b);
    assert_eq!(Vector2::smooth_step(&a, &b, -1.0), a);
    let r = Vector2::reflect(&Vector2::new(1.0, -1.0), &Vector2::UNIT_Y);
    assert_eq!(r, Vector2::new(1.0, 1.0));
}

#[test]
fn interchange() {
    let v = Vector2::from_slice(&[7.0, 8.0]).expect("two floats");
    assert_eq!(v.to_array(), [7.0, 8.0]);
    assert_eq!(
        Vector2::from_slice(&[1.0]),
        Err(MathError::SliceLength { expected: 2, actual: 1 })
    );
    let mut out = [0.0; 2];
    v.store(&mut out);
    let mut w = Vector2::default();
    w.load(&out);
    assert_eq!(w, v);
    assert_eq!(w[1], 8.0);
    assert!(w.is_ok());
    assert!(!Vector2::new(f32::NAN, 0.0).is_ok());
}
