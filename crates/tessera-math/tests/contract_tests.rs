// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broken preconditions halt debug builds through the contract handler.
#![allow(missing_docs)]
#![cfg(debug_assertions)]

use tessera_math::contract::{self, ViolationBehavior};
use tessera_math::{MathContext, Matrix4, Quaternion, Vector2, Vector4};

#[test]
fn debug_builds_halt_on_violation() {
    assert!(contract::CHECKS_ENABLED);
    assert_eq!(contract::behavior(), ViolationBehavior::Halt);
}

#[test]
#[should_panic(expected = "normalize3 of a zero-length vector")]
fn normalize3_of_zero_vector() {
    let mut v = Vector4::direction(0.0, 0.0, 0.0);
    v.normalize3();
}

#[test]
#[should_panic(expected = "zero-length")]
fn normalize_vector2_of_zero() {
    let _ = Vector2::ZERO.normalized();
}

#[test]
#[should_panic(expected = "inverse of a singular matrix")]
fn inverse_of_singular_matrix() {
    let _ = Matrix4::scale(1.0, 1.0, 0.0).inverse();
}

#[test]
#[should_panic(expected = "unit_inverse of a non-unit quaternion")]
fn unit_inverse_requires_unit_length() {
    let _ = Quaternion::new(1.0, 1.0, 0.0, 0.0).unit_inverse();
}

#[test]
#[should_panic(expected = "inverse of a zero quaternion")]
fn inverse_of_zero_quaternion() {
    let _ = Quaternion::ZERO.inverse();
}

#[test]
#[should_panic(expected = "lane index 4 out of range")]
fn vector_index_out_of_range() {
    let v = Vector4::ONE;
    let _ = v[4];
}

#[test]
#[should_panic(expected = "lane index 2 out of range")]
fn vector2_index_out_of_range() {
    let v = Vector2::ONE;
    let _ = v[2];
}

#[test]
#[should_panic(expected = "lane index 7 out of range")]
fn matrix_row_out_of_range() {
    let _ = Matrix4::IDENTITY.row(7);
}

#[test]
#[should_panic(expected = "by zero")]
fn vector_divided_by_zero_scalar() {
    let _ = Vector4::ONE / 0.0;
}

#[test]
#[should_panic(expected = "trig table lookup requested before setup_trig_tables")]
fn table_lookup_without_tables() {
    let ctx = MathContext::new();
    let _ = ctx.sin(1.0, true);
}

#[test]
fn violations_only_fire_on_broken_preconditions() {
    let mut v = Vector4::direction(1e-12, 0.0, 0.0);
    v.normalize3();
    assert!(v.is_ok());
    let _ = Quaternion::from_rotation_x(1.0).unit_inverse();
    let _ = Vector4::ONE / Vector4::new(1.0, 1.0, 1.0, 0.0);
}
