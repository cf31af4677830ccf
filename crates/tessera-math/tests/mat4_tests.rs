// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{approx_mat, approx_same_rotation, approx_vec, approx_within};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3};
use proptest::prelude::*;
use tessera_dry_tests::{random_matrices, random_unit_quaternions, Prng};
use tessera_math::{Aligned4, LaneFloat, Matrix4, Quaternion, Vector2, Vector4};

fn sample() -> Matrix4 {
    Matrix4::from_row_major(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ])
}

#[test]
fn layout_is_column_major() {
    let m = sample();
    assert_eq!(m.get(0, 3), 4.0);
    assert_eq!(m[(3, 0)], 13.0);
    assert_eq!(m.column(1).to_array(), [2.0, 6.0, 10.0, 14.0]);
    assert_eq!(m.row(2).to_array(), [9.0, 10.0, 11.0, 12.0]);
    assert_eq!(m.get_elem::<1, 2>(), 7.0);
    assert_eq!(
        m.to_col_major(),
        [1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0]
    );

    let mut rm = [0.0; 16];
    m.store_row_major(&mut rm);
    assert_eq!(rm[..4], [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Matrix4::from_row_major(&rm), m);
}

#[test]
fn rows_and_columns_are_writable() {
    let mut m = Matrix4::ZERO;
    m.set_row(1, &Vector4::new(1.0, 2.0, 3.0, 4.0));
    m.set_column(3, &Vector4::splat(9.0));
    m.set(0, 0, -1.0);
    m.set_elem::<2, 2>(LaneFloat::new(5.0));
    m[(3, 1)] = 7.0;
    assert_eq!(m.row(1).to_array(), [1.0, 2.0, 3.0, 9.0]);
    assert_eq!(m.row(0).to_array(), [-1.0, 0.0, 0.0, 9.0]);
    assert_eq!(m.row(2).to_array(), [0.0, 0.0, 5.0, 9.0]);
    assert_eq!(m.row(3).to_array(), [0.0, 7.0, 0.0, 9.0]);

    let rows = Matrix4::from_rows(&m.row(0), &m.row(1), &m.row(2), &m.row(3));
    assert_eq!(rows, m);
    m.column_mut(0).set_zero4();
    assert!(m.column(0).is_zero4());
}

#[test]
fn constants_and_predicates() {
    assert!(Matrix4::IDENTITY.is_identity());
    assert!(Matrix4::ZERO.is_zero());
    assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
    assert_eq!(-Matrix4::IDENTITY, Matrix4::NEG_IDENTITY);
    assert!(Matrix4::translation(1.0, 2.0, 3.0).is_affine());
    assert!(!sample().is_affine());

    let mut m = Matrix4::IDENTITY;
    m[(3, 3)] = 1.0 + 1e-7;
    assert!(!m.is_affine());
    assert!(m.is_affine_within(1e-6));

    let mut d = Matrix4::ZERO;
    d.set_diagonal(&Vector4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(d.determinant(), 24.0);
    d.set_identity();
    assert!(d.is_identity());
    d.set_all(LaneFloat::new(2.0));
    assert_eq!(d.to_col_major(), [2.0; 16]);
    d.set_zero();
    assert!(d.is_zero());
}

#[test]
fn translation_moves_points_not_directions() {
    let t = Matrix4::translation(10.0, 0.0, 0.0);
    let p = t.transform(&Vector4::new(20.0, 5.0, 0.0, 1.0));
    assert_eq!(p.to_array(), [30.0, 5.0, 0.0, 1.0]);
    let d = t.transform_direction(&Vector4::new(20.0, 5.0, 0.0, 1.0));
    assert_eq!(d.to_array(), [20.0, 5.0, 0.0, 0.0]);
    let q = t.transform_position(&Vector4::direction(1.0, 1.0, 1.0));
    assert_eq!(q.to_array(), [11.0, 1.0, 1.0, 1.0]);
    assert_eq!(t * Vector4::ZERO_PT, Vector4::point(10.0, 0.0, 0.0));
}

#[test]
fn axis_rotations() {
    let v = Matrix4::rotation_y(FRAC_PI_2).transform(&Vector4::UNIT_X);
    approx_vec(&v, [0.0, 0.0, -1.0, 0.0]);
    let v = Matrix4::rotation_z(FRAC_PI_2).transform(&Vector4::UNIT_X);
    approx_vec(&v, [0.0, 1.0, 0.0, 0.0]);
    let v = Matrix4::rotation_x(FRAC_PI_2).transform(&Vector4::UNIT_Y);
    approx_vec(&v, [0.0, 0.0, 1.0, 0.0]);

    let aa = Matrix4::rotation_axis_angle(&Vector4::UNIT_Y, FRAC_PI_3);
    approx_mat(&aa, &Matrix4::rotation_y(FRAC_PI_3));

    let mut m = Matrix4::ZERO;
    m.make_rotation_z(FRAC_PI_3);
    approx_mat(&m, &Matrix4::rotation_z(FRAC_PI_3));
    m.make_translation_xyz(1.0, 2.0, 3.0);
    assert_eq!(m, Matrix4::translation_v(&Vector4::direction(1.0, 2.0, 3.0)));
    m.make_scale(&Vector4::direction(2.0, 2.0, 2.0));
    assert_eq!(m, Matrix4::scale(2.0, 2.0, 2.0));
}

#[test]
fn product_composes_right_to_left() {
    let s = Matrix4::scale(2.0, 3.0, 4.0);
    let t = Matrix4::translation(1.0, 1.0, 1.0);
    let p = Vector4::point(1.0, 1.0, 1.0);
    assert_eq!((t * s).transform(&p).to_array(), [3.0, 4.0, 5.0, 1.0]);
    assert_eq!((s * t).transform(&p).to_array(), [4.0, 6.0, 8.0, 1.0]);
    assert_eq!(sample() * Matrix4::IDENTITY, sample());

    let mut acc = Matrix4::IDENTITY;
    acc *= t;
    acc *= s;
    assert_eq!(acc, t * s);
}

#[test]
fn elementwise_ops() {
    let m = sample();
    assert_eq!(m + m, m * 2.0);
    assert_eq!(2.0 * m, m * LaneFloat::new(2.0));
    assert!((m - m).is_zero());
    let mut n = m;
    n += m;
    n -= m;
    n *= LaneFloat::new(1.0);
    assert_eq!(n, m);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = sample();
    let t = m.transposed();
    assert_eq!(t.row(0), *m.column(0));
    let mut u = m;
    u.transpose();
    u.transpose();
    assert_eq!(u, m);
}

#[test]
fn inverse_round_trips_fixtures() {
    let mut prng = Prng::from_seed_u64(11);
    for m in random_matrices::<tessera_math::lanes::Native>(&mut prng, 32) {
        let inv = m.inverse();
        assert!((m * inv).equals_within(&Matrix4::IDENTITY, 1e-3), "{m:?}");
        assert!((inv * m).equals_within(&Matrix4::IDENTITY, 1e-3), "{m:?}");
        let det = m.determinant() * inv.determinant();
        assert!((det - 1.0).abs() < 1e-4, "det product {det}");
    }
}

#[test]
fn singular_matrix_has_no_inverse() {
    assert!(Matrix4::ZERO.try_inverse().is_none());
    assert!(sample().try_inverse().is_none());
    assert!(Matrix4::scale(1.0, 0.0, 1.0).try_inverse().is_none());
    let mut m = Matrix4::scale(2.0, 4.0, 8.0);
    m.invert();
    assert_eq!(m, Matrix4::scale(0.5, 0.25, 0.125));
}

#[test]
fn quaternion_conversion_round_trips_up_to_sign() {
    let mut prng = Prng::from_seed_u64(5);
    for q in random_unit_quaternions::<tessera_math::lanes::Native>(&mut prng, 64) {
        let m = Matrix4::from_quaternion(&q);
        approx_same_rotation(&m.to_quaternion(), &q, 1e-4);

        let v = Vector4::direction(1.0, -2.0, 0.5);
        approx_within(&m.transform(&v).to_array(), &q.rotate(&v).to_array(), 1e-5);
    }
    let mut m = Matrix4::ZERO;
    m.set_from_quaternion(&Quaternion::IDENTITY);
    assert!(m.is_identity());
}

#[test]
fn transforms_on_vector2() {
    let m = Matrix4::translation(5.0, -5.0, 9.0) * Matrix4::scale(2.0, 2.0, 2.0);
    let v = Vector2::new(1.0, 2.0);
    assert_eq!(m.transform_position2(&v), Vector2::new(7.0, -1.0));
    assert_eq!(m.transform2(&v), m.transform_position2(&v));
    assert_eq!(m.transform_direction2(&v), Vector2::new(2.0, 4.0));
}

#[test]
fn aligned_interchange() {
    let m = sample();
    let mut quads = [Aligned4::default(); 4];
    m.store_row_major_aligned(&mut quads);
    assert_eq!(quads[0].0, [1.0, 2.0, 3.0, 4.0]);
    let mut back = Matrix4::ZERO;
    back.load_row_major_aligned(&quads);
    assert_eq!(back, m);

    m.store_col_major_aligned(&mut quads);
    assert_eq!(quads[0].0, [1.0, 5.0, 9.0, 13.0]);
    back.load_col_major_aligned(&quads);
    assert_eq!(back, m);
}

fn quad() -> impl Strategy<Value = [f32; 4]> {
    prop::array::uniform4(-1.0e3_f32..1.0e3)
}

fn matrix() -> impl Strategy<Value = [f32; 16]> {
    prop::array::uniform16(-1.0e3_f32..1.0e3)
}

proptest! {
    #[test]
    fn matrix_addition_is_commutative(a in matrix(), b in matrix()) {
        let (a, b) = (Matrix4::from_col_major(&a), Matrix4::from_col_major(&b));
        prop_assert_eq!((a + b).to_col_major(), (b + a).to_col_major());
    }

    #[test]
    fn identity_leaves_any_vector_unchanged(v in quad()) {
        let v = Vector4::from_array(v);
        prop_assert_eq!(Matrix4::IDENTITY * v, v);
        prop_assert_eq!(Matrix4::IDENTITY.transform(&v), v);
    }

    #[test]
    fn identity_is_a_two_sided_unit(m in matrix()) {
        let m = Matrix4::from_col_major(&m);
        prop_assert_eq!(Matrix4::IDENTITY * m, m);
        prop_assert_eq!(m * Matrix4::IDENTITY, m);
    }
}
