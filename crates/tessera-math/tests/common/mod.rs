// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use tessera_math::generic::{Matrix4, Quaternion, Vector4};
use tessera_math::lanes::Lanes;

pub const ABS_TOL: f32 = 1e-6;
pub const REL_TOL: f32 = 1e-5;

/// Asserts each lane of `a` and `b` agrees to `max(ABS_TOL, REL_TOL * scale)`.
#[track_caller]
pub fn approx_eq_slice(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for (i, (&ai, &bi)) in a.iter().zip(b).enumerate() {
        let diff = (ai - bi).abs();
        let scale = ai.abs().max(bi.abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

/// Like [`approx_eq_slice`] with an explicit absolute tolerance.
#[track_caller]
pub fn approx_within(a: &[f32], b: &[f32], tol: f32) {
    assert_eq!(a.len(), b.len());
    for (i, (&ai, &bi)) in a.iter().zip(b).enumerate() {
        assert!((ai - bi).abs() <= tol, "index {i}: {a:?} vs {b:?}, tol={tol}");
    }
}

#[track_caller]
pub fn approx_vec<B: Lanes>(a: &Vector4<B>, b: [f32; 4]) {
    approx_eq_slice(&a.to_array(), &b);
}

#[track_caller]
pub fn approx_mat<B: Lanes>(a: &Matrix4<B>, b: &Matrix4<B>) {
    approx_eq_slice(&a.to_col_major(), &b.to_col_major());
}

/// Quaternions `q` and `-q` encode the same rotation.
#[track_caller]
pub fn approx_same_rotation<B: Lanes>(a: &Quaternion<B>, b: &Quaternion<B>, tol: f32) {
    let dot = a.dot(b).value().abs();
    assert!(
        (dot - 1.0).abs() <= tol,
        "{a:?} and {b:?} differ as rotations (|dot| = {dot})"
    );
}
