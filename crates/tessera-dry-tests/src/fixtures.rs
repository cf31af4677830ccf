// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Reproducible batches of math values.
//!
//! Each generator is generic over the lane backend so the same seed yields the
//! same logical inputs for `Portable` and `Sse` instantiations.

use tessera_math::generic::{Matrix4, Quaternion, Vector4};
use tessera_math::lanes::Lanes;

use crate::prng::Prng;

/// Range used by the generators for vector lanes and translations.
pub const COMPONENT_RANGE: f32 = 100.0;

/// `count` vectors with every lane in `[-range, range)`.
pub fn random_vectors<B: Lanes>(prng: &mut Prng, count: usize, range: f32) -> Vec<Vector4<B>> {
    (0..count)
        .map(|_| {
            Vector4::new(
                prng.next_f32_in(-range, range),
                prng.next_f32_in(-range, range),
                prng.next_f32_in(-range, range),
                prng.next_f32_in(-range, range),
            )
        })
        .collect()
}

/// `count` points (`w = 1`) with xyz in `[-range, range)`.
pub fn random_points<B: Lanes>(prng: &mut Prng, count: usize, range: f32) -> Vec<Vector4<B>> {
    (0..count)
        .map(|_| {
            Vector4::point(
                prng.next_f32_in(-range, range),
                prng.next_f32_in(-range, range),
                prng.next_f32_in(-range, range),
            )
        })
        .collect()
}

/// One unit quaternion, drawn by rejection from the 4-ball.
pub fn random_unit_quaternion<B: Lanes>(prng: &mut Prng) -> Quaternion<B> {
    loop {
        let v = [
            prng.next_f32_in(-1.0, 1.0),
            prng.next_f32_in(-1.0, 1.0),
            prng.next_f32_in(-1.0, 1.0),
            prng.next_f32_in(-1.0, 1.0),
        ];
        let len_sq: f32 = v.iter().map(|c| c * c).sum();
        if (0.01..=1.0).contains(&len_sq) {
            return Quaternion::from_vector(Vector4::from_array(v)).normalized();
        }
    }
}

/// `count` unit quaternions.
pub fn random_unit_quaternions<B: Lanes>(prng: &mut Prng, count: usize) -> Vec<Quaternion<B>> {
    (0..count).map(|_| random_unit_quaternion(prng)).collect()
}

/// One rigid-plus-scale affine matrix: `T * R * S`, scale in `[0.5, 2)`.
///
/// These stay well conditioned, so inverting them is safe.
pub fn random_affine<B: Lanes>(prng: &mut Prng) -> Matrix4<B> {
    let q = random_unit_quaternion(prng);
    let t = Matrix4::translation(
        prng.next_f32_in(-COMPONENT_RANGE, COMPONENT_RANGE),
        prng.next_f32_in(-COMPONENT_RANGE, COMPONENT_RANGE),
        prng.next_f32_in(-COMPONENT_RANGE, COMPONENT_RANGE),
    );
    let s = Matrix4::scale(
        prng.next_f32_in(0.5, 2.0),
        prng.next_f32_in(0.5, 2.0),
        prng.next_f32_in(0.5, 2.0),
    );
    t * Matrix4::from_quaternion(&q) * s
}

/// `count` matrices from [`random_affine`].
pub fn random_matrices<B: Lanes>(prng: &mut Prng, count: usize) -> Vec<Matrix4<B>> {
    (0..count).map(|_| random_affine(prng)).collect()
}

/// Axis-aligned box as `(min, max)` corners with `w = 0`.
pub fn random_aabb<B: Lanes>(prng: &mut Prng, range: f32) -> (Vector4<B>, Vector4<B>) {
    let centre = random_vectors::<B>(prng, 1, range)[0];
    let half = Vector4::direction(
        prng.next_f32_in(0.1, range * 0.25),
        prng.next_f32_in(0.1, range * 0.25),
        prng.next_f32_in(0.1, range * 0.25),
    );
    let mut min = centre - half;
    let mut max = centre + half;
    min[3] = 0.0;
    max[3] = 0.0;
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_math::lanes::Portable;

    #[test]
    fn generators_are_reproducible() {
        let a = random_vectors::<Portable>(&mut Prng::from_seed_u64(3), 8, 10.0);
        let b = random_vectors::<Portable>(&mut Prng::from_seed_u64(3), 8, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn quaternions_are_unit() {
        for q in random_unit_quaternions::<Portable>(&mut Prng::default(), 64) {
            assert!((q.length().value() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn affine_fixtures_are_invertible() {
        for m in random_matrices::<Portable>(&mut Prng::default(), 16) {
            assert!(m.is_affine_within(1e-6));
            assert!(m.try_inverse().is_some());
        }
    }
}
