// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for Tessera tests and benches.
//!
//! # Modules
//!
//! - [`prng`] - Seeded `xoroshiro128+` generator
//! - [`fixtures`] - Random vectors, points, matrices, quaternions, and boxes
#![forbid(unsafe_code)]

pub mod fixtures;
pub mod prng;

pub use fixtures::{
    random_aabb, random_affine, random_matrices, random_points, random_unit_quaternion,
    random_unit_quaternions, random_vectors, COMPONENT_RANGE,
};
pub use prng::{Prng, DEFAULT_SEED};
