// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tessera-math: vector, matrix, and quaternion algebra over two lane backends.
//!
//! Every value type is written once against [`lanes::Lanes`] and instantiated
//! for either the SSE backend (`x86_64` with the `simd` feature) or the
//! portable scalar backend. Both produce the same results; the crate-root
//! aliases bind the backend chosen for this build.
//!
//! ```
//! use tessera_math::{Matrix4, Quaternion, Vector4};
//!
//! let q = Quaternion::from_rotation_y(core::f32::consts::FRAC_PI_2);
//! let v = q * Vector4::UNIT_X;
//! assert!((v.z() + 1.0).abs() < 1e-6);
//!
//! let m = Matrix4::from_quaternion(&q);
//! assert!((m.transform(&Vector4::UNIT_X) - v).length3().value() < 1e-6);
//! ```
//!
//! Broken preconditions (normalizing a zero vector, inverting a singular
//! matrix) are reported through [`contract`]; recoverable edge errors use
//! [`MathError`].
#![deny(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

pub mod contract;
mod error;
pub mod interchange;
mod lane_float;
pub mod lanes;
mod mask;
mod matrix4;
mod quaternion;
pub mod scalar;
mod trig;
mod vector2;
mod vector4;

pub use error::MathError;
pub use interchange::Aligned4;
pub use mask::Mask;
pub use matrix4::DETERMINANT_EPSILON;
pub use quaternion::{SLERP_NLERP_THRESHOLD, UNIT_TOLERANCE};
pub use trig::{MathContext, DEFAULT_TRIG_TABLE_SIZE};
pub use vector2::{Cross, Vector2};
pub use vector4::SLERP_EPSILON;

/// Backend-generic forms of the value types.
///
/// Use these to pin a backend explicitly, e.g. `generic::Vector4<Portable>`.
pub mod generic {
    pub use crate::lane_float::LaneFloat;
    pub use crate::mask::CompMask;
    pub use crate::matrix4::Matrix4;
    pub use crate::quaternion::Quaternion;
    pub use crate::vector4::Vector4;
}

use lanes::Native;

/// Scalar in lane storage on the native backend.
pub type LaneFloat = generic::LaneFloat<Native>;
/// Comparison mask on the native backend.
pub type CompMask = generic::CompMask<Native>;
/// Four-lane vector on the native backend.
pub type Vector4 = generic::Vector4<Native>;
/// Column-major 4×4 matrix on the native backend.
pub type Matrix4 = generic::Matrix4<Native>;
/// Rotation quaternion on the native backend.
pub type Quaternion = generic::Quaternion<Native>;
