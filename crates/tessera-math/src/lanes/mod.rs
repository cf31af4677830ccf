// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Lane backends for Tessera math.
//!
//! Every public value type ([`crate::LaneFloat`], [`crate::CompMask`],
//! [`crate::Vector4`], [`crate::Matrix4`], [`crate::Quaternion`]) is written
//! once, generically over [`Lanes`]. Only this layer knows how four floats are
//! physically held and combined:
//!
//! - [`Portable`]: plain `f32` arithmetic over a 16-byte aligned `[f32; 4]`.
//! - `Sse` (`x86_64` with the `simd` feature): one `__m128` register.
//!
//! [`Native`] names the backend chosen for this build. Both backends must
//! agree on every observable result up to float rounding; the parity suite in
//! `tests/backend_parity_tests.rs` holds them to it.
//!
//! Horizontal sums are evaluated as `(x + y) + (z + w)` on both backends so
//! dot products stay bit-identical in the common case.

use core::fmt::Debug;

mod portable;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[allow(unsafe_code)]
mod sse;

pub use portable::{Portable, Quad4};
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use sse::Sse;

/// Backend selected for this build.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type Native = Sse;

/// Backend selected for this build.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type Native = Portable;

/// `true` when [`Native`] is a hardware vector backend.
pub const SIMD_ENABLED: bool = cfg!(all(feature = "simd", target_arch = "x86_64"));

/// Component comparison predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cmp {
    /// `a == b`
    Eq,
    /// `a != b` (true for NaN operands)
    Ne,
    /// `a < b`
    Lt,
    /// `a > b`
    Gt,
    /// `a <= b`
    Le,
    /// `a >= b`
    Ge,
}

impl Cmp {
    /// Evaluates the predicate on plain floats with IEEE-754 semantics.
    #[inline]
    pub fn eval(self, a: f32, b: f32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => a < b,
            Self::Gt => a > b,
            Self::Le => a <= b,
            Self::Ge => a >= b,
        }
    }
}

/// Primitive four-lane operations a backend must provide.
///
/// `Quad` holds four lanes `(x, y, z, w)` with 16-byte alignment. `Single`
/// holds one float in whatever shape is cheapest to mix with `Quad`
/// arithmetic. `RawMask` is the comparison result; its observable content is
/// the four bits returned by [`Lanes::mask_bits`].
///
/// `min`/`max` follow SSE semantics on both backends: the second operand is
/// returned whenever the comparison is false, including for NaN.
pub trait Lanes: Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Four-lane storage.
    type Quad: Copy + Debug + Send + Sync + 'static;
    /// Single-lane storage.
    type Single: Copy + Debug + Send + Sync + 'static;
    /// Comparison mask storage.
    type RawMask: Copy + Debug + Send + Sync + 'static;

    /// Short backend name for diagnostics.
    const NAME: &'static str;
    /// `(0, 0, 0, 0)`
    const QUAD_ZERO: Self::Quad;
    /// `(1, 1, 1, 1)`
    const QUAD_ONE: Self::Quad;
    /// `(1, 0, 0, 0)`
    const QUAD_X: Self::Quad;
    /// `(0, 1, 0, 0)`
    const QUAD_Y: Self::Quad;
    /// `(0, 0, 1, 0)`
    const QUAD_Z: Self::Quad;
    /// `(0, 0, 0, 1)`
    const QUAD_W: Self::Quad;
    /// `(-1, 0, 0, 0)`
    const QUAD_NEG_X: Self::Quad;
    /// `(0, -1, 0, 0)`
    const QUAD_NEG_Y: Self::Quad;
    /// `(0, 0, -1, 0)`
    const QUAD_NEG_Z: Self::Quad;
    /// `(0, 0, 0, -1)`
    const QUAD_NEG_W: Self::Quad;

    // -- quad construction and access -------------------------------------

    /// Builds a quad from four lanes.
    fn set(x: f32, y: f32, z: f32, w: f32) -> Self::Quad;
    /// Replicates `v` into all four lanes.
    fn splat(v: f32) -> Self::Quad;
    /// Copies the lanes out in `x, y, z, w` order.
    fn to_array(q: Self::Quad) -> [f32; 4];
    /// Builds a quad from lanes in `x, y, z, w` order.
    fn from_array(a: [f32; 4]) -> Self::Quad;
    /// Borrows the lanes as an array.
    fn lanes(q: &Self::Quad) -> &[f32; 4];
    /// Mutably borrows the lanes as an array.
    fn lanes_mut(q: &mut Self::Quad) -> &mut [f32; 4];
    /// Replicates lane `i` into all four lanes.
    fn broadcast(q: Self::Quad, i: usize) -> Self::Quad;

    // -- quad arithmetic ---------------------------------------------------

    /// Lane-wise `a + b`.
    fn add(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise `a - b`.
    fn sub(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise `a * b`.
    fn mul(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise `a / b`.
    fn div(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise negation (sign flip, NaN payload preserved).
    fn neg(a: Self::Quad) -> Self::Quad;
    /// Lane-wise absolute value.
    fn abs(a: Self::Quad) -> Self::Quad;
    /// Lane-wise minimum.
    fn min(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise maximum.
    fn max(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Lane-wise square root.
    fn sqrt(a: Self::Quad) -> Self::Quad;
    /// `x·x' + y·y' + z·z'` replicated into all lanes.
    fn dot3(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// `x·x' + y·y' + z·z' + w·w'` replicated into all lanes.
    fn dot4(a: Self::Quad, b: Self::Quad) -> Self::Quad;
    /// Three-space cross product; the w lane of the result is zero.
    fn cross(a: Self::Quad, b: Self::Quad) -> Self::Quad;

    // -- comparison and masks ---------------------------------------------

    /// Lane-wise comparison.
    fn compare(a: Self::Quad, b: Self::Quad, op: Cmp) -> Self::RawMask;
    /// Bits `X = 1, Y = 2, Z = 4, W = 8` of the lanes set in `m`.
    fn mask_bits(m: Self::RawMask) -> u8;
    /// Builds a mask from its four low bits.
    fn mask_from_bits(bits: u8) -> Self::RawMask;
    /// Lane-wise mask conjunction.
    fn mask_and(a: Self::RawMask, b: Self::RawMask) -> Self::RawMask;
    /// Lane-wise mask disjunction.
    fn mask_or(a: Self::RawMask, b: Self::RawMask) -> Self::RawMask;
    /// Lane-wise mask exclusive or.
    fn mask_xor(a: Self::RawMask, b: Self::RawMask) -> Self::RawMask;
    /// Takes lanes of `a` where `m` is set and lanes of `b` elsewhere.
    fn select(m: Self::RawMask, a: Self::Quad, b: Self::Quad) -> Self::Quad;

    // -- single lane -------------------------------------------------------

    /// Wraps a plain float.
    fn single(v: f32) -> Self::Single;
    /// Unwraps a plain float.
    fn single_value(s: Self::Single) -> f32;
    /// Replicates a single into all four lanes.
    fn single_to_quad(s: Self::Single) -> Self::Quad;
    /// Extracts lane `i` of a quad.
    fn quad_lane(q: Self::Quad, i: usize) -> Self::Single;
    /// `a + b`
    fn single_add(a: Self::Single, b: Self::Single) -> Self::Single;
    /// `a - b`
    fn single_sub(a: Self::Single, b: Self::Single) -> Self::Single;
    /// `a * b`
    fn single_mul(a: Self::Single, b: Self::Single) -> Self::Single;
    /// `a / b`
    fn single_div(a: Self::Single, b: Self::Single) -> Self::Single;
    /// `-a`
    fn single_neg(a: Self::Single) -> Self::Single;
    /// `|a|`
    fn single_abs(a: Self::Single) -> Self::Single;
    /// Minimum with SSE NaN semantics.
    fn single_min(a: Self::Single, b: Self::Single) -> Self::Single;
    /// Maximum with SSE NaN semantics.
    fn single_max(a: Self::Single, b: Self::Single) -> Self::Single;
    /// Square root.
    fn single_sqrt(a: Self::Single) -> Self::Single;
    /// Compares two singles; only the X bit of the result can be set.
    fn single_compare(a: Self::Single, b: Self::Single, op: Cmp) -> Self::RawMask;
}
