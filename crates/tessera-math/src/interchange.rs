// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Aligned flat-float storage.
//!
//! Vectors, quaternions, and matrices store to and load from plain `f32`
//! arrays. The `_aligned` variants go through [`Aligned4`], which carries the
//! same 16-byte alignment as the lane registers; a slice of them can be viewed
//! as flat floats for upload to other systems.

use bytemuck::{Pod, Zeroable};

use crate::error::MathError;

/// Four floats on a 16-byte boundary.
#[repr(C, align(16))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Aligned4(pub [f32; 4]);

impl Aligned4 {
    /// Wraps four floats.
    pub const fn new(values: [f32; 4]) -> Self {
        Self(values)
    }
}

impl From<[f32; 4]> for Aligned4 {
    fn from(values: [f32; 4]) -> Self {
        Self(values)
    }
}

impl From<Aligned4> for [f32; 4] {
    fn from(value: Aligned4) -> Self {
        value.0
    }
}

/// `len` zeroed aligned quads.
pub fn aligned_buffer(len: usize) -> Vec<Aligned4> {
    vec![Aligned4::zeroed(); len]
}

/// Views aligned quads as a flat float slice, four floats per quad.
pub fn as_floats(quads: &[Aligned4]) -> &[f32] {
    bytemuck::cast_slice(quads)
}

/// Mutable counterpart of [`as_floats`].
pub fn as_floats_mut(quads: &mut [Aligned4]) -> &mut [f32] {
    bytemuck::cast_slice_mut(quads)
}

/// Copies exactly `N` floats out of `values`.
pub(crate) fn exact<const N: usize>(values: &[f32]) -> Result<[f32; N], MathError> {
    <[f32; N]>::try_from(values).map_err(|_| MathError::SliceLength {
        expected: N,
        actual: values.len(),
    })
}
