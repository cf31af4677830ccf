// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Component comparison masks.
//!
//! Run a comparison once, then ask several questions of the result (or
//! combine it with other results) instead of repeating the comparison:
//!
//! ```
//! use tessera_math::{Mask, Vector4};
//! let a_min = Vector4::new(0.0, 0.0, 0.0, 0.0);
//! let a_max = Vector4::new(2.0, 2.0, 2.0, 0.0);
//! let b_min = Vector4::new(1.0, 1.0, 1.0, 0.0);
//! let b_max = Vector4::new(3.0, 3.0, 3.0, 0.0);
//! let overlap = a_min.comp_less(&b_max) & b_min.comp_less(&a_max);
//! assert!(overlap.all_are_set(Mask::XYZ));
//! ```

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::lanes::Lanes;

/// Named lane flags of a comparison.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask(u8);

impl Mask {
    /// No lanes.
    pub const NONE: Self = Self(0);
    /// Lane x.
    pub const X: Self = Self(1);
    /// Lane y.
    pub const Y: Self = Self(2);
    /// Lanes x and y.
    pub const XY: Self = Self(3);
    /// Lane z.
    pub const Z: Self = Self(4);
    /// Lanes x, y and z.
    pub const XYZ: Self = Self(7);
    /// Lane w.
    pub const W: Self = Self(8);
    /// All four lanes.
    pub const XYZW: Self = Self(15);
    /// The lane a [`crate::LaneFloat`] comparison reports in.
    pub const SIMD_FLOAT: Self = Self::X;

    /// Builds flags from the four low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// Raw bits, `X = 1, Y = 2, Z = 4, W = 8`.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag of `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `self` and `other` share at least one flag.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Flag for lane `index` (`0..4`).
    pub const fn lane(index: usize) -> Self {
        Self(1 << (index & 3))
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ['x', 'y', 'z', 'w'];
        write!(f, "Mask(")?;
        if self.0 == 0 {
            write!(f, "none")?;
        }
        for (i, name) in names.iter().enumerate() {
            if self.0 & (1 << i) != 0 {
                write!(f, "{name}")?;
            }
        }
        write!(f, ")")
    }
}

impl BitOr for Mask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Mask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Result of a lane-wise comparison between two values.
///
/// Only comparison methods produce these; [`CompMask::from_raw`] exists for
/// code that bridges to a backend directly.
#[derive(Copy, Clone)]
pub struct CompMask<B: Lanes> {
    raw: B::RawMask,
}

impl<B: Lanes> CompMask<B> {
    /// Wraps a backend mask.
    pub fn from_raw(raw: B::RawMask) -> Self {
        Self { raw }
    }

    /// The backend mask.
    pub fn raw(&self) -> B::RawMask {
        self.raw
    }

    pub(crate) fn from_mask(mask: Mask) -> Self {
        Self::from_raw(B::mask_from_bits(mask.bits()))
    }

    /// Lanes for which the comparison held.
    pub fn get_mask(&self) -> Mask {
        Mask::from_bits(B::mask_bits(self.raw))
    }

    /// Whether at least one lane of `subset` is set.
    pub fn any_is_set(&self, subset: Mask) -> bool {
        self.get_mask().intersects(subset)
    }

    /// Whether every lane of `subset` is set.
    pub fn all_are_set(&self, subset: Mask) -> bool {
        self.get_mask().contains(subset)
    }

    /// [`Self::any_is_set`] over all four lanes.
    pub fn any(&self) -> bool {
        self.any_is_set(Mask::XYZW)
    }

    /// [`Self::all_are_set`] over all four lanes.
    pub fn all(&self) -> bool {
        self.all_are_set(Mask::XYZW)
    }

    /// Stores `a & b` in `self`.
    pub fn set_and(&mut self, a: &Self, b: &Self) {
        self.raw = B::mask_and(a.raw, b.raw);
    }

    /// Stores `a | b` in `self`.
    pub fn set_or(&mut self, a: &Self, b: &Self) {
        self.raw = B::mask_or(a.raw, b.raw);
    }

    /// Stores `a ^ b` in `self`.
    pub fn set_xor(&mut self, a: &Self, b: &Self) {
        self.raw = B::mask_xor(a.raw, b.raw);
    }
}

impl<B: Lanes> Default for CompMask<B> {
    fn default() -> Self {
        Self::from_mask(Mask::NONE)
    }
}

impl<B: Lanes> fmt::Debug for CompMask<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompMask").field(&self.get_mask()).finish()
    }
}

impl<B: Lanes> PartialEq for CompMask<B> {
    fn eq(&self, other: &Self) -> bool {
        self.get_mask() == other.get_mask()
    }
}

impl<B: Lanes> Eq for CompMask<B> {}

impl<B: Lanes> BitAnd for CompMask<B> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(B::mask_and(self.raw, rhs.raw))
    }
}

impl<B: Lanes> BitOr for CompMask<B> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(B::mask_or(self.raw, rhs.raw))
    }
}

impl<B: Lanes> BitXor for CompMask<B> {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(B::mask_xor(self.raw, rhs.raw))
    }
}

impl<B: Lanes> BitAndAssign for CompMask<B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.raw = B::mask_and(self.raw, rhs.raw);
    }
}

impl<B: Lanes> BitOrAssign for CompMask<B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.raw = B::mask_or(self.raw, rhs.raw);
    }
}

impl<B: Lanes> BitXorAssign for CompMask<B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.raw = B::mask_xor(self.raw, rhs.raw);
    }
}
