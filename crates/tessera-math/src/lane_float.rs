// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! One float held in register shape.
//!
//! `LaneFloat` exists so scalars produced by vector code (dot products,
//! lengths) can feed back into vector code without leaving the register file.
//! On the portable backend it is a plain `f32`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::lanes::{Cmp, Lanes};
use crate::mask::CompMask;
use crate::scalar;

// Parabola fit for sine on [-π, π], refined with a weighted square.
const SIN_B: f32 = 4.0 / scalar::PI;
const SIN_C: f32 = -4.0 / (scalar::PI * scalar::PI);
const SIN_P: f32 = 0.225;

/// A scalar in lane storage.
#[derive(Copy, Clone)]
pub struct LaneFloat<B: Lanes> {
    single: B::Single,
}

impl<B: Lanes> LaneFloat<B> {
    /// Wraps `value`.
    #[inline]
    pub fn new(value: f32) -> Self {
        Self { single: B::single(value) }
    }

    #[inline]
    pub(crate) fn from_single(single: B::Single) -> Self {
        Self { single }
    }

    #[inline]
    pub(crate) fn single(self) -> B::Single {
        self.single
    }

    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// One.
    #[inline]
    pub fn one() -> Self {
        Self::new(1.0)
    }

    /// The wrapped value.
    #[inline]
    pub fn value(self) -> f32 {
        B::single_value(self.single)
    }

    /// Overwrites the wrapped value.
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.single = B::single(value);
    }

    /// Sets the value to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        self.set(0.0);
    }

    /// Stores `min(a, b)` without branching.
    #[inline]
    pub fn set_min(&mut self, a: Self, b: Self) {
        self.single = B::single_min(a.single, b.single);
    }

    /// Stores `max(a, b)` without branching.
    #[inline]
    pub fn set_max(&mut self, a: Self, b: Self) {
        self.single = B::single_max(a.single, b.single);
    }

    /// Smaller of `self` and `other`. If either is NaN, `other` is returned.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_single(B::single_min(self.single, other.single))
    }

    /// Larger of `self` and `other`. If either is NaN, `other` is returned.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_single(B::single_max(self.single, other.single))
    }

    /// Clamps into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_single(B::single_abs(self.single))
    }

    /// Square root. Negative inputs produce NaN.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_single(B::single_sqrt(self.single))
    }

    /// `1 / sqrt(self)`. Zero produces `+inf`.
    #[inline]
    pub fn inv_sqrt(self) -> Self {
        Self::one() / self.sqrt()
    }

    /// Clamps into `[0, 1]`.
    #[inline]
    pub fn saturate(self) -> Self {
        self.clamp(Self::zero(), Self::one())
    }

    /// `a + (b - a) * t`
    #[inline]
    pub fn lerp(a: Self, b: Self, t: Self) -> Self {
        a + (b - a) * t
    }

    /// Approximate sine, absolute error around `1.1e-3`.
    ///
    /// The angle is wrapped into `[-π, π]` first; the polynomial itself runs
    /// in lanes.
    pub fn fast_sin(self) -> Self {
        let x = Self::new(scalar::wrap_angle(self.value()));
        let y = Self::new(SIN_B) * x + Self::new(SIN_C) * x * x.abs();
        Self::new(SIN_P) * (y * y.abs() - y) + y
    }

    /// Approximate cosine, via `sin(x + π/2)`.
    pub fn fast_cos(self) -> Self {
        (self + Self::new(scalar::PI_OVER_TWO)).fast_sin()
    }

    fn compare(self, other: Self, op: Cmp) -> CompMask<B> {
        CompMask::from_raw(B::single_compare(self.single, other.single, op))
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self == other`.
    pub fn comp_equal(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Eq)
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self != other`.
    pub fn comp_not_equal(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Ne)
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self < other`.
    pub fn comp_less(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Lt)
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self > other`.
    pub fn comp_greater(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Gt)
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self <= other`.
    pub fn comp_less_equal(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Le)
    }

    /// Sets [`crate::Mask::SIMD_FLOAT`] when `self >= other`.
    pub fn comp_greater_equal(self, other: Self) -> CompMask<B> {
        self.compare(other, Cmp::Ge)
    }
}

impl<B: Lanes> Default for LaneFloat<B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: Lanes> fmt::Debug for LaneFloat<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LaneFloat").field(&self.value()).finish()
    }
}

impl<B: Lanes> fmt::Display for LaneFloat<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl<B: Lanes> From<f32> for LaneFloat<B> {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl<B: Lanes> From<LaneFloat<B>> for f32 {
    fn from(value: LaneFloat<B>) -> Self {
        value.value()
    }
}

impl<B: Lanes> PartialEq for LaneFloat<B> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<B: Lanes> PartialEq<f32> for LaneFloat<B> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &f32) -> bool {
        self.value() == *other
    }
}

impl<B: Lanes> PartialOrd for LaneFloat<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

macro_rules! lane_float_binop {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:ident) => {
        impl<B: Lanes> $trait for LaneFloat<B> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_single(B::$op(self.single, rhs.single))
            }
        }

        impl<B: Lanes> $trait<f32> for LaneFloat<B> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Self::from_single(B::$op(self.single, B::single(rhs)))
            }
        }

        impl<B: Lanes> $assign for LaneFloat<B> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.single = B::$op(self.single, rhs.single);
            }
        }

        impl<B: Lanes> $assign<f32> for LaneFloat<B> {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                self.single = B::$op(self.single, B::single(rhs));
            }
        }
    };
}

lane_float_binop!(Add, add, AddAssign, add_assign, single_add);
lane_float_binop!(Sub, sub, SubAssign, sub_assign, single_sub);
lane_float_binop!(Mul, mul, MulAssign, mul_assign, single_mul);
lane_float_binop!(Div, div, DivAssign, div_assign, single_div);

impl<B: Lanes> Neg for LaneFloat<B> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_single(B::single_neg(self.single))
    }
}
