// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Two-lane scalar vector.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::contract::{check_lane, contract};
use crate::error::MathError;
use crate::interchange;
use crate::lanes::{Cmp, Native};
use crate::mask::{CompMask, Mask};
use crate::scalar;

/// Plain `(x, y)` pair of floats.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

/// Two-dimensional cross product.
///
/// With another vector the result is the signed area `a.x·b.y − a.y·b.x`;
/// with a scalar `s` it is the right perpendicular scaled by `s`.
pub trait Cross<Rhs> {
    /// Scalar for vector operands, vector for scalar operands.
    type Output;
    /// Cross product of `self` and `rhs`.
    fn cross(&self, rhs: Rhs) -> Self::Output;
}

impl Cross<Vector2> for Vector2 {
    type Output = f32;
    #[inline]
    fn cross(&self, rhs: Vector2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Cross<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn cross(&self, s: f32) -> Vector2 {
        Vector2::new(s * self.y, -s * self.x)
    }
}

impl Vector2 {
    /// `(0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// `(0, 1)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);
    /// `(1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(-1, 0)`
    pub const NEG_UNIT_X: Self = Self::new(-1.0, 0.0);
    /// `(0, -1)`
    pub const NEG_UNIT_Y: Self = Self::new(0.0, -1.0);
    /// `(-1, -1)`
    pub const NEG_ONE: Self = Self::new(-1.0, -1.0);

    /// Builds a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Loads from a slice holding exactly two floats.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        interchange::exact::<2>(values).map(Self::from)
    }

    /// Components as `[x, y]`.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Whether both components are finite.
    pub fn is_ok(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Writes `[x, y]` into `out`.
    pub fn store(&self, out: &mut [f32; 2]) {
        *out = self.to_array();
    }

    /// Reads `[x, y]` from `src`.
    pub fn load(&mut self, src: &[f32; 2]) {
        *self = Self::from(*src);
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        *self = Self::new(x, y);
    }

    /// Writes `v` into both components.
    pub fn set_all(&mut self, v: f32) {
        *self = Self::new(v, v);
    }

    /// Zeroes both components.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Exact zero test.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Zero test with an absolute tolerance per component.
    pub fn is_zero_within(&self, abs_tolerance: f32) -> bool {
        self.x.abs() <= abs_tolerance && self.y.abs() <= abs_tolerance
    }

    /// Stores the component-wise minimum of `a` and `b`.
    pub fn set_min(&mut self, a: &Self, b: &Self) {
        *self = a.min(b);
    }

    /// Stores the component-wise maximum of `a` and `b`.
    pub fn set_max(&mut self, a: &Self, b: &Self) {
        *self = a.max(b);
    }

    /// Stores `-v`.
    pub fn set_negation(&mut self, v: &Self) {
        *self = -*v;
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(scalar::min(self.x, other.x), scalar::min(self.y, other.y))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(scalar::max(self.x, other.x), scalar::max(self.y, other.y))
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Length.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Scales to unit length.
    pub fn normalize(&mut self) {
        self.normalize_with_length();
    }

    /// [`Self::normalize`], returning the length before normalization.
    pub fn normalize_with_length(&mut self) -> f32 {
        let len = self.length();
        contract!(len > 0.0 || len.is_nan(), "normalize of a zero-length Vector2");
        *self = Self::new(self.x / len, self.y / len);
        len
    }

    /// Normalized copy.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Exact equality of both components.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Equality within an absolute tolerance per component.
    pub fn equals_within(&self, other: &Self, abs_tolerance: f32) -> bool {
        scalar::float_equals(self.x, other.x, abs_tolerance)
            && scalar::float_equals(self.y, other.y, abs_tolerance)
    }

    fn compare(&self, other: &Self, op: Cmp) -> CompMask<Native> {
        let mut bits = Mask::NONE;
        if op.eval(self.x, other.x) {
            bits = bits | Mask::X;
        }
        if op.eval(self.y, other.y) {
            bits = bits | Mask::Y;
        }
        CompMask::from_mask(bits)
    }

    /// Components where `self == other` (X and Y bits only).
    pub fn comp_equal(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Eq)
    }

    /// Components where `self != other`.
    pub fn comp_not_equal(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Ne)
    }

    /// Components where `self < other`.
    pub fn comp_less(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Lt)
    }

    /// Components where `self > other`.
    pub fn comp_greater(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Gt)
    }

    /// Components where `self <= other`.
    pub fn comp_less_equal(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Le)
    }

    /// Components where `self >= other`.
    pub fn comp_greater_equal(&self, other: &Self) -> CompMask<Native> {
        self.compare(other, Cmp::Ge)
    }

    /// Clockwise perpendicular, `(y, -x)`.
    pub fn right_perp(v: &Self) -> Self {
        Self::new(v.y, -v.x)
    }

    /// Counter-clockwise perpendicular, `(-y, x)`.
    pub fn left_perp(v: &Self) -> Self {
        Self::new(-v.y, v.x)
    }

    /// Distance between two points.
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*a - *b).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(a: &Self, b: &Self) -> f32 {
        (*a - *b).length_squared()
    }

    /// `a + (b - a) * t`; `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a) * t
    }

    /// Hermite-eased [`Self::lerp`]; `t` is clamped into `[0, 1]`.
    pub fn smooth_step(a: &Self, b: &Self, t: f32) -> Self {
        Self::new(scalar::smooth_step(a.x, b.x, t), scalar::smooth_step(a.y, b.y, t))
    }

    /// Reflects `v` about the line with unit normal `n` (not checked).
    pub fn reflect(v: &Self, n: &Self) -> Self {
        *v - *n * (2.0 * v.dot(n))
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        check_lane(i, 2);
        if i == 0 {
            &self.x
        } else {
            &self.y
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        check_lane(i, 2);
        if i == 0 {
            &mut self.x
        } else {
            &mut self.y
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div for Vector2 {
    type Output = Self;
    #[allow(clippy::float_cmp)]
    fn div(self, d: Self) -> Self {
        contract!(
            d.x != 0.0 && d.y != 0.0,
            "division by a Vector2 with a zero component"
        );
        Self::new(self.x / d.x, self.y / d.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[allow(clippy::float_cmp)]
    fn div(self, d: f32) -> Self {
        contract!(d != 0.0, "division of a Vector2 by zero");
        Self::new(self.x / d, self.y / d)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, d: Self) {
        *self = *self / d;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, d: f32) {
        *self = *self / d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_never_report_z_or_w() {
        let m = Vector2::new(1.0, 1.0).comp_equal(&Vector2::ONE);
        assert_eq!(m.get_mask(), Mask::XY);
        assert!(!m.any_is_set(Mask::Z | Mask::W));
    }
}
