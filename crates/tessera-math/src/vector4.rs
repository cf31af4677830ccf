// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Four-lane vector.
//!
//! `w = 1` marks a point and `w = 0` a direction. Geometric operations named
//! `*3` (`dot3`, `length3`, `normalize3`) ignore w; `*4` variants use all four
//! lanes.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::contract::{check_lane, contract};
use crate::error::MathError;
use crate::interchange::{self, Aligned4};
use crate::lane_float::LaneFloat;
use crate::lanes::{Cmp, Lanes};
use crate::mask::{CompMask, Mask};
use crate::scalar;

/// `|cos θ|` above `1 - SLERP_EPSILON` makes [`Vector4::slerp`] fall back to
/// linear interpolation.
pub const SLERP_EPSILON: f32 = 1e-4;

/// Four `f32` lanes in one 16-byte aligned register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Vector4<B: Lanes> {
    quad: B::Quad,
}

impl<B: Lanes> Vector4<B> {
    /// `(0, 0, 0, 0)`
    pub const ZERO: Self = Self::from_quad(B::QUAD_ZERO);
    /// `(1, 1, 1, 1)`
    pub const ONE: Self = Self::from_quad(B::QUAD_ONE);
    /// `(1, 0, 0, 0)`
    pub const UNIT_X: Self = Self::from_quad(B::QUAD_X);
    /// `(0, 1, 0, 0)`
    pub const UNIT_Y: Self = Self::from_quad(B::QUAD_Y);
    /// `(0, 0, 1, 0)`
    pub const UNIT_Z: Self = Self::from_quad(B::QUAD_Z);
    /// `(0, 0, 0, 1)`
    pub const UNIT_W: Self = Self::from_quad(B::QUAD_W);
    /// The origin as a point, `(0, 0, 0, 1)`.
    pub const ZERO_PT: Self = Self::from_quad(B::QUAD_W);
    /// `(-1, 0, 0, 0)`
    pub const NEG_UNIT_X: Self = Self::from_quad(B::QUAD_NEG_X);
    /// `(0, -1, 0, 0)`
    pub const NEG_UNIT_Y: Self = Self::from_quad(B::QUAD_NEG_Y);
    /// `(0, 0, -1, 0)`
    pub const NEG_UNIT_Z: Self = Self::from_quad(B::QUAD_NEG_Z);

    pub(crate) const fn from_quad(quad: B::Quad) -> Self {
        Self { quad }
    }

    pub(crate) fn quad(&self) -> B::Quad {
        self.quad
    }

    /// Builds a vector from lanes.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_quad(B::set(x, y, z, w))
    }

    /// Direction `(x, y, z, 0)`.
    #[inline]
    pub fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Point `(x, y, z, 1)`.
    #[inline]
    pub fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// `value` in all four lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self::from_quad(B::splat(value))
    }

    /// Builds a vector from `[x, y, z, w]`.
    #[inline]
    pub fn from_array(values: [f32; 4]) -> Self {
        Self::from_quad(B::from_array(values))
    }

    /// Lanes as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        B::to_array(self.quad)
    }

    /// Loads from a slice holding exactly four floats.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        interchange::exact::<4>(values).map(Self::from_array)
    }

    /// Lane `i` (`0..4`).
    #[inline]
    pub fn get(&self, i: usize) -> f32 {
        self[i]
    }

    /// Lane x.
    #[inline]
    pub fn x(&self) -> f32 {
        B::lanes(&self.quad)[0]
    }

    /// Lane y.
    #[inline]
    pub fn y(&self) -> f32 {
        B::lanes(&self.quad)[1]
    }

    /// Lane z.
    #[inline]
    pub fn z(&self) -> f32 {
        B::lanes(&self.quad)[2]
    }

    /// Lane w.
    #[inline]
    pub fn w(&self) -> f32 {
        B::lanes(&self.quad)[3]
    }

    /// Lane `I` in lane storage; `I` is checked at compile time.
    #[inline]
    pub fn get_elem<const I: usize>(&self) -> LaneFloat<B> {
        const { assert!(I < 4, "Vector4 lane index out of range") };
        LaneFloat::from_single(B::quad_lane(self.quad, I))
    }

    /// Overwrites lane `I`.
    #[inline]
    pub fn set_elem<const I: usize>(&mut self, s: LaneFloat<B>) {
        const { assert!(I < 4, "Vector4 lane index out of range") };
        B::lanes_mut(&mut self.quad)[I] = s.value();
    }

    /// Overwrites all four lanes.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.quad = B::set(x, y, z, w);
    }

    /// Overwrites all four lanes from lane-stored scalars.
    #[inline]
    pub fn set_lanes(&mut self, x: LaneFloat<B>, y: LaneFloat<B>, z: LaneFloat<B>, w: LaneFloat<B>) {
        self.set(x.value(), y.value(), z.value(), w.value());
    }

    /// Writes `value` into every lane.
    #[inline]
    pub fn set_all(&mut self, value: LaneFloat<B>) {
        self.quad = B::single_to_quad(value.single());
    }

    /// Zeroes x, y and z; w is kept.
    #[inline]
    pub fn set_zero3(&mut self) {
        self.quad = B::select(B::mask_from_bits(Mask::XYZ.bits()), B::QUAD_ZERO, self.quad);
    }

    /// Zeroes every lane.
    #[inline]
    pub fn set_zero4(&mut self) {
        self.quad = B::QUAD_ZERO;
    }

    /// Whether every lane is finite.
    pub fn is_ok(&self) -> bool {
        B::lanes(&self.quad).iter().all(|v| v.is_finite())
    }

    /// Writes `[x, y, z, w]` into `out`.
    #[inline]
    pub fn store(&self, out: &mut [f32; 4]) {
        *out = self.to_array();
    }

    /// Reads `[x, y, z, w]` from `src`.
    #[inline]
    pub fn load(&mut self, src: &[f32; 4]) {
        self.quad = B::from_array(*src);
    }

    /// Writes into aligned storage.
    #[inline]
    pub fn store_aligned(&self, out: &mut Aligned4) {
        out.0 = self.to_array();
    }

    /// Reads from aligned storage.
    #[inline]
    pub fn load_aligned(&mut self, src: &Aligned4) {
        self.quad = B::from_array(src.0);
    }

    // -- arithmetic -------------------------------------------------------

    /// Stores the lane-wise minimum of `a` and `b`.
    #[inline]
    pub fn set_min(&mut self, a: &Self, b: &Self) {
        self.quad = B::min(a.quad, b.quad);
    }

    /// Stores the lane-wise maximum of `a` and `b`.
    #[inline]
    pub fn set_max(&mut self, a: &Self, b: &Self) {
        self.quad = B::max(a.quad, b.quad);
    }

    /// Stores `-v`.
    #[inline]
    pub fn set_negation(&mut self, v: &Self) {
        self.quad = B::neg(v.quad);
    }

    /// Lane-wise minimum.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::from_quad(B::min(self.quad, other.quad))
    }

    /// Lane-wise maximum.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::from_quad(B::max(self.quad, other.quad))
    }

    /// Lane-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_quad(B::abs(self.quad))
    }

    /// Lane-wise clamp into `[lo, hi]`.
    #[inline]
    pub fn clamp(&self, lo: &Self, hi: &Self) -> Self {
        Self::from_quad(B::min(B::max(self.quad, lo.quad), hi.quad))
    }

    /// Lane `I` copied into all four lanes.
    #[inline]
    pub fn replicate<const I: usize>(&self) -> Self {
        const { assert!(I < 4, "Vector4 lane index out of range") };
        Self::from_quad(B::broadcast(self.quad, I))
    }

    // -- geometry ---------------------------------------------------------

    /// Three-space cross product; the result's w is zero.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_quad(B::cross(self.quad, other.quad))
    }

    /// `x·x' + y·y' + z·z'`
    #[inline]
    pub fn dot3(&self, other: &Self) -> LaneFloat<B> {
        LaneFloat::from_single(B::quad_lane(B::dot3(self.quad, other.quad), 0))
    }

    /// Dot product over all four lanes.
    #[inline]
    pub fn dot4(&self, other: &Self) -> LaneFloat<B> {
        LaneFloat::from_single(B::quad_lane(B::dot4(self.quad, other.quad), 0))
    }

    /// Squared length of xyz.
    #[inline]
    pub fn length_squared3(&self) -> LaneFloat<B> {
        self.dot3(self)
    }

    /// Squared length of all four lanes.
    #[inline]
    pub fn length_squared4(&self) -> LaneFloat<B> {
        self.dot4(self)
    }

    /// Length of xyz.
    #[inline]
    pub fn length3(&self) -> LaneFloat<B> {
        self.dot3(self).sqrt()
    }

    /// Length of all four lanes.
    #[inline]
    pub fn length4(&self) -> LaneFloat<B> {
        self.dot4(self).sqrt()
    }

    fn scale_xyz_by_inverse_length(&mut self, len: B::Quad) {
        let scaled = B::div(self.quad, len);
        self.quad = B::select(B::mask_from_bits(Mask::XYZ.bits()), scaled, self.quad);
    }

    /// Scales xyz to unit length; w is left untouched.
    pub fn normalize3(&mut self) {
        let len = B::sqrt(B::dot3(self.quad, self.quad));
        contract!(nonzero(B::to_array(len)[0]), "normalize3 of a zero-length vector");
        self.scale_xyz_by_inverse_length(len);
    }

    /// Scales all four lanes to unit length.
    pub fn normalize4(&mut self) {
        let len = B::sqrt(B::dot4(self.quad, self.quad));
        contract!(nonzero(B::to_array(len)[0]), "normalize4 of a zero-length vector");
        self.quad = B::div(self.quad, len);
    }

    /// [`Self::normalize3`], returning the length before normalization.
    pub fn normalize3_with_length(&mut self) -> LaneFloat<B> {
        let len = B::sqrt(B::dot3(self.quad, self.quad));
        contract!(
            nonzero(B::to_array(len)[0]),
            "normalize3_with_length of a zero-length vector"
        );
        self.scale_xyz_by_inverse_length(len);
        LaneFloat::from_single(B::quad_lane(len, 0))
    }

    /// Normalized copy of xyz, w kept.
    pub fn normalized3(&self) -> Self {
        let mut v = *self;
        v.normalize3();
        v
    }

    /// Normalized copy over all four lanes.
    pub fn normalized4(&self) -> Self {
        let mut v = *self;
        v.normalize4();
        v
    }

    // -- comparison -------------------------------------------------------

    fn compare(&self, other: &Self, op: Cmp) -> CompMask<B> {
        CompMask::from_raw(B::compare(self.quad, other.quad, op))
    }

    /// Lanes where `self == other`.
    pub fn comp_equal(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Eq)
    }

    /// Lanes where `self != other`.
    pub fn comp_not_equal(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Ne)
    }

    /// Lanes where `self < other`.
    pub fn comp_less(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Lt)
    }

    /// Lanes where `self > other`.
    pub fn comp_greater(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Gt)
    }

    /// Lanes where `self <= other`.
    pub fn comp_less_equal(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Le)
    }

    /// Lanes where `self >= other`.
    pub fn comp_greater_equal(&self, other: &Self) -> CompMask<B> {
        self.compare(other, Cmp::Ge)
    }

    /// Whether x, y and z are exactly zero.
    pub fn is_zero3(&self) -> bool {
        self.comp_equal(&Self::ZERO).all_are_set(Mask::XYZ)
    }

    /// Whether all four lanes are exactly zero.
    pub fn is_zero4(&self) -> bool {
        self.comp_equal(&Self::ZERO).all()
    }

    /// Exact equality of x, y and z.
    pub fn equals3(&self, other: &Self) -> bool {
        self.comp_equal(other).all_are_set(Mask::XYZ)
    }

    /// Exact equality of all four lanes.
    pub fn equals4(&self, other: &Self) -> bool {
        self.comp_equal(other).all()
    }

    // -- masked blend -----------------------------------------------------

    /// Lanes of `a` where `mask` is set, lanes of `b` elsewhere.
    #[inline]
    pub fn select(mask: &CompMask<B>, a: &Self, b: &Self) -> Self {
        Self::from_quad(B::select(mask.raw(), a.quad, b.quad))
    }

    /// Replaces the lanes set in `mask` with those of `other`.
    #[inline]
    pub fn splice(&mut self, mask: &CompMask<B>, other: &Self) {
        self.quad = B::select(mask.raw(), other.quad, self.quad);
    }

    // -- associated helpers -----------------------------------------------

    /// Distance between the xyz parts of two points.
    pub fn distance(a: &Self, b: &Self) -> LaneFloat<B> {
        (*a - *b).length3()
    }

    /// Squared distance between the xyz parts of two points.
    pub fn distance_squared(a: &Self, b: &Self) -> LaneFloat<B> {
        (*a - *b).length_squared3()
    }

    /// `a + (b - a) * t` over all four lanes; `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: LaneFloat<B>) -> Self {
        *a + (*b - *a) * t
    }

    /// Spherical interpolation between unit directions.
    ///
    /// The angle comes from the xyz parts; all four lanes are blended with the
    /// resulting weights. Nearly parallel or opposite inputs fall back to
    /// [`Self::lerp`].
    pub fn slerp(a: &Self, b: &Self, t: LaneFloat<B>) -> Self {
        let cos = a.dot3(b).value();
        if cos.abs() > 1.0 - SLERP_EPSILON {
            return Self::lerp(a, b, t);
        }
        let theta = scalar::acos(cos);
        let inv_sin = 1.0 / scalar::sin(theta);
        let t = t.value();
        let wa = scalar::sin((1.0 - t) * theta) * inv_sin;
        let wb = scalar::sin(t * theta) * inv_sin;
        *a * wa + *b * wb
    }

    /// Hermite-eased [`Self::lerp`]; `t` is clamped into `[0, 1]`.
    pub fn smooth_step(a: &Self, b: &Self, t: LaneFloat<B>) -> Self {
        let t = t.saturate();
        let eased = t * t * (LaneFloat::new(3.0) - t * 2.0);
        Self::lerp(a, b, eased)
    }

    /// Reflects `v` about the plane with unit normal `n`.
    ///
    /// `n` is assumed normalized; this is not checked.
    pub fn reflect(v: &Self, n: &Self) -> Self {
        let d = v.dot3(n);
        *v - *n * (d * 2.0)
    }
}

#[inline]
fn nonzero(len: f32) -> bool {
    len > 0.0 || len.is_nan()
}

impl<B: Lanes> Default for Vector4<B> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<B: Lanes> fmt::Debug for Vector4<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_struct("Vector4")
            .field("x", &x)
            .field("y", &y)
            .field("z", &z)
            .field("w", &w)
            .finish()
    }
}

impl<B: Lanes> PartialEq for Vector4<B> {
    fn eq(&self, other: &Self) -> bool {
        self.equals4(other)
    }
}

impl<B: Lanes> From<[f32; 4]> for Vector4<B> {
    fn from(values: [f32; 4]) -> Self {
        Self::from_array(values)
    }
}

impl<B: Lanes> From<Vector4<B>> for [f32; 4] {
    fn from(v: Vector4<B>) -> Self {
        v.to_array()
    }
}

impl<B: Lanes> Index<usize> for Vector4<B> {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        check_lane(i, 4);
        &B::lanes(&self.quad)[i & 3]
    }
}

impl<B: Lanes> IndexMut<usize> for Vector4<B> {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        check_lane(i, 4);
        &mut B::lanes_mut(&mut self.quad)[i & 3]
    }
}

impl<B: Lanes> Add for Vector4<B> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_quad(B::add(self.quad, rhs.quad))
    }
}

impl<B: Lanes> Sub for Vector4<B> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_quad(B::sub(self.quad, rhs.quad))
    }
}

impl<B: Lanes> Mul for Vector4<B> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_quad(B::mul(self.quad, rhs.quad))
    }
}

impl<B: Lanes> Mul<LaneFloat<B>> for Vector4<B> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: LaneFloat<B>) -> Self {
        Self::from_quad(B::mul(self.quad, B::single_to_quad(rhs.single())))
    }
}

impl<B: Lanes> Mul<f32> for Vector4<B> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_quad(B::mul(self.quad, B::splat(rhs)))
    }
}

impl<B: Lanes> Mul<Vector4<B>> for LaneFloat<B> {
    type Output = Vector4<B>;
    #[inline]
    fn mul(self, rhs: Vector4<B>) -> Vector4<B> {
        rhs * self
    }
}

impl<B: Lanes> Mul<Vector4<B>> for f32 {
    type Output = Vector4<B>;
    #[inline]
    fn mul(self, rhs: Vector4<B>) -> Vector4<B> {
        rhs * self
    }
}

impl<B: Lanes> Div for Vector4<B> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        contract!(
            !rhs.comp_equal(&Self::ZERO).any_is_set(Mask::XYZ),
            "division by a vector with a zero x, y or z lane"
        );
        Self::from_quad(B::div(self.quad, rhs.quad))
    }
}

impl<B: Lanes> Div<LaneFloat<B>> for Vector4<B> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: LaneFloat<B>) -> Self {
        contract!(
            rhs.comp_equal(LaneFloat::zero()).get_mask() == Mask::NONE,
            "division of a vector by zero"
        );
        Self::from_quad(B::div(self.quad, B::single_to_quad(rhs.single())))
    }
}

impl<B: Lanes> Div<f32> for Vector4<B> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self / LaneFloat::new(rhs)
    }
}

impl<B: Lanes> Neg for Vector4<B> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_quad(B::neg(self.quad))
    }
}

macro_rules! vector4_assign {
    ($trait:ident, $method:ident, $op:tt, $rhs:ty) => {
        impl<B: Lanes> $trait<$rhs> for Vector4<B> {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

vector4_assign!(AddAssign, add_assign, +, Vector4<B>);
vector4_assign!(SubAssign, sub_assign, -, Vector4<B>);
vector4_assign!(MulAssign, mul_assign, *, Vector4<B>);
vector4_assign!(MulAssign, mul_assign, *, LaneFloat<B>);
vector4_assign!(MulAssign, mul_assign, *, f32);
vector4_assign!(DivAssign, div_assign, /, Vector4<B>);
vector4_assign!(DivAssign, div_assign, /, LaneFloat<B>);
vector4_assign!(DivAssign, div_assign, /, f32);

#[cfg(feature = "serde")]
impl<B: Lanes> serde::Serialize for Vector4<B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_array(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Lanes> serde::Deserialize<'de> for Vector4<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f32; 4] as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::Portable;

    type V = Vector4<Portable>;

    #[test]
    fn set_zero3_keeps_w() {
        let mut v = V::new(1.0, 2.0, 3.0, 4.0);
        v.set_zero3();
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn normalize3_leaves_w_alone() {
        let mut v = V::new(3.0, 0.0, 4.0, 7.0);
        let len = v.normalize3_with_length();
        assert_eq!(len.value(), 5.0);
        assert_eq!(v.to_array(), [0.6, 0.0, 0.8, 7.0]);
    }

    #[test]
    fn splice_takes_masked_lanes_from_other() {
        let mut v = V::new(1.0, 2.0, 3.0, 4.0);
        let other = V::splat(9.0);
        let mask = CompMask::from_mask(Mask::Y | Mask::W);
        v.splice(&mask, &other);
        assert_eq!(v.to_array(), [1.0, 9.0, 3.0, 9.0]);
    }

    #[test]
    fn zero_w_does_not_trip_vector_division() {
        let v = V::new(2.0, 4.0, 6.0, 0.0) / V::new(2.0, 2.0, 2.0, 0.0);
        assert_eq!(&v.to_array()[..3], &[1.0, 2.0, 3.0]);
        assert!(v.w().is_nan());
    }
}
