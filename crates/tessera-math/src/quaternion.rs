// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation quaternion `(x, y, z, w)` held in one [`Vector4`].
//!
//! Products compose right to left: `(q1 * q0) * v` applies `q0` first.
//! Rotation helpers expect unit quaternions and do not renormalize.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::contract::contract;
use crate::error::MathError;
use crate::interchange::Aligned4;
use crate::lane_float::LaneFloat;
use crate::lanes::Lanes;
use crate::mask::CompMask;
use crate::scalar;
use crate::vector4::Vector4;

/// Above this `|q0 · q1|`, [`Quaternion::slerp`] hands off to
/// [`Quaternion::nlerp`].
pub const SLERP_NLERP_THRESHOLD: f32 = 0.9995;

/// How far `|q|²` may stray from one before [`Quaternion::unit_inverse`]
/// rejects its input.
pub const UNIT_TOLERANCE: f32 = 1e-3;

/// Orientation as a quaternion.
#[derive(Copy, Clone, PartialEq)]
pub struct Quaternion<B: Lanes> {
    vec: Vector4<B>,
}

impl<B: Lanes> Quaternion<B> {
    /// `(0, 0, 0, 1)`
    pub const IDENTITY: Self = Self { vec: Vector4::UNIT_W };
    /// `(0, 0, 0, 0)`
    pub const ZERO: Self = Self { vec: Vector4::ZERO };

    /// Builds a quaternion from components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { vec: Vector4::new(x, y, z, w) }
    }

    /// Reinterprets `(x, y, z, w)` as a quaternion.
    #[inline]
    pub fn from_vector(vec: Vector4<B>) -> Self {
        Self { vec }
    }

    /// The underlying `(x, y, z, w)` vector.
    #[inline]
    pub fn vector(&self) -> Vector4<B> {
        self.vec
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.vec.to_array()
    }

    /// Loads from a slice holding exactly four floats.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        Vector4::from_slice(values).map(Self::from_vector)
    }

    /// Rotation of `angle` radians about the unit `axis` (xyz).
    ///
    /// The axis is used as given.
    pub fn from_axis_angle(axis: &Vector4<B>, angle: f32) -> Self {
        let half = angle * 0.5;
        let mut vec = *axis * scalar::sin(half);
        vec[3] = scalar::cos(half);
        Self { vec }
    }

    /// Rotation of `angle` radians about +X.
    pub fn from_rotation_x(angle: f32) -> Self {
        Self::from_axis_angle(&Vector4::UNIT_X, angle)
    }

    /// Rotation of `angle` radians about +Y.
    pub fn from_rotation_y(angle: f32) -> Self {
        Self::from_axis_angle(&Vector4::UNIT_Y, angle)
    }

    /// Rotation of `angle` radians about +Z.
    pub fn from_rotation_z(angle: f32) -> Self {
        Self::from_axis_angle(&Vector4::UNIT_Z, angle)
    }

    /// Overwrites with an axis-angle rotation.
    pub fn set_axis_angle(&mut self, axis: &Vector4<B>, angle: f32) {
        *self = Self::from_axis_angle(axis, angle);
    }

    /// Component `I` in lane storage.
    #[inline]
    pub fn get_elem<const I: usize>(&self) -> LaneFloat<B> {
        self.vec.get_elem::<I>()
    }

    /// Overwrites component `I`.
    #[inline]
    pub fn set_elem<const I: usize>(&mut self, s: LaneFloat<B>) {
        self.vec.set_elem::<I>(s);
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.vec.set(x, y, z, w);
    }

    /// `value` in every component.
    pub fn set_all(&mut self, value: LaneFloat<B>) {
        self.vec.set_all(value);
    }

    /// All zeros.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Identity rotation.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Whether every component is finite.
    pub fn is_ok(&self) -> bool {
        self.vec.is_ok()
    }

    /// Writes `[x, y, z, w]` into `out`.
    pub fn store(&self, out: &mut [f32; 4]) {
        self.vec.store(out);
    }

    /// Reads `[x, y, z, w]` from `src`.
    pub fn load(&mut self, src: &[f32; 4]) {
        self.vec.load(src);
    }

    /// Writes into aligned storage.
    pub fn store_aligned(&self, out: &mut Aligned4) {
        self.vec.store_aligned(out);
    }

    /// Reads from aligned storage.
    pub fn load_aligned(&mut self, src: &Aligned4) {
        self.vec.load_aligned(src);
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> LaneFloat<B> {
        self.vec.dot4(&other.vec)
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(&self) -> LaneFloat<B> {
        self.vec.length_squared4()
    }

    /// Norm.
    #[inline]
    pub fn length(&self) -> LaneFloat<B> {
        self.vec.length4()
    }

    /// Scales to unit length; a zero quaternion is a contract violation.
    pub fn normalize(&mut self) {
        self.vec.normalize4();
    }

    /// Unit-length copy.
    pub fn normalized(&self) -> Self {
        Self { vec: self.vec.normalized4() }
    }

    /// `(-x, -y, -z, w)`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { vec: self.vec * Vector4::new(-1.0, -1.0, -1.0, 1.0) }
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        contract!(
            len_sq.value() > 0.0 || len_sq.value().is_nan(),
            "inverse of a zero quaternion"
        );
        Self { vec: self.conjugate().vec / len_sq }
    }

    /// Inverse of a unit quaternion, which is its conjugate.
    pub fn unit_inverse(&self) -> Self {
        contract!(
            (self.length_squared().value() - 1.0).abs() <= UNIT_TOLERANCE,
            "unit_inverse of a non-unit quaternion (|q|^2 = {})",
            self.length_squared().value()
        );
        self.conjugate()
    }

    /// Rotates the xyz of `v`; `v.w` passes through.
    pub fn rotate(&self, v: &Vector4<B>) -> Vector4<B> {
        let u = self.vec;
        let t = u.cross(v) * 2.0;
        *v + t * u.get_elem::<3>() + u.cross(&t)
    }

    /// Exact equality of all four components.
    pub fn equals(&self, other: &Self) -> bool {
        self.vec.equals4(&other.vec)
    }

    /// Components where `self == other`.
    pub fn comp_equal(&self, other: &Self) -> CompMask<B> {
        self.vec.comp_equal(&other.vec)
    }

    /// Components where `self != other`.
    pub fn comp_not_equal(&self, other: &Self) -> CompMask<B> {
        self.vec.comp_not_equal(&other.vec)
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Both inputs must be unit length. `t = 0` gives `q0`, `t = 1` gives
    /// `q1` or `-q1`.
    pub fn slerp(q0: &Self, q1: &Self, t: LaneFloat<B>) -> Self {
        let mut cos = q0.dot(q1).value();
        let mut q1 = *q1;
        if cos < 0.0 {
            q1 = -q1;
            cos = -cos;
        }
        if cos > SLERP_NLERP_THRESHOLD {
            return Self::nlerp(q0, &q1, t);
        }
        let theta = scalar::acos(cos);
        let inv_sin = 1.0 / scalar::sin(theta);
        let t = t.value();
        let w0 = scalar::sin((1.0 - t) * theta) * inv_sin;
        let w1 = scalar::sin(t * theta) * inv_sin;
        Self { vec: q0.vec * w0 + q1.vec * w1 }
    }

    /// Normalized linear interpolation along the shorter arc.
    pub fn nlerp(q0: &Self, q1: &Self, t: LaneFloat<B>) -> Self {
        let q1 = if q0.dot(q1).value() < 0.0 { -*q1 } else { *q1 };
        Self { vec: Vector4::lerp(&q0.vec, &q1.vec, t).normalized4() }
    }
}

impl<B: Lanes> Default for Quaternion<B> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<B: Lanes> fmt::Debug for Quaternion<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_struct("Quaternion")
            .field("x", &x)
            .field("y", &y)
            .field("z", &z)
            .field("w", &w)
            .finish()
    }
}

impl<B: Lanes> Index<usize> for Quaternion<B> {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.vec[i]
    }
}

impl<B: Lanes> IndexMut<usize> for Quaternion<B> {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.vec[i]
    }
}

impl<B: Lanes> Add for Quaternion<B> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { vec: self.vec + rhs.vec }
    }
}

impl<B: Lanes> Sub for Quaternion<B> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { vec: self.vec - rhs.vec }
    }
}

/// Hamilton product.
impl<B: Lanes> Mul for Quaternion<B> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.vec, rhs.vec);
        let (aw, bw) = (a.get_elem::<3>(), b.get_elem::<3>());
        let mut vec = b * aw + a * bw + a.cross(&b);
        vec.set_elem::<3>(aw * bw - a.dot3(&b));
        Self { vec }
    }
}

impl<B: Lanes> Mul<Vector4<B>> for Quaternion<B> {
    type Output = Vector4<B>;
    fn mul(self, v: Vector4<B>) -> Vector4<B> {
        self.rotate(&v)
    }
}

impl<B: Lanes> Mul<LaneFloat<B>> for Quaternion<B> {
    type Output = Self;
    fn mul(self, s: LaneFloat<B>) -> Self {
        Self { vec: self.vec * s }
    }
}

impl<B: Lanes> Mul<f32> for Quaternion<B> {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self { vec: self.vec * s }
    }
}

impl<B: Lanes> Neg for Quaternion<B> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

impl<B: Lanes> AddAssign for Quaternion<B> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl<B: Lanes> SubAssign for Quaternion<B> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

impl<B: Lanes> MulAssign for Quaternion<B> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<B: Lanes> MulAssign<LaneFloat<B>> for Quaternion<B> {
    fn mul_assign(&mut self, s: LaneFloat<B>) {
        self.vec *= s;
    }
}

impl<B: Lanes> MulAssign<f32> for Quaternion<B> {
    fn mul_assign(&mut self, s: f32) {
        self.vec *= s;
    }
}

#[cfg(feature = "serde")]
impl<B: Lanes> serde::Serialize for Quaternion<B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.vec, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Lanes> serde::Deserialize<'de> for Quaternion<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vector4<B> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_vector)
    }
}
