// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Column-major 4×4 matrix built from four [`Vector4`] columns.
//!
//! `m[(row, col)]` addresses `column(col)[row]` for reads and writes alike.
//! Matrices act on column vectors from the left, so `(a * b) * v` applies `b`
//! first.
//!
//! ```
//! use tessera_math::{Matrix4, Vector4};
//! let t = Matrix4::translation(10.0, 0.0, 0.0);
//! let p = t.transform(&Vector4::new(20.0, 5.0, 0.0, 1.0));
//! assert_eq!(p.to_array(), [30.0, 5.0, 0.0, 1.0]);
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::contract::{check_lane, contract};
use crate::error::MathError;
use crate::interchange::{self, Aligned4};
use crate::lane_float::LaneFloat;
use crate::lanes::Lanes;
use crate::quaternion::Quaternion;
use crate::scalar;
use crate::vector2::Vector2;
use crate::vector4::Vector4;

/// `|det|` at or below this makes a matrix singular for [`Matrix4::inverse`]
/// and [`Matrix4::try_inverse`].
pub const DETERMINANT_EPSILON: f32 = 1e-10;

/// Column-major 4×4 matrix.
#[derive(Copy, Clone)]
pub struct Matrix4<B: Lanes> {
    cols: [Vector4<B>; 4],
}

impl<B: Lanes> Matrix4<B> {
    /// All zeros.
    pub const ZERO: Self =
        Self::from_columns(Vector4::ZERO, Vector4::ZERO, Vector4::ZERO, Vector4::ZERO);
    /// Ones on the diagonal.
    pub const IDENTITY: Self =
        Self::from_columns(Vector4::UNIT_X, Vector4::UNIT_Y, Vector4::UNIT_Z, Vector4::UNIT_W);
    /// Minus ones on the diagonal.
    pub const NEG_IDENTITY: Self = Self::from_columns(
        Vector4::NEG_UNIT_X,
        Vector4::NEG_UNIT_Y,
        Vector4::NEG_UNIT_Z,
        Vector4::from_quad(B::QUAD_NEG_W),
    );

    /// Builds a matrix from its columns.
    pub const fn from_columns(
        c0: Vector4<B>,
        c1: Vector4<B>,
        c2: Vector4<B>,
        c3: Vector4<B>,
    ) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Builds a matrix from its rows, in reading order.
    pub fn from_rows(r0: &Vector4<B>, r1: &Vector4<B>, r2: &Vector4<B>, r3: &Vector4<B>) -> Self {
        Self::from_columns(*r0, *r1, *r2, *r3).transposed()
    }

    /// Builds a matrix from sixteen floats, column after column.
    pub fn from_col_major(values: &[f32; 16]) -> Self {
        let col = |c: usize| {
            Vector4::new(values[c * 4], values[c * 4 + 1], values[c * 4 + 2], values[c * 4 + 3])
        };
        Self::from_columns(col(0), col(1), col(2), col(3))
    }

    /// Builds a matrix from sixteen floats, row after row.
    pub fn from_row_major(values: &[f32; 16]) -> Self {
        Self::from_col_major(values).transposed()
    }

    /// Loads from a column-major slice holding exactly sixteen floats.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        interchange::exact::<16>(values).map(|a| Self::from_col_major(&a))
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// Overwrites the element at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self[(row, col)] = value;
    }

    /// Element at `(R, C)` in lane storage; indices are checked at compile
    /// time.
    #[inline]
    pub fn get_elem<const R: usize, const C: usize>(&self) -> LaneFloat<B> {
        const { assert!(R < 4 && C < 4, "Matrix4 element out of range") };
        LaneFloat::new(self.cols[C][R])
    }

    /// Overwrites the element at `(R, C)`.
    #[inline]
    pub fn set_elem<const R: usize, const C: usize>(&mut self, s: LaneFloat<B>) {
        const { assert!(R < 4 && C < 4, "Matrix4 element out of range") };
        self.cols[C][R] = s.value();
    }

    /// Column `c`.
    #[inline]
    pub fn column(&self, c: usize) -> &Vector4<B> {
        check_lane(c, 4);
        &self.cols[c & 3]
    }

    /// Mutable column `c`.
    #[inline]
    pub fn column_mut(&mut self, c: usize) -> &mut Vector4<B> {
        check_lane(c, 4);
        &mut self.cols[c & 3]
    }

    /// Row `r`, gathered from the columns.
    pub fn row(&self, r: usize) -> Vector4<B> {
        check_lane(r, 4);
        let r = r & 3;
        Vector4::new(self.cols[0][r], self.cols[1][r], self.cols[2][r], self.cols[3][r])
    }

    /// Replaces column `c`.
    pub fn set_column(&mut self, c: usize, v: &Vector4<B>) {
        *self.column_mut(c) = *v;
    }

    /// Replaces row `r`.
    pub fn set_row(&mut self, r: usize, v: &Vector4<B>) {
        check_lane(r, 4);
        let r = r & 3;
        for (c, col) in self.cols.iter_mut().enumerate() {
            col[r] = v[c];
        }
    }

    /// All zeros.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Identity.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// `value` in every element.
    pub fn set_all(&mut self, value: LaneFloat<B>) {
        for col in &mut self.cols {
            col.set_all(value);
        }
    }

    /// Zeroes the matrix and writes `diag` on the diagonal.
    pub fn set_diagonal(&mut self, diag: &Vector4<B>) {
        *self = Self::from_columns(
            Vector4::UNIT_X * diag.get_elem::<0>(),
            Vector4::UNIT_Y * diag.get_elem::<1>(),
            Vector4::UNIT_Z * diag.get_elem::<2>(),
            Vector4::UNIT_W * diag.get_elem::<3>(),
        );
    }

    /// Whether every element is finite.
    pub fn is_ok(&self) -> bool {
        self.cols.iter().all(Vector4::is_ok)
    }

    // -- interchange ------------------------------------------------------

    /// Column-major floats.
    pub fn to_col_major(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        self.store_col_major(&mut out);
        out
    }

    /// Writes sixteen floats, column after column.
    pub fn store_col_major(&self, out: &mut [f32; 16]) {
        for (chunk, col) in out.chunks_exact_mut(4).zip(&self.cols) {
            chunk.copy_from_slice(&col.to_array());
        }
    }

    /// Writes sixteen floats, row after row.
    pub fn store_row_major(&self, out: &mut [f32; 16]) {
        self.transposed().store_col_major(out);
    }

    /// Writes one aligned quad per column.
    pub fn store_col_major_aligned(&self, out: &mut [Aligned4; 4]) {
        for (slot, col) in out.iter_mut().zip(&self.cols) {
            col.store_aligned(slot);
        }
    }

    /// Writes one aligned quad per row.
    pub fn store_row_major_aligned(&self, out: &mut [Aligned4; 4]) {
        self.transposed().store_col_major_aligned(out);
    }

    /// Reads sixteen floats, column after column.
    pub fn load_col_major(&mut self, src: &[f32; 16]) {
        *self = Self::from_col_major(src);
    }

    /// Reads sixteen floats, row after row.
    pub fn load_row_major(&mut self, src: &[f32; 16]) {
        *self = Self::from_row_major(src);
    }

    /// Reads one aligned quad per column.
    pub fn load_col_major_aligned(&mut self, src: &[Aligned4; 4]) {
        for (col, slot) in self.cols.iter_mut().zip(src) {
            col.load_aligned(slot);
        }
    }

    /// Reads one aligned quad per row.
    pub fn load_row_major_aligned(&mut self, src: &[Aligned4; 4]) {
        self.load_col_major_aligned(src);
        self.transpose();
    }

    // -- transforms -------------------------------------------------------

    /// `self * v` with `v.w` as stored.
    #[inline]
    pub fn transform(&self, v: &Vector4<B>) -> Vector4<B> {
        let q = v.quad();
        let [c0, c1, c2, c3] = self.cols;
        let x = Vector4::from_quad(B::broadcast(q, 0));
        let y = Vector4::from_quad(B::broadcast(q, 1));
        let z = Vector4::from_quad(B::broadcast(q, 2));
        let w = Vector4::from_quad(B::broadcast(q, 3));
        ((c0 * x + c1 * y) + c2 * z) + c3 * w
    }

    /// Transforms `v` as a point (`w = 1`); translation applies.
    pub fn transform_position(&self, v: &Vector4<B>) -> Vector4<B> {
        let mut p = *v;
        p[3] = 1.0;
        self.transform(&p)
    }

    /// Transforms `v` as a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, v: &Vector4<B>) -> Vector4<B> {
        let mut d = *v;
        d[3] = 0.0;
        self.transform(&d)
    }

    /// Same as [`Self::transform_position2`]: a `Vector2` carries no w, so it
    /// is read as a point in the `z = 0` plane.
    pub fn transform2(&self, v: &Vector2) -> Vector2 {
        self.transform_position2(v)
    }

    /// Transforms `(x, y, 0, 1)` and keeps x and y.
    pub fn transform_position2(&self, v: &Vector2) -> Vector2 {
        let r = self.transform(&Vector4::new(v.x, v.y, 0.0, 1.0));
        Vector2::new(r.x(), r.y())
    }

    /// Transforms `(x, y, 0, 0)` and keeps x and y.
    pub fn transform_direction2(&self, v: &Vector2) -> Vector2 {
        let r = self.transform(&Vector4::new(v.x, v.y, 0.0, 0.0));
        Vector2::new(r.x(), r.y())
    }

    // -- algebra ----------------------------------------------------------

    /// Transposed copy.
    pub fn transposed(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    fn elements(&self) -> [[f32; 4]; 4] {
        // a[row][col]
        [
            self.row(0).to_array(),
            self.row(1).to_array(),
            self.row(2).to_array(),
            self.row(3).to_array(),
        ]
    }

    /// Determinant.
    pub fn determinant(&self) -> f32 {
        Cofactors::new(&self.elements()).det
    }

    /// Inverse via cofactor expansion.
    ///
    /// A matrix with `|det| <= DETERMINANT_EPSILON` is a contract violation;
    /// with checks compiled out the result is whatever the division yields.
    pub fn inverse(&self) -> Self {
        let a = self.elements();
        let cof = Cofactors::new(&a);
        contract!(
            cof.det.abs() > DETERMINANT_EPSILON,
            "inverse of a singular matrix (det = {})",
            cof.det
        );
        cof.inverse(&a)
    }

    /// Inverse, or `None` when `|det| <= DETERMINANT_EPSILON`.
    pub fn try_inverse(&self) -> Option<Self> {
        let a = self.elements();
        let cof = Cofactors::new(&a);
        if cof.det.abs() > DETERMINANT_EPSILON {
            Some(cof.inverse(&a))
        } else {
            tracing::trace!(det = cof.det, "rejected singular matrix");
            None
        }
    }

    /// Inverts in place. See [`Self::inverse`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    // -- builders ---------------------------------------------------------

    /// Translation by the xyz of `t`.
    pub fn translation_v(t: &Vector4<B>) -> Self {
        Self::translation(t.x(), t.y(), t.z())
    }

    /// Translation by `(tx, ty, tz)`.
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_columns(
            Vector4::UNIT_X,
            Vector4::UNIT_Y,
            Vector4::UNIT_Z,
            Vector4::new(tx, ty, tz, 1.0),
        )
    }

    /// Scale by the xyz of `s`.
    pub fn scale_v(s: &Vector4<B>) -> Self {
        Self::scale(s.x(), s.y(), s.z())
    }

    /// Non-uniform scale.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut m = Self::ZERO;
        m.set_diagonal(&Vector4::new(sx, sy, sz, 1.0));
        m
    }

    /// Rotation of `rad` radians about +X.
    pub fn rotation_x(rad: f32) -> Self {
        let (s, c) = (scalar::sin(rad), scalar::cos(rad));
        Self::from_columns(
            Vector4::UNIT_X,
            Vector4::new(0.0, c, s, 0.0),
            Vector4::new(0.0, -s, c, 0.0),
            Vector4::UNIT_W,
        )
    }

    /// Rotation of `rad` radians about +Y.
    pub fn rotation_y(rad: f32) -> Self {
        let (s, c) = (scalar::sin(rad), scalar::cos(rad));
        Self::from_columns(
            Vector4::new(c, 0.0, -s, 0.0),
            Vector4::UNIT_Y,
            Vector4::new(s, 0.0, c, 0.0),
            Vector4::UNIT_W,
        )
    }

    /// Rotation of `rad` radians about +Z.
    pub fn rotation_z(rad: f32) -> Self {
        let (s, c) = (scalar::sin(rad), scalar::cos(rad));
        Self::from_columns(
            Vector4::new(c, s, 0.0, 0.0),
            Vector4::new(-s, c, 0.0, 0.0),
            Vector4::UNIT_Z,
            Vector4::UNIT_W,
        )
    }

    /// Rotation about a unit `axis` (xyz) by `rad` radians.
    pub fn rotation_axis_angle(axis: &Vector4<B>, rad: f32) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, rad))
    }

    /// Overwrites with a translation.
    pub fn make_translation(&mut self, t: &Vector4<B>) {
        *self = Self::translation_v(t);
    }

    /// Overwrites with a translation.
    pub fn make_translation_xyz(&mut self, tx: f32, ty: f32, tz: f32) {
        *self = Self::translation(tx, ty, tz);
    }

    /// Overwrites with a scale.
    pub fn make_scale(&mut self, s: &Vector4<B>) {
        *self = Self::scale_v(s);
    }

    /// Overwrites with a scale.
    pub fn make_scale_xyz(&mut self, sx: f32, sy: f32, sz: f32) {
        *self = Self::scale(sx, sy, sz);
    }

    /// Overwrites with a rotation about +X.
    pub fn make_rotation_x(&mut self, rad: f32) {
        *self = Self::rotation_x(rad);
    }

    /// Overwrites with a rotation about +Y.
    pub fn make_rotation_y(&mut self, rad: f32) {
        *self = Self::rotation_y(rad);
    }

    /// Overwrites with a rotation about +Z.
    pub fn make_rotation_z(&mut self, rad: f32) {
        *self = Self::rotation_z(rad);
    }

    /// Rotation matrix of `q`. `q` should be unit length.
    pub fn from_quaternion(q: &Quaternion<B>) -> Self {
        let [x, y, z, w] = q.to_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Self::from_columns(
            Vector4::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0),
            Vector4::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0),
            Vector4::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0),
            Vector4::UNIT_W,
        )
    }

    /// Overwrites with the rotation matrix of `q`.
    pub fn set_from_quaternion(&mut self, q: &Quaternion<B>) {
        *self = Self::from_quaternion(q);
    }

    /// Rotation part as a quaternion.
    ///
    /// The upper 3×3 must be a pure rotation. The sign of the result is
    /// whichever the branch on the largest diagonal term produces.
    pub fn to_quaternion(&self) -> Quaternion<B> {
        let m = self.elements();
        let trace = m[0][0] + m[1][1] + m[2][2];
        let (x, y, z, w);
        if trace > 0.0 {
            let s = scalar::sqrt(trace + 1.0) * 2.0;
            x = (m[2][1] - m[1][2]) / s;
            y = (m[0][2] - m[2][0]) / s;
            z = (m[1][0] - m[0][1]) / s;
            w = 0.25 * s;
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = scalar::sqrt(1.0 + m[0][0] - m[1][1] - m[2][2]) * 2.0;
            x = 0.25 * s;
            y = (m[0][1] + m[1][0]) / s;
            z = (m[0][2] + m[2][0]) / s;
            w = (m[2][1] - m[1][2]) / s;
        } else if m[1][1] > m[2][2] {
            let s = scalar::sqrt(1.0 + m[1][1] - m[0][0] - m[2][2]) * 2.0;
            x = (m[0][1] + m[1][0]) / s;
            y = 0.25 * s;
            z = (m[1][2] + m[2][1]) / s;
            w = (m[0][2] - m[2][0]) / s;
        } else {
            let s = scalar::sqrt(1.0 + m[2][2] - m[0][0] - m[1][1]) * 2.0;
            x = (m[0][2] + m[2][0]) / s;
            y = (m[1][2] + m[2][1]) / s;
            z = 0.25 * s;
            w = (m[1][0] - m[0][1]) / s;
        }
        Quaternion::new(x, y, z, w)
    }

    // -- predicates -------------------------------------------------------

    /// Exact equality of all sixteen elements.
    pub fn equals(&self, other: &Self) -> bool {
        self.cols.iter().zip(&other.cols).all(|(a, b)| a.equals4(b))
    }

    /// Equality within an absolute tolerance per element.
    pub fn equals_within(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.to_col_major()
            .iter()
            .zip(other.to_col_major().iter())
            .all(|(a, b)| scalar::float_equals(*a, *b, abs_tolerance))
    }

    /// Exact all-zero test.
    pub fn is_zero(&self) -> bool {
        self.equals(&Self::ZERO)
    }

    /// Exact identity test.
    pub fn is_identity(&self) -> bool {
        self.equals(&Self::IDENTITY)
    }

    /// Whether the bottom row is exactly `(0, 0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.row(3).equals4(&Vector4::UNIT_W)
    }

    /// Whether the bottom row is within `tolerance` of `(0, 0, 0, 1)`.
    pub fn is_affine_within(&self, tolerance: f32) -> bool {
        let [a, b, c, d] = self.row(3).to_array();
        a.abs() <= tolerance
            && b.abs() <= tolerance
            && c.abs() <= tolerance
            && (d - 1.0).abs() <= tolerance
    }
}

/// 2×2 sub-determinants of the top and bottom row pairs, shared by the
/// determinant and the inverse.
struct Cofactors {
    s: [f32; 6],
    c: [f32; 6],
    det: f32,
}

impl Cofactors {
    fn new(a: &[[f32; 4]; 4]) -> Self {
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0];
        Self { s, c, det }
    }

    fn inverse<B: Lanes>(&self, a: &[[f32; 4]; 4]) -> Matrix4<B> {
        let (s, c) = (&self.s, &self.c);
        let i = 1.0 / self.det;
        let b = [
            [
                (a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * i,
                (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * i,
                (a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * i,
                (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * i,
            ],
            [
                (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * i,
                (a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * i,
                (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * i,
                (a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * i,
            ],
            [
                (a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * i,
                (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * i,
                (a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * i,
                (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * i,
            ],
            [
                (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * i,
                (a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * i,
                (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * i,
                (a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * i,
            ],
        ];
        let row = |r: usize| Vector4::from_array(b[r]);
        Matrix4::from_rows(&row(0), &row(1), &row(2), &row(3))
    }
}

impl<B: Lanes> Default for Matrix4<B> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<B: Lanes> fmt::Debug for Matrix4<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix4")
            .field("rows", &self.elements())
            .finish()
    }
}

impl<B: Lanes> PartialEq for Matrix4<B> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<B: Lanes> Index<(usize, usize)> for Matrix4<B> {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        check_lane(row, 4);
        &self.column(col)[row & 3]
    }
}

impl<B: Lanes> IndexMut<(usize, usize)> for Matrix4<B> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        check_lane(row, 4);
        &mut self.column_mut(col)[row & 3]
    }
}

impl<B: Lanes> Add for Matrix4<B> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.cols;
        let [b0, b1, b2, b3] = rhs.cols;
        Self::from_columns(a0 + b0, a1 + b1, a2 + b2, a3 + b3)
    }
}

impl<B: Lanes> Sub for Matrix4<B> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.cols;
        let [b0, b1, b2, b3] = rhs.cols;
        Self::from_columns(a0 - b0, a1 - b1, a2 - b2, a3 - b3)
    }
}

impl<B: Lanes> Mul for Matrix4<B> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let [b0, b1, b2, b3] = rhs.cols;
        Self::from_columns(
            self.transform(&b0),
            self.transform(&b1),
            self.transform(&b2),
            self.transform(&b3),
        )
    }
}

impl<B: Lanes> Mul<Vector4<B>> for Matrix4<B> {
    type Output = Vector4<B>;
    fn mul(self, v: Vector4<B>) -> Vector4<B> {
        self.transform(&v)
    }
}

impl<B: Lanes> Mul<LaneFloat<B>> for Matrix4<B> {
    type Output = Self;
    fn mul(self, s: LaneFloat<B>) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        Self::from_columns(c0 * s, c1 * s, c2 * s, c3 * s)
    }
}

impl<B: Lanes> Mul<f32> for Matrix4<B> {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        self * LaneFloat::new(s)
    }
}

impl<B: Lanes> Mul<Matrix4<B>> for LaneFloat<B> {
    type Output = Matrix4<B>;
    fn mul(self, m: Matrix4<B>) -> Matrix4<B> {
        m * self
    }
}

impl<B: Lanes> Mul<Matrix4<B>> for f32 {
    type Output = Matrix4<B>;
    fn mul(self, m: Matrix4<B>) -> Matrix4<B> {
        m * self
    }
}

impl<B: Lanes> Neg for Matrix4<B> {
    type Output = Self;
    fn neg(self) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        Self::from_columns(-c0, -c1, -c2, -c3)
    }
}

impl<B: Lanes> AddAssign for Matrix4<B> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<B: Lanes> SubAssign for Matrix4<B> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<B: Lanes> MulAssign for Matrix4<B> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<B: Lanes> MulAssign<LaneFloat<B>> for Matrix4<B> {
    fn mul_assign(&mut self, s: LaneFloat<B>) {
        *self = *self * s;
    }
}

impl<B: Lanes> MulAssign<f32> for Matrix4<B> {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

#[cfg(feature = "serde")]
impl<B: Lanes> serde::Serialize for Matrix4<B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_col_major(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Lanes> serde::Deserialize<'de> for Matrix4<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f32; 16] as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(|a| Self::from_col_major(&a))
    }
}
