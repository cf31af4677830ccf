// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! SSE lanes for `x86_64`.
//!
//! SSE2 is part of the `x86_64` baseline, so every intrinsic used here is
//! available without runtime detection. Nothing past SSE2 is used (no
//! `_mm_dp_ps`, no `_mm_floor_ps`).
//!
//! `Single` values are kept replicated across all four lanes so they can be
//! mixed with quad arithmetic without a shuffle.

// Newer toolchains make most register-only intrinsics safe to call.
#![allow(unused_unsafe)]

use core::arch::x86_64::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_and_ps, _mm_andnot_ps, _mm_castsi128_ps, _mm_cmpeq_ps,
    _mm_cmpge_ps, _mm_cmpgt_ps, _mm_cmple_ps, _mm_cmplt_ps, _mm_cmpneq_ps, _mm_cvtss_f32,
    _mm_div_ps, _mm_max_ps, _mm_min_ps, _mm_movehl_ps, _mm_movemask_ps, _mm_mul_ps, _mm_or_ps,
    _mm_set1_ps, _mm_setr_epi32, _mm_setr_ps, _mm_shuffle_ps, _mm_sqrt_ps, _mm_sub_ps,
    _mm_xor_ps,
};

use super::{Cmp, Lanes};

/// `_MM_SHUFFLE(w, z, y, x)` as a const.
#[allow(clippy::cast_possible_wrap)]
const fn shuffle(x: u32, y: u32, z: u32, w: u32) -> i32 {
    ((w << 6) | (z << 4) | (y << 2) | x) as i32
}

const YZXW: i32 = shuffle(1, 2, 0, 3);
const ZXYW: i32 = shuffle(2, 0, 1, 3);
const YXWZ: i32 = shuffle(1, 0, 3, 2);

const fn quad(x: f32, y: f32, z: f32, w: f32) -> __m128 {
    // SAFETY: `__m128` is sixteen bytes holding four `f32`s in lane order.
    unsafe { core::mem::transmute::<[f32; 4], __m128>([x, y, z, w]) }
}

const SIGN_BITS: __m128 = quad(-0.0, -0.0, -0.0, -0.0);

#[inline]
fn mask_lanes(bits: u8) -> __m128 {
    let lane = |bit: u8| if bits & bit != 0 { -1_i32 } else { 0 };
    unsafe { _mm_castsi128_ps(_mm_setr_epi32(lane(1), lane(2), lane(4), lane(8))) }
}

/// SSE2 backend: one `__m128` per quad.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sse;

impl Lanes for Sse {
    type Quad = __m128;
    type Single = __m128;
    type RawMask = __m128;

    const NAME: &'static str = "sse";
    const QUAD_ZERO: __m128 = quad(0.0, 0.0, 0.0, 0.0);
    const QUAD_ONE: __m128 = quad(1.0, 1.0, 1.0, 1.0);
    const QUAD_X: __m128 = quad(1.0, 0.0, 0.0, 0.0);
    const QUAD_Y: __m128 = quad(0.0, 1.0, 0.0, 0.0);
    const QUAD_Z: __m128 = quad(0.0, 0.0, 1.0, 0.0);
    const QUAD_W: __m128 = quad(0.0, 0.0, 0.0, 1.0);
    const QUAD_NEG_X: __m128 = quad(-1.0, 0.0, 0.0, 0.0);
    const QUAD_NEG_Y: __m128 = quad(0.0, -1.0, 0.0, 0.0);
    const QUAD_NEG_Z: __m128 = quad(0.0, 0.0, -1.0, 0.0);
    const QUAD_NEG_W: __m128 = quad(0.0, 0.0, 0.0, -1.0);

    #[inline]
    fn set(x: f32, y: f32, z: f32, w: f32) -> __m128 {
        unsafe { _mm_setr_ps(x, y, z, w) }
    }

    #[inline]
    fn splat(v: f32) -> __m128 {
        unsafe { _mm_set1_ps(v) }
    }

    #[inline]
    fn to_array(q: __m128) -> [f32; 4] {
        bytemuck::cast(q)
    }

    #[inline]
    fn from_array(a: [f32; 4]) -> __m128 {
        bytemuck::cast(a)
    }

    #[inline]
    fn lanes(q: &__m128) -> &[f32; 4] {
        bytemuck::cast_ref(q)
    }

    #[inline]
    fn lanes_mut(q: &mut __m128) -> &mut [f32; 4] {
        bytemuck::cast_mut(q)
    }

    #[inline]
    fn broadcast(q: __m128, i: usize) -> __m128 {
        unsafe {
            match i & 3 {
                0 => _mm_shuffle_ps::<0x00>(q, q),
                1 => _mm_shuffle_ps::<0x55>(q, q),
                2 => _mm_shuffle_ps::<0xAA>(q, q),
                _ => _mm_shuffle_ps::<0xFF>(q, q),
            }
        }
    }

    #[inline]
    fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline]
    fn sub(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_sub_ps(a, b) }
    }

    #[inline]
    fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline]
    fn div(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_div_ps(a, b) }
    }

    #[inline]
    fn neg(a: __m128) -> __m128 {
        unsafe { _mm_xor_ps(a, SIGN_BITS) }
    }

    #[inline]
    fn abs(a: __m128) -> __m128 {
        unsafe { _mm_andnot_ps(SIGN_BITS, a) }
    }

    #[inline]
    fn min(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_min_ps(a, b) }
    }

    #[inline]
    fn max(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_max_ps(a, b) }
    }

    #[inline]
    fn sqrt(a: __m128) -> __m128 {
        unsafe { _mm_sqrt_ps(a) }
    }

    #[inline]
    fn dot3(a: __m128, b: __m128) -> __m128 {
        let m = unsafe { _mm_and_ps(_mm_mul_ps(a, b), mask_lanes(0b0111)) };
        horizontal_sum(m)
    }

    #[inline]
    fn dot4(a: __m128, b: __m128) -> __m128 {
        horizontal_sum(unsafe { _mm_mul_ps(a, b) })
    }

    #[inline]
    fn cross(a: __m128, b: __m128) -> __m128 {
        unsafe {
            let a_yzx = _mm_shuffle_ps::<YZXW>(a, a);
            let b_zxy = _mm_shuffle_ps::<ZXYW>(b, b);
            let a_zxy = _mm_shuffle_ps::<ZXYW>(a, a);
            let b_yzx = _mm_shuffle_ps::<YZXW>(b, b);
            let c = _mm_sub_ps(_mm_mul_ps(a_yzx, b_zxy), _mm_mul_ps(a_zxy, b_yzx));
            _mm_and_ps(c, mask_lanes(0b0111))
        }
    }

    #[inline]
    fn compare(a: __m128, b: __m128, op: Cmp) -> __m128 {
        unsafe {
            match op {
                Cmp::Eq => _mm_cmpeq_ps(a, b),
                Cmp::Ne => _mm_cmpneq_ps(a, b),
                Cmp::Lt => _mm_cmplt_ps(a, b),
                Cmp::Gt => _mm_cmpgt_ps(a, b),
                Cmp::Le => _mm_cmple_ps(a, b),
                Cmp::Ge => _mm_cmpge_ps(a, b),
            }
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn mask_bits(m: __m128) -> u8 {
        (unsafe { _mm_movemask_ps(m) } & 0xF) as u8
    }

    #[inline]
    fn mask_from_bits(bits: u8) -> __m128 {
        mask_lanes(bits)
    }

    #[inline]
    fn mask_and(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_and_ps(a, b) }
    }

    #[inline]
    fn mask_or(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_or_ps(a, b) }
    }

    #[inline]
    fn mask_xor(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_xor_ps(a, b) }
    }

    #[inline]
    fn select(m: __m128, a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_or_ps(_mm_and_ps(m, a), _mm_andnot_ps(m, b)) }
    }

    #[inline]
    fn single(v: f32) -> __m128 {
        Self::splat(v)
    }

    #[inline]
    fn single_value(s: __m128) -> f32 {
        unsafe { _mm_cvtss_f32(s) }
    }

    #[inline]
    fn single_to_quad(s: __m128) -> __m128 {
        s
    }

    #[inline]
    fn quad_lane(q: __m128, i: usize) -> __m128 {
        Self::broadcast(q, i)
    }

    #[inline]
    fn single_add(a: __m128, b: __m128) -> __m128 {
        Self::add(a, b)
    }

    #[inline]
    fn single_sub(a: __m128, b: __m128) -> __m128 {
        Self::sub(a, b)
    }

    #[inline]
    fn single_mul(a: __m128, b: __m128) -> __m128 {
        Self::mul(a, b)
    }

    #[inline]
    fn single_div(a: __m128, b: __m128) -> __m128 {
        Self::div(a, b)
    }

    #[inline]
    fn single_neg(a: __m128) -> __m128 {
        Self::neg(a)
    }

    #[inline]
    fn single_abs(a: __m128) -> __m128 {
        Self::abs(a)
    }

    #[inline]
    fn single_min(a: __m128, b: __m128) -> __m128 {
        Self::min(a, b)
    }

    #[inline]
    fn single_max(a: __m128, b: __m128) -> __m128 {
        Self::max(a, b)
    }

    #[inline]
    fn single_sqrt(a: __m128) -> __m128 {
        Self::sqrt(a)
    }

    #[inline]
    fn single_compare(a: __m128, b: __m128, op: Cmp) -> __m128 {
        unsafe { _mm_and_ps(Self::compare(a, b, op), mask_lanes(0b0001)) }
    }
}

/// `(x + y) + (z + w)` replicated into every lane.
#[inline]
fn horizontal_sum(m: __m128) -> __m128 {
    unsafe {
        let swapped = _mm_shuffle_ps::<YXWZ>(m, m);
        let pairs = _mm_add_ps(m, swapped);
        let upper = _mm_movehl_ps(swapped, pairs);
        let total = _mm_add_ss(pairs, upper);
        _mm_shuffle_ps::<0x00>(total, total)
    }
}
