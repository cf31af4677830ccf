// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Portable scalar lanes.

use bytemuck::{Pod, Zeroable};

use super::{Cmp, Lanes};

/// Four `f32` lanes with the same size and alignment as an SSE register.
#[repr(C, align(16))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Quad4(pub [f32; 4]);

const fn quad(x: f32, y: f32, z: f32, w: f32) -> Quad4 {
    Quad4([x, y, z, w])
}

#[inline]
fn map(a: Quad4, f: impl Fn(f32) -> f32) -> Quad4 {
    Quad4(a.0.map(f))
}

#[inline]
fn zip(a: Quad4, b: Quad4, f: impl Fn(f32, f32) -> f32) -> Quad4 {
    Quad4([f(a.0[0], b.0[0]), f(a.0[1], b.0[1]), f(a.0[2], b.0[2]), f(a.0[3], b.0[3])])
}

// SSE ordering semantics: the second operand wins unless the comparison holds.
#[inline]
fn sse_min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

#[inline]
fn sse_max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Plain `f32` backend, available on every target.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Portable;

impl Lanes for Portable {
    type Quad = Quad4;
    type Single = f32;
    type RawMask = u8;

    const NAME: &'static str = "portable";
    const QUAD_ZERO: Quad4 = quad(0.0, 0.0, 0.0, 0.0);
    const QUAD_ONE: Quad4 = quad(1.0, 1.0, 1.0, 1.0);
    const QUAD_X: Quad4 = quad(1.0, 0.0, 0.0, 0.0);
    const QUAD_Y: Quad4 = quad(0.0, 1.0, 0.0, 0.0);
    const QUAD_Z: Quad4 = quad(0.0, 0.0, 1.0, 0.0);
    const QUAD_W: Quad4 = quad(0.0, 0.0, 0.0, 1.0);
    const QUAD_NEG_X: Quad4 = quad(-1.0, 0.0, 0.0, 0.0);
    const QUAD_NEG_Y: Quad4 = quad(0.0, -1.0, 0.0, 0.0);
    const QUAD_NEG_Z: Quad4 = quad(0.0, 0.0, -1.0, 0.0);
    const QUAD_NEG_W: Quad4 = quad(0.0, 0.0, 0.0, -1.0);

    #[inline]
    fn set(x: f32, y: f32, z: f32, w: f32) -> Quad4 {
        quad(x, y, z, w)
    }

    #[inline]
    fn splat(v: f32) -> Quad4 {
        Quad4([v; 4])
    }

    #[inline]
    fn to_array(q: Quad4) -> [f32; 4] {
        q.0
    }

    #[inline]
    fn from_array(a: [f32; 4]) -> Quad4 {
        Quad4(a)
    }

    #[inline]
    fn lanes(q: &Quad4) -> &[f32; 4] {
        &q.0
    }

    #[inline]
    fn lanes_mut(q: &mut Quad4) -> &mut [f32; 4] {
        &mut q.0
    }

    #[inline]
    fn broadcast(q: Quad4, i: usize) -> Quad4 {
        Quad4([q.0[i & 3]; 4])
    }

    #[inline]
    fn add(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, |x, y| x + y)
    }

    #[inline]
    fn sub(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, |x, y| x - y)
    }

    #[inline]
    fn mul(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, |x, y| x * y)
    }

    #[inline]
    fn div(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, |x, y| x / y)
    }

    #[inline]
    fn neg(a: Quad4) -> Quad4 {
        map(a, |x| -x)
    }

    #[inline]
    fn abs(a: Quad4) -> Quad4 {
        map(a, f32::abs)
    }

    #[inline]
    fn min(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, sse_min)
    }

    #[inline]
    fn max(a: Quad4, b: Quad4) -> Quad4 {
        zip(a, b, sse_max)
    }

    #[inline]
    fn sqrt(a: Quad4) -> Quad4 {
        map(a, f32::sqrt)
    }

    #[inline]
    fn dot3(a: Quad4, b: Quad4) -> Quad4 {
        let [ax, ay, az, _] = a.0;
        let [bx, by, bz, _] = b.0;
        Self::splat((ax * bx + ay * by) + az * bz)
    }

    #[inline]
    fn dot4(a: Quad4, b: Quad4) -> Quad4 {
        let [ax, ay, az, aw] = a.0;
        let [bx, by, bz, bw] = b.0;
        Self::splat((ax * bx + ay * by) + (az * bz + aw * bw))
    }

    #[inline]
    fn cross(a: Quad4, b: Quad4) -> Quad4 {
        let [ax, ay, az, _] = a.0;
        let [bx, by, bz, _] = b.0;
        quad(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx, 0.0)
    }

    #[inline]
    fn compare(a: Quad4, b: Quad4, op: Cmp) -> u8 {
        let mut bits = 0;
        for i in 0..4 {
            if op.eval(a.0[i], b.0[i]) {
                bits |= 1 << i;
            }
        }
        bits
    }

    #[inline]
    fn mask_bits(m: u8) -> u8 {
        m & 0xF
    }

    #[inline]
    fn mask_from_bits(bits: u8) -> u8 {
        bits & 0xF
    }

    #[inline]
    fn mask_and(a: u8, b: u8) -> u8 {
        a & b
    }

    #[inline]
    fn mask_or(a: u8, b: u8) -> u8 {
        a | b
    }

    #[inline]
    fn mask_xor(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn select(m: u8, a: Quad4, b: Quad4) -> Quad4 {
        let pick = |i: usize| if m & (1 << i) != 0 { a.0[i] } else { b.0[i] };
        quad(pick(0), pick(1), pick(2), pick(3))
    }

    #[inline]
    fn single(v: f32) -> f32 {
        v
    }

    #[inline]
    fn single_value(s: f32) -> f32 {
        s
    }

    #[inline]
    fn single_to_quad(s: f32) -> Quad4 {
        Self::splat(s)
    }

    #[inline]
    fn quad_lane(q: Quad4, i: usize) -> f32 {
        q.0[i & 3]
    }

    #[inline]
    fn single_add(a: f32, b: f32) -> f32 {
        a + b
    }

    #[inline]
    fn single_sub(a: f32, b: f32) -> f32 {
        a - b
    }

    #[inline]
    fn single_mul(a: f32, b: f32) -> f32 {
        a * b
    }

    #[inline]
    fn single_div(a: f32, b: f32) -> f32 {
        a / b
    }

    #[inline]
    fn single_neg(a: f32) -> f32 {
        -a
    }

    #[inline]
    fn single_abs(a: f32) -> f32 {
        a.abs()
    }

    #[inline]
    fn single_min(a: f32, b: f32) -> f32 {
        sse_min(a, b)
    }

    #[inline]
    fn single_max(a: f32, b: f32) -> f32 {
        sse_max(a, b)
    }

    #[inline]
    fn single_sqrt(a: f32) -> f32 {
        a.sqrt()
    }

    #[inline]
    fn single_compare(a: f32, b: f32, op: Cmp) -> u8 {
        u8::from(op.eval(a, b))
    }
}
