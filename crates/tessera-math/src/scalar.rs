// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar math helpers.
//!
//! Transcendentals go through `libm` so results do not depend on the host
//! C library. Everything here is a pure function of its arguments; the
//! optional lookup-table trig lives in [`crate::MathContext`].

/// π
pub const PI: f32 = core::f32::consts::PI;
/// 2π
pub const TWO_PI: f32 = core::f32::consts::TAU;
/// π/2
pub const PI_OVER_TWO: f32 = core::f32::consts::FRAC_PI_2;
/// π/4
pub const PI_OVER_FOUR: f32 = core::f32::consts::FRAC_PI_4;
/// 1/π
pub const ONE_OVER_PI: f32 = core::f32::consts::FRAC_1_PI;
/// 1/(2π)
pub const ONE_OVER_TWO_PI: f32 = 0.5 * core::f32::consts::FRAC_1_PI;
/// Degrees to radians factor.
pub const DEG2RAD: f32 = PI / 180.0;
/// Radians to degrees factor.
pub const RAD2DEG: f32 = 180.0 / PI;
/// ln 2
pub const LOG2: f32 = core::f32::consts::LN_2;

/// Sine.
#[inline]
pub fn sin(x: f32) -> f32 {
    libm::sinf(x)
}

/// Cosine.
#[inline]
pub fn cos(x: f32) -> f32 {
    libm::cosf(x)
}

/// Tangent.
#[inline]
pub fn tan(x: f32) -> f32 {
    libm::tanf(x)
}

/// Arc sine; inputs outside `[-1, 1]` produce NaN.
#[inline]
pub fn asin(x: f32) -> f32 {
    libm::asinf(x)
}

/// Arc cosine; inputs outside `[-1, 1]` produce NaN.
#[inline]
pub fn acos(x: f32) -> f32 {
    libm::acosf(x)
}

/// Arc tangent.
#[inline]
pub fn atan(x: f32) -> f32 {
    libm::atanf(x)
}

/// Four-quadrant arc tangent of `y / x`.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    libm::atan2f(y, x)
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * DEG2RAD
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * RAD2DEG
}

/// Wraps an angle into `[-π, π)`.
///
/// Non-finite inputs are returned unchanged.
pub fn wrap_angle(x: f32) -> f32 {
    if !x.is_finite() {
        return x;
    }
    if (-PI..PI).contains(&x) {
        return x;
    }
    let wrapped = x - TWO_PI * libm::floorf((x + PI) * ONE_OVER_TWO_PI);
    // Rounding can land exactly on the open end.
    if wrapped >= PI {
        wrapped - TWO_PI
    } else {
        wrapped
    }
}

/// `|x - y| <= abs_tolerance`
#[inline]
pub fn float_equals(x: f32, y: f32, abs_tolerance: f32) -> bool {
    (x - y).abs() <= abs_tolerance
}

/// Mixed tolerance: equal when within `abs_tolerance`, or within
/// `rel_tolerance` scaled by the larger magnitude.
pub fn float_equals_rel(x: f32, y: f32, abs_tolerance: f32, rel_tolerance: f32) -> bool {
    let diff = (x - y).abs();
    diff <= abs_tolerance || diff <= rel_tolerance * x.abs().max(y.abs())
}

/// Absolute value.
#[inline]
pub fn abs(x: f32) -> f32 {
    x.abs()
}

/// Smaller of two values.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// Larger of two values.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

/// Clamps `x` into `[lo, hi]`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    min(max(x, lo), hi)
}

/// Clamps into `[0, 1]`.
#[inline]
pub fn saturate(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// `1.0`, `-1.0`, or `0.0` (also for NaN).
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f32) -> f32 {
    libm::floorf(x)
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f32) -> f32 {
    libm::ceilf(x)
}

/// `x` raised to `power`.
#[inline]
pub fn pow(x: f32, power: f32) -> f32 {
    libm::powf(x, power)
}

/// `x` raised to an integer power by repeated squaring.
pub fn powi(x: f32, power: i32) -> f32 {
    let mut base = if power < 0 { 1.0 / x } else { x };
    let mut n = power.unsigned_abs();
    let mut acc = 1.0;
    while n > 0 {
        if n & 1 == 1 {
            acc *= base;
        }
        base *= base;
        n >>= 1;
    }
    acc
}

/// Whether `x` is a power of two. Zero is not.
#[inline]
pub fn is_power_of_two(x: u32) -> bool {
    x.is_power_of_two()
}

/// The power of two closest to `x`; ties round up.
///
/// Zero maps to one and values above `2^31` saturate to `2^31`.
pub fn nearest_power_of_two(x: u32) -> u32 {
    const TOP: u32 = 1 << 31;
    if x <= 1 {
        return 1;
    }
    let Some(up) = x.checked_next_power_of_two() else {
        return TOP;
    };
    if up == x {
        return x;
    }
    let down = up >> 1;
    if x - down < up - x {
        down
    } else {
        up
    }
}

/// Square root. Negative inputs produce NaN.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    libm::sqrtf(x)
}

/// `1 / sqrt(x)`
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}

/// Bit-trick reciprocal square root with one Newton step.
///
/// Relative error stays under `2e-3` for positive normal inputs. Negative
/// inputs produce a meaningless value, never a panic.
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Natural logarithm.
#[inline]
pub fn log(x: f32) -> f32 {
    libm::logf(x)
}

/// Base-2 logarithm.
#[inline]
pub fn log2(x: f32) -> f32 {
    libm::log2f(x)
}

/// Logarithm of `x` in base `n`.
#[inline]
pub fn log_n(x: f32, n: f32) -> f32 {
    libm::logf(x) / libm::logf(n)
}

/// `a + (b - a) * t`; `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite interpolation between `a` and `b`; `t` is clamped into `[0, 1]`.
pub fn smooth_step(a: f32, b: f32, t: f32) -> f32 {
    let t = saturate(t);
    lerp(a, b, t * t * (3.0 - 2.0 * t))
}

/// Quintic interpolation with zero first and second derivatives at the ends.
pub fn smoother_step(a: f32, b: f32, t: f32) -> f32 {
    let t = saturate(t);
    lerp(a, b, t * t * t * (t * (t * 6.0 - 15.0) + 10.0))
}
