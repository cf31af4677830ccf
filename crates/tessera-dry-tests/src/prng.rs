// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Seeded random source for fixtures.

/// Seeded `xoroshiro128+` generator for reproducible fixtures.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences on every platform, so a failing
///   parity case can be replayed from its seed alone.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

/// Seed used by fixtures that do not take one.
pub const DEFAULT_SEED: u64 = 0x7e55_e7a0_0000_0001;

impl Prng {
    /// Constructs a generator from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a generator from one seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm = seed;
        Self::from_seed(splitmix64(&mut sm), splitmix64(&mut sm))
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Next 32-bit output (the high half of [`Self::next_u64`]).
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Next float in `[0, 1)`, built from the high 23 bits of the state.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Next float in `[min, max)`.
    pub fn next_f32_in(&mut self, min: f32, max: f32) -> f32 {
        assert!(min <= max, "invalid range: {min}..{max}");
        min + (max - min) * self.next_f32()
    }

    /// Next integer in `[0, bound)` via rejection sampling.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "empty range");
        let bound = u64::from(bound);
        let zone = u64::MAX - u64::MAX % bound;
        loop {
            let candidate = self.next_u64();
            if candidate < zone {
                #[allow(clippy::cast_possible_truncation)]
                return (candidate % bound) as u32;
            }
        }
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}
