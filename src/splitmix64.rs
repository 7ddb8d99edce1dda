use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Weyl sequence increment, the golden ratio scaled to 64 bits.
pub const INCREMENT: u64 = 0x9e3779b97f4a7c15;

/// SplitMix64 by Sebastiano Vigna. 64-bit output, 64-bit state.
/// Every state is valid, so it is also used to expand a 64-bit seed
/// into the larger states of the other generators.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct SplitMix64 {
    /// Weyl sequence state.
    state: u64,
}

/// The SplitMix64 output hash. Bijective.
#[wrappit] #[inline]
pub fn mix(x: u64) -> u64 {
    let x = (x ^ (x >> 30)) * 0xbf58476d1ce4e5b9;
    let x = (x ^ (x >> 27)) * 0x94d049bb133111eb;
    x ^ (x >> 31)
}

impl SplitMix64 {

    /// Creates a new SplitMix64 RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new SplitMix64 RNG. The seed is copied into the state.
    pub fn from_seed(seed: i64) -> Self {
        SplitMix64 { state: seed as u64 }
    }

    /// Creates a SplitMix64 RNG from raw state.
    pub fn from_state(state: u64) -> Self {
        SplitMix64 { state }
    }

    /// Returns the raw state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Reseeds. All seeds work equally well.
    #[inline]
    pub fn seed(&mut self, seed: i64) {
        self.state = seed as u64;
    }

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // Only the output is hashed, the state itself is a plain counter.
        self.state += INCREMENT;
        mix(self.state)
    }
}

crate::impl_generator!(SplitMix64);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn published_vector() {
        let expected: [u64; 15] = [
            0xe220a8397b1dcdaf, 0x6e789e6aa1b965f4, 0x06c45d188009454f,
            0xf88bb8a8724c81ec, 0x1b39896a51a8749b, 0x53cb9f0c747ea2ea,
            0x2c829abe1f4532e1, 0xc584133ac916ab3c, 0x3ee5789041c98ac3,
            0xf3b8488c368cb0a6, 0x657eecdd3cb13d09, 0xc2d326e0055bdef6,
            0x8621a03fe0bbdb7b, 0x8e1f7555983aa92f, 0xb54e0f1600cc4d19,
        ];
        let mut rng = SplitMix64::from_seed(0);
        for x in expected {
            assert_eq!(x, rng.next_u64());
        }
        assert_eq!(15u64.wrapping_mul(INCREMENT), rng.state());
    }

    #[test] pub fn seeded_vector() {
        let mut rng = SplitMix64::from_seed(12345);
        assert_eq!(0x22118258a9d111a0, rng.next_u64());
        assert_eq!(0x346edce5f713f8ed, rng.next_u64());
        assert_eq!(0x1e9a57bc80e6721d, rng.next_u64());
    }

    #[test] pub fn reseed_restarts_stream() {
        let mut rng = SplitMix64::new();
        let first = rng.next_u64();
        rng.next_u64();
        rng.seed(0);
        assert_eq!(first, rng.next_u64());
        rng.seed(-1);
        assert_eq!(u64::MAX, SplitMix64::from_seed(-1).state());
        assert_eq!(mix(u64::MAX.wrapping_add(INCREMENT)), rng.next_u64());
    }
}
