use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::wide::{join, mul_wide, split};

/// 128-bit LCG multiplier.
pub const MULTIPLIER: u128 = 0x0fc94e3bf4e9ab32866458cd56f5e605;

/// Truncated 128-bit multiplicative LCG. 64-bit output, 128-bit state.
/// The output is the high half of the state;
/// the low bits of an LCG have short periods and are discarded.
/// The state must be odd, which gives a period of 2**126.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Lcg128 {
    /// LCG state, high 64 bits.
    hi: u64,
    /// LCG state, low 64 bits.
    lo: u64,
}

impl Lcg128 {

    /// Creates a new LCG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new LCG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Lcg128 { hi: 0, lo: 1 };
        rng.seed(seed);
        rng
    }

    /// Creates an LCG from raw state words. The low word must be odd.
    pub fn from_state(hi: u64, lo: u64) -> Self {
        Lcg128 { hi, lo }
    }

    /// Returns the raw state as (hi, lo).
    #[inline]
    pub fn state(&self) -> (u64, u64) {
        (self.hi, self.lo)
    }

    /// Reseeds. The seed goes into the high word and the low word is set to 1,
    /// so every seed gets the full period.
    pub fn seed(&mut self, seed: i64) {
        self.hi = seed as u64;
        self.lo = 1;
    }

    /// Advances to the next state.
    #[wrappit] #[inline]
    fn step(&mut self) {
        let (m_hi, m_lo) = split(MULTIPLIER);
        // Only the low word product needs the full 128 bits.
        let (carry, lo) = mul_wide(m_lo, self.lo);
        self.hi = m_hi * self.lo + self.hi * m_lo + carry;
        self.lo = lo;
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step();
        self.hi
    }

    /// Jumps forward by the given number of steps.
    /// The cycle wraps around, so `delta.wrapping_neg()` jumps backward.
    pub fn advance(&mut self, delta: u128) {
        let state = crate::lcg::get_state(MULTIPLIER, 0, join(self.hi, self.lo), delta);
        (self.hi, self.lo) = split(state);
    }
}

crate::impl_generator!(Lcg128);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn published_vector() {
        let expected: [u64; 15] = [
            0x0fc94e3bf4e9ab32, 0x9f4c53132cb5b55a, 0x04f16bbaa6c209fe,
            0x9c0827f89f0f242f, 0x5b5349ddf2ca0286, 0x9a09a2d3e4f52267,
            0xf4e9e997e821367b, 0xd23cf34fc72f4155, 0x56a2d7e343d7f1b5,
            0x73b5f20e34a8238c, 0xae9a39664ecf3934, 0xe6f5736f43e75071,
            0xf10b6472f469fe94, 0xede9c4aaef957022, 0x8b321466f467bfe0,
        ];
        let mut rng = Lcg128::from_state(0, 1);
        for x in expected {
            assert_eq!(x, rng.next_u64());
        }
        // Seed 0 starts from the same state.
        let mut rng = Lcg128::from_seed(0);
        assert_eq!((0, 1), rng.state());
        for x in expected {
            assert_eq!(x, rng.next_u64());
        }
    }

    #[test] pub fn seeded_vector() {
        let mut rng = Lcg128::from_seed(42);
        for x in [0x1c3fdfec39416804, 0x9a5ace7b970b1174, 0x31ebc5c14c0e3280] {
            assert_eq!(x, rng.next_u64());
        }
        let mut rng = Lcg128::from_seed(-1);
        for x in [0x8964f56e9df3c52d, 0x3de45c53bc76b941, 0x28718e28351ba781] {
            assert_eq!(x, rng.next_u64());
        }
    }

    #[test] pub fn steps_agree_with_u128() {
        let mut rng = Lcg128::from_seed(0x5eed);
        let mut state = join(0x5eed, 1);
        for _ in 0 .. 1 << 10 {
            state = state.wrapping_mul(MULTIPLIER);
            assert_eq!((state >> 64) as u64, rng.next_u64());
        }
        assert_eq!(split(state), rng.state());
    }

    #[test] pub fn advance_equals_steps() {
        let mut rng = Lcg128::from_seed(3);
        let mut stepped = rng.clone();
        for _ in 0 .. 1000 { stepped.next_u64(); }
        rng.advance(1000);
        assert_eq!(stepped, rng);
        rng.advance(1u128 << 127);
        rng.advance(1u128 << 127);
        assert_eq!(stepped, rng);
        rng.advance(1000u128.wrapping_neg());
        assert_eq!(Lcg128::from_seed(3), rng);
    }

    #[test] pub fn low_word_stays_odd() {
        for seed in [0, 1, -1, i64::MIN, i64::MAX] {
            let mut rng = Lcg128::new();
            rng.next_u64();
            rng.seed(seed);
            assert_eq!(seed as u64, rng.state().0);
            for _ in 0 .. 16 {
                assert_eq!(1, rng.state().1 & 1);
                rng.next_u64();
            }
        }
    }

    #[test] pub fn zero_state_is_fixed_point() {
        let mut rng = Lcg128::from_state(0, 0);
        for _ in 0 .. 4 {
            assert_eq!(0, rng.next_u64());
        }
    }
}
