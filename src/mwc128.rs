use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::SplitMix64;
use crate::wide::{add_carry, mul_wide};

/// MWC multiplier. The modulus MULTIPLIER * 2**64 - 1 is prime.
pub const MULTIPLIER: u64 = 0xffebb71d94fcdaf9;

/// Multiply-with-carry RNG by Sebastiano Vigna. 64-bit output, 128-bit state.
/// The carry must start in 0 < c < MULTIPLIER - 1; the states (0, 0) and
/// (2**64 - 1, MULTIPLIER - 1) are fixed points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Mwc128 {
    /// Lag-1 word.
    x: u64,
    /// Carry.
    c: u64,
}

impl Mwc128 {

    /// Creates a new MWC RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new MWC RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Mwc128 { x: 0, c: 1 };
        rng.seed(seed);
        rng
    }

    /// Creates an MWC RNG from raw state. The carry must satisfy 0 < c < MULTIPLIER - 1.
    pub fn from_state(x: u64, c: u64) -> Self {
        Mwc128 { x, c }
    }

    /// Returns the raw state as (x, c).
    #[inline]
    pub fn state(&self) -> (u64, u64) {
        (self.x, self.c)
    }

    /// Reseeds from two SplitMix64 outputs.
    /// The carry keeps 63 bits, plus one, which puts it in range.
    /// The first output is discarded because it is the seeded x word itself.
    pub fn seed(&mut self, seed: i64) {
        let mut mixer = SplitMix64::from_seed(seed);
        self.x = mixer.next_u64();
        self.c = (mixer.next_u64() >> 1) + 1;
        self.next_u64();
    }

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = self.x;
        // MULTIPLIER * x + c < MULTIPLIER * 2**64, so the high word never overflows.
        let (hi, lo) = mul_wide(MULTIPLIER, self.x);
        let (lo, carry) = add_carry(lo, self.c, 0);
        self.x = lo;
        self.c = hi + carry;
        result
    }
}

crate::impl_generator!(Mwc128);
