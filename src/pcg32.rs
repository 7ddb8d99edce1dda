use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// LCG multiplier.
pub const MULTIPLIER: u64 = 0x5851f42d4c957f2d;

/// LCG increment, the default PCG stream.
pub const INCREMENT: u64 = 0x14057b7ef767814f;

/// PCG32 (XSH RR 64/32) by Melissa O'Neill. 32-bit output, 64-bit state.
/// 64-bit numbers are made from two consecutive 32-bit outputs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Pcg32 {
    /// LCG state.
    state: u64,
}

impl Pcg32 {

    /// Creates a new PCG32 RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new PCG32 RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Pcg32 { state: 0 };
        rng.seed(seed);
        rng
    }

    /// Creates a PCG32 RNG from raw state. Every state is valid.
    pub fn from_state(state: u64) -> Self {
        Pcg32 { state }
    }

    /// Returns the raw state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Reseeds. The first output is discarded,
    /// as it is just a permutation of the seed.
    pub fn seed(&mut self, seed: i64) {
        self.state = seed as u64;
        self.next_u32();
    }

    /// Generates the next 32-bit random number.
    #[wrappit] #[inline]
    pub fn next_u32(&mut self) -> u32 {
        // The output is computed from the old state, which lets the
        // permutation run in parallel with the LCG multiply.
        let p = self.state;
        self.state = p * MULTIPLIER + INCREMENT;
        let x = (((p >> 18) ^ p) >> 27) as u32;
        // Rotation by the top 5 bits of state.
        x.rotate_right((p >> 59) as u32)
    }

    /// Generates the next 64-bit random number.
    /// The first 32-bit output goes into the low half.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Jumps forward by the given number of 32-bit outputs.
    /// The cycle wraps around, so `delta.wrapping_neg()` jumps backward.
    pub fn advance(&mut self, delta: u64) {
        self.state = crate::lcg::get_state_64(MULTIPLIER, INCREMENT, self.state, delta);
    }

    /// Returns how many 32-bit outputs `other` is ahead of `self`.
    pub fn distance(&self, other: &Pcg32) -> u64 {
        crate::lcg::get_iterations_64(MULTIPLIER, INCREMENT, self.state, other.state)
    }
}

crate::impl_generator!(Pcg32, u32);
