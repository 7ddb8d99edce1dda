#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::wide::{join, mul_add_128, split};

/// 128-bit LCG multiplier.
pub const MULTIPLIER: u128 = 0x2360ed051fc65da44385df649fccf645;

/// 128-bit LCG increment, the default PCG stream.
pub const INCREMENT: u128 = 0x5851f42d4c957f2d14057b7ef767814f;

/// PCG64 (XSL RR 128/64) by Melissa O'Neill. 64-bit output, 128-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Pcg64 {
    /// LCG state, high 64 bits.
    hi: u64,
    /// LCG state, low 64 bits.
    lo: u64,
}

impl Pcg64 {

    /// Creates a new PCG64 RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new PCG64 RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Pcg64 { hi: 0, lo: 0 };
        rng.seed(seed);
        rng
    }

    /// Creates a PCG64 RNG from raw 128-bit state. Every state is valid.
    pub fn from_state(state: u128) -> Self {
        let (hi, lo) = split(state);
        Pcg64 { hi, lo }
    }

    /// Returns the raw 128-bit state.
    #[inline]
    pub fn state(&self) -> u128 {
        join(self.hi, self.lo)
    }

    /// Reseeds. The LCG is stepped once from zero, the seed is added,
    /// and it is stepped once more.
    pub fn seed(&mut self, seed: i64) {
        // A step from zero lands on the increment.
        (self.hi, self.lo) = split(INCREMENT.wrapping_add(seed as u64 as u128));
        self.step();
    }

    /// Advances to the next state.
    #[inline]
    fn step(&mut self) {
        (self.hi, self.lo) = mul_add_128((self.hi, self.lo), split(MULTIPLIER), split(INCREMENT));
    }

    /// Returns the current 64-bit output.
    #[inline]
    fn get(&self) -> u64 {
        // Fold the state in half, then rotate by its top 6 bits.
        (self.hi ^ self.lo).rotate_right((self.hi >> 58) as u32)
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step();
        self.get()
    }

    /// Jumps forward by the given number of steps.
    /// The cycle wraps around, so `delta.wrapping_neg()` jumps backward.
    pub fn advance(&mut self, delta: u128) {
        let state = crate::lcg::get_state(MULTIPLIER, INCREMENT, self.state(), delta);
        (self.hi, self.lo) = split(state);
    }

    /// Returns how many steps `other` is ahead of `self`.
    pub fn distance(&self, other: &Pcg64) -> u128 {
        crate::lcg::get_iterations(MULTIPLIER, INCREMENT, self.state(), other.state())
    }
}

crate::impl_generator!(Pcg64);
