use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::SplitMix64;

/// Odd Weyl sequence increment.
pub const WEYL: u64 = 0xb5ad4eceda1ce2a9;

/// Middle Square Weyl Sequence RNG by Bernard Widynski.
/// 32-bit output, 192-bit state. 64-bit numbers are made
/// from two consecutive 32-bit outputs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Msws {
    /// Middle square state.
    x: u64,
    /// Weyl sequence.
    w: u64,
    /// Weyl increment, must be odd.
    s: u64,
}

impl Msws {

    /// Creates a new MSWS RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new MSWS RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Msws { x: 0, w: 0, s: WEYL };
        rng.seed(seed);
        rng
    }

    /// Creates an MSWS RNG from raw state.
    /// The Weyl increment `s` must be odd and should have
    /// a good mix of zero and one bits.
    pub fn from_state(x: u64, w: u64, s: u64) -> Self {
        Msws { x, w, s }
    }

    /// Returns the raw state as (x, w, s).
    #[inline]
    pub fn state(&self) -> (u64, u64, u64) {
        (self.x, self.w, self.s)
    }

    /// Reseeds. The Weyl sequence and the square are drawn from SplitMix64,
    /// the increment is the fixed odd constant.
    pub fn seed(&mut self, seed: i64) {
        let mut mixer = SplitMix64::from_seed(seed);
        self.w = mixer.next_u64();
        self.x = mixer.next_u64();
        self.s = WEYL;
    }

    /// Generates the next 32-bit random number.
    #[wrappit] #[inline]
    pub fn next_u32(&mut self) -> u32 {
        // The Weyl sequence keeps the square from collapsing to zero.
        let w = self.w + self.s;
        let x = (self.x * self.x + w).rotate_left(32);
        self.w = w;
        self.x = x;
        x as u32
    }

    /// Generates the next 64-bit random number.
    /// The first 32-bit output goes into the low half.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }
}

crate::impl_generator!(Msws, u32);
