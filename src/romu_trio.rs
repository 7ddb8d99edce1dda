use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::SplitMix64;

/// RomuTrio multiplier.
pub const MULTIPLIER: u64 = 0xd3833e804f4c574b;

/// RomuTrio by Mark Overton. 64-bit output, 192-bit state.
/// A nonlinear generator; the all-zero state is a fixed point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct RomuTrio {
    x: u64,
    y: u64,
    z: u64,
}

impl RomuTrio {

    /// Creates a new RomuTrio RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new RomuTrio RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = RomuTrio { x: 0, y: 0, z: 0 };
        rng.seed(seed);
        rng
    }

    /// Creates a RomuTrio RNG from raw state. The state must not be all zero.
    pub fn from_state(x: u64, y: u64, z: u64) -> Self {
        RomuTrio { x, y, z }
    }

    /// Returns the raw state as (x, y, z).
    #[inline]
    pub fn state(&self) -> (u64, u64, u64) {
        (self.x, self.y, self.z)
    }

    /// Reseeds from three SplitMix64 outputs, at most one of which can be zero.
    /// The first output is discarded because it is the seeded x word itself.
    pub fn seed(&mut self, seed: i64) {
        let mut mixer = SplitMix64::from_seed(seed);
        self.x = mixer.next_u64();
        self.y = mixer.next_u64();
        self.z = mixer.next_u64();
        self.next_u64();
    }

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (xp, yp, zp) = (self.x, self.y, self.z);
        self.x = zp * MULTIPLIER;
        self.y = (yp - xp).rotate_left(12);
        self.z = (zp - yp).rotate_left(44);
        xp
    }
}

crate::impl_generator!(RomuTrio);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn seeded_vector() {
        let mut rng = RomuTrio::from_seed(0);
        for x in [0xc1cc42549db92725, 0x4146e3f31ae77dcc, 0x2f88d4d817738522, 0x1fb8b1f1ee753247, 0x833405accf63f908, 0xbe11a37893becea8] {
            assert_eq!(x, rng.next_u64());
        }
    }

    #[test] pub fn first_output_is_not_the_seed_word() {
        let mut rng = RomuTrio::from_seed(0);
        assert_ne!(SplitMix64::from_seed(0).next_u64(), rng.next_u64());
    }

    #[test] pub fn zero_state_is_fixed_point() {
        let mut rng = RomuTrio::from_state(0, 0, 0);
        for _ in 0 .. 8 {
            assert_eq!(0, rng.next_u64());
        }
        rng.seed(0);
        assert_ne!((0, 0, 0), rng.state());
    }

    #[test] pub fn multiplier_matches_decimal_constant() {
        assert_eq!(15241094284759029579, MULTIPLIER);
    }
}
