use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Outputs discarded after seeding, enough to escape
/// the correlated state a = b = c.
pub const WARMUP: usize = 12;

/// Small Fast Chaotic RNG by Chris Doty-Humphrey. 64-bit output, 256-bit state.
/// The counter guarantees a minimum period of 2**64.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Sfc64 {
    a: u64,
    b: u64,
    c: u64,
    counter: u64,
}

impl Sfc64 {

    /// Creates a new SFC RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new SFC RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Sfc64 { a: 0, b: 0, c: 0, counter: 0 };
        rng.seed(seed);
        rng
    }

    /// Creates an SFC RNG from raw state. Every state is valid.
    pub fn from_state(a: u64, b: u64, c: u64, counter: u64) -> Self {
        Sfc64 { a, b, c, counter }
    }

    /// Returns the raw state as (a, b, c, counter).
    #[inline]
    pub fn state(&self) -> (u64, u64, u64, u64) {
        (self.a, self.b, self.c, self.counter)
    }

    /// Reseeds. The seed fills all three chaotic words,
    /// then the first outputs are discarded.
    pub fn seed(&mut self, seed: i64) {
        let seed = seed as u64;
        self.a = seed;
        self.b = seed;
        self.c = seed;
        self.counter = 1;
        for _ in 0 .. WARMUP {
            self.next_u64();
        }
    }

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (a, b, c, counter) = (self.a, self.b, self.c, self.counter);
        let result = a + b + counter;
        self.counter = counter + 1;
        self.a = b ^ (b >> 11);
        // c + (c << 3)
        self.b = c * 9;
        self.c = c.rotate_left(24) + result;
        result
    }
}

crate::impl_generator!(Sfc64);
