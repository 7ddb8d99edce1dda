use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::SplitMix64;

/// Long lag of the recurrence x[n] = x[n - 55] + x[n - 24].
pub const LONG_LAG: usize = 55;

/// Short lag of the recurrence.
pub const SHORT_LAG: usize = 24;

/// Ring buffer size. A power of two so cursors wrap with a mask.
pub const SIZE: usize = 64;

const MASK: usize = SIZE - 1;

/// Additive lagged Fibonacci RNG with lags (55, 24). 64-bit output,
/// a 64-word ring and two cursors. Period is at least 2**55 - 1
/// as long as some word in the lag window is odd.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Lfib64 {
    #[cfg_attr(feature = "serde", serde(with = "table"))]
    table: [u64; SIZE],
    /// Position of x[n - 24].
    short: usize,
    /// Position of x[n - 55].
    long: usize,
}

impl Lfib64 {

    /// Creates a new lagged Fibonacci RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new lagged Fibonacci RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Lfib64 { table: [0; SIZE], short: 0, long: 0 };
        rng.seed(seed);
        rng
    }

    /// Creates a lagged Fibonacci RNG from a raw table,
    /// ordered from oldest to newest word.
    /// At least one of the newest 55 words must be odd.
    pub fn from_table(table: [u64; SIZE]) -> Self {
        Lfib64 { table, short: SIZE - SHORT_LAG, long: SIZE - LONG_LAG }
    }

    /// Reseeds. The table is filled from SplitMix64 and
    /// the oldest word in the lag window is made odd.
    pub fn seed(&mut self, seed: i64) {
        let mut mixer = SplitMix64::from_seed(seed);
        for x in self.table.iter_mut() {
            *x = mixer.next_u64();
        }
        self.short = SIZE - SHORT_LAG;
        self.long = SIZE - LONG_LAG;
        self.table[self.long] |= 1;
    }

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (short, long) = (self.short & MASK, self.long & MASK);
        let x = self.table[short] + self.table[long];
        // x[n - 64] is the one word no longer needed.
        self.table[(long + LONG_LAG) & MASK] = x;
        self.short = (short + 1) & MASK;
        self.long = (long + 1) & MASK;
        x
    }
}

crate::impl_generator!(Lfib64);

/// The table is larger than serde's built-in array support,
/// so it is written as a fixed-length tuple.
#[cfg(feature = "serde")]
mod table {
    use super::SIZE;
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(table: &[u64; SIZE], serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(SIZE)?;
        for x in table {
            tuple.serialize_element(x)?;
        }
        tuple.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u64; SIZE], D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = [u64; SIZE];

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "an array of {} words", SIZE)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut table = [0u64; SIZE];
                for (i, x) in table.iter_mut().enumerate() {
                    *x = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_tuple(SIZE, TableVisitor)
    }
}
