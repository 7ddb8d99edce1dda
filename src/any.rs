//! Generator selection by name.
//!
//! [`Algorithm`] names every generator in the crate, and [`AnySource`] holds
//! one of them behind a single type. Dispatch is a `match`, so no boxing or
//! allocation is needed and the crate stays usable without `std`.

use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Lcg128, Lfib64, Msws, Mwc128, Pcg32, Pcg64, RomuTrio, Sfc64, SplitMix64, Xoshiro256ss};

/// Available generator algorithms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Truncated 128-bit multiplicative LCG
    Lcg128,
    /// SplitMix64
    SplitMix64,
    /// xoshiro256**, with jump-ahead
    Xoshiro256ss,
    /// PCG XSH RR 64/32
    Pcg32,
    /// PCG XSL RR 128/64
    Pcg64,
    /// Middle Square Weyl Sequence
    Msws,
    /// RomuTrio
    RomuTrio,
    /// Additive lagged Fibonacci (55, 24)
    Lfib64,
    /// Multiply-with-carry, 128-bit state
    Mwc128,
    /// Small Fast Chaotic
    Sfc64,
}

/// Error returned when an algorithm name is not recognized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unknown algorithm name")]
pub struct ParseAlgorithmError;

impl Algorithm {
    /// All algorithms, in catalogue order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Lcg128,
        Algorithm::SplitMix64,
        Algorithm::Xoshiro256ss,
        Algorithm::Pcg32,
        Algorithm::Pcg64,
        Algorithm::Msws,
        Algorithm::RomuTrio,
        Algorithm::Lfib64,
        Algorithm::Mwc128,
        Algorithm::Sfc64,
    ];

    /// Stable lowercase name, accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lcg128 => "lcg128",
            Algorithm::SplitMix64 => "splitmix64",
            Algorithm::Xoshiro256ss => "xoshiro256ss",
            Algorithm::Pcg32 => "pcg32",
            Algorithm::Pcg64 => "pcg64",
            Algorithm::Msws => "msws",
            Algorithm::RomuTrio => "romutrio",
            Algorithm::Lfib64 => "lfib64",
            Algorithm::Mwc128 => "mwc128",
            Algorithm::Sfc64 => "sfc64",
        }
    }

    /// One-line summary for listings.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Lcg128 => "128-bit multiplicative LCG, high 64 bits of state",
            Algorithm::SplitMix64 => "SplitMix64, 64-bit Weyl sequence with output hash",
            Algorithm::Xoshiro256ss => "xoshiro256**, 256-bit state, jump-ahead",
            Algorithm::Pcg32 => "PCG XSH RR 64/32, two outputs per 64 bits",
            Algorithm::Pcg64 => "PCG XSL RR 128/64",
            Algorithm::Msws => "Middle Square Weyl Sequence, two outputs per 64 bits",
            Algorithm::RomuTrio => "RomuTrio, 192-bit nonlinear state",
            Algorithm::Lfib64 => "additive lagged Fibonacci, lags 55 and 24",
            Algorithm::Mwc128 => "multiply-with-carry, 128-bit state",
            Algorithm::Sfc64 => "Small Fast Chaotic, 256-bit state with counter",
        }
    }

    /// Whether the algorithm supports `jump` and `long_jump`.
    pub fn supports_jump(self) -> bool {
        matches!(self, Algorithm::Xoshiro256ss)
    }

    /// Creates a generator of this algorithm seeded with `seed`.
    pub fn seeded(self, seed: i64) -> AnySource {
        match self {
            Algorithm::Lcg128 => AnySource::Lcg128(Lcg128::from_seed(seed)),
            Algorithm::SplitMix64 => AnySource::SplitMix64(SplitMix64::from_seed(seed)),
            Algorithm::Xoshiro256ss => AnySource::Xoshiro256ss(Xoshiro256ss::from_seed(seed)),
            Algorithm::Pcg32 => AnySource::Pcg32(Pcg32::from_seed(seed)),
            Algorithm::Pcg64 => AnySource::Pcg64(Pcg64::from_seed(seed)),
            Algorithm::Msws => AnySource::Msws(Msws::from_seed(seed)),
            Algorithm::RomuTrio => AnySource::RomuTrio(RomuTrio::from_seed(seed)),
            Algorithm::Lfib64 => AnySource::Lfib64(Lfib64::from_seed(seed)),
            Algorithm::Mwc128 => AnySource::Mwc128(Mwc128::from_seed(seed)),
            Algorithm::Sfc64 => AnySource::Sfc64(Sfc64::from_seed(seed)),
        }
    }
}

impl Algorithm {
    /// Creates an unseeded generator with all-zero raw state, for the
    /// algorithms where that state is meaningful to stream as is.
    /// The all-zero `Lcg128` is its fixed point and outputs only zeros.
    /// Returns `None` for the other algorithms, whose zero state is
    /// degenerate or unreachable.
    pub fn zero_state(self) -> Option<AnySource> {
        match self {
            Algorithm::Lcg128 => Some(AnySource::Lcg128(Lcg128::from_state(0, 0))),
            Algorithm::SplitMix64 => Some(AnySource::SplitMix64(SplitMix64::from_state(0))),
            Algorithm::Pcg32 => Some(AnySource::Pcg32(Pcg32::from_state(0))),
            Algorithm::Pcg64 => Some(AnySource::Pcg64(Pcg64::from_state(0))),
            _ => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a name case-insensitively. A few common aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(algorithm) = Algorithm::ALL.into_iter().find(|a| a.name().eq_ignore_ascii_case(s)) {
            return Ok(algorithm);
        }
        const ALIASES: [(&str, Algorithm); 8] = [
            ("lcg", Algorithm::Lcg128),
            ("xoshiro", Algorithm::Xoshiro256ss),
            ("xoshiro256**", Algorithm::Xoshiro256ss),
            ("romu", Algorithm::RomuTrio),
            ("lfib", Algorithm::Lfib64),
            ("mwc", Algorithm::Mwc128),
            ("sfc", Algorithm::Sfc64),
            ("splitmix", Algorithm::SplitMix64),
        ];
        ALIASES
            .into_iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|(_, algorithm)| algorithm)
            .ok_or(ParseAlgorithmError)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any generator of the crate, selected at run time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnySource {
    Lcg128(Lcg128),
    SplitMix64(SplitMix64),
    Xoshiro256ss(Xoshiro256ss),
    Pcg32(Pcg32),
    Pcg64(Pcg64),
    Msws(Msws),
    RomuTrio(RomuTrio),
    Lfib64(Lfib64),
    Mwc128(Mwc128),
    Sfc64(Sfc64),
}

macro_rules! dispatch {
    ($source:expr, $rng:ident => $body:expr) => {
        match $source {
            AnySource::Lcg128($rng) => $body,
            AnySource::SplitMix64($rng) => $body,
            AnySource::Xoshiro256ss($rng) => $body,
            AnySource::Pcg32($rng) => $body,
            AnySource::Pcg64($rng) => $body,
            AnySource::Msws($rng) => $body,
            AnySource::RomuTrio($rng) => $body,
            AnySource::Lfib64($rng) => $body,
            AnySource::Mwc128($rng) => $body,
            AnySource::Sfc64($rng) => $body,
        }
    };
}

impl AnySource {

    /// Returns the algorithm of the wrapped generator.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnySource::Lcg128(_) => Algorithm::Lcg128,
            AnySource::SplitMix64(_) => Algorithm::SplitMix64,
            AnySource::Xoshiro256ss(_) => Algorithm::Xoshiro256ss,
            AnySource::Pcg32(_) => Algorithm::Pcg32,
            AnySource::Pcg64(_) => Algorithm::Pcg64,
            AnySource::Msws(_) => Algorithm::Msws,
            AnySource::RomuTrio(_) => Algorithm::RomuTrio,
            AnySource::Lfib64(_) => Algorithm::Lfib64,
            AnySource::Mwc128(_) => Algorithm::Mwc128,
            AnySource::Sfc64(_) => Algorithm::Sfc64,
        }
    }

    /// Returns the wrapped generator if it can jump ahead.
    pub fn as_xoshiro256ss_mut(&mut self) -> Option<&mut Xoshiro256ss> {
        match self {
            AnySource::Xoshiro256ss(rng) => Some(rng),
            _ => None,
        }
    }

    /// Reseeds the wrapped generator, keeping the algorithm.
    #[inline]
    pub fn seed(&mut self, seed: i64) {
        dispatch!(self, rng => rng.seed(seed))
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        dispatch!(self, rng => rng.next_u64())
    }

    /// Returns a non-negative 63-bit number, `next_u64() >> 1`.
    #[inline]
    pub fn next_i63(&mut self) -> i64 {
        dispatch!(self, rng => rng.next_i63())
    }
}

impl crate::Source64 for AnySource {
    #[inline]
    fn seed(&mut self, seed: i64) {
        AnySource::seed(self, seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        AnySource::next_u64(self)
    }
}

impl crate::RngCore for AnySource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, rng => crate::RngCore::next_u32(rng))
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        AnySource::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dispatch!(self, rng => crate::RngCore::fill_bytes(rng, dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), crate::Error> {
        crate::RngCore::fill_bytes(self, dest);
        Ok(())
    }
}
