//! Assorted small non-cryptographic random number generators.
//!
//! Every generator is a plain value seeded from a single `i64`. It is driven
//! through the inherent `next_u64`, which is the fast path, or generically
//! through [`Source64`], [`AnySource`] or the re-exported `rand_core` traits.
//! None of these generators is suitable for cryptography.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod any;
#[cfg(feature = "std")]
pub mod dump;
pub mod lcg;
pub mod lcg128;
pub mod lfib64;
pub mod msws;
pub mod mwc128;
pub mod pcg32;
pub mod pcg64;
pub mod romu_trio;
pub mod sfc64;
pub mod splitmix64;
pub mod wide;
pub mod xoshiro256ss;

pub use any::*;
pub use lcg128::Lcg128;
pub use lfib64::Lfib64;
pub use msws::Msws;
pub use mwc128::Mwc128;
pub use pcg32::Pcg32;
pub use pcg64::Pcg64;
pub use romu_trio::RomuTrio;
pub use sfc64::Sfc64;
pub use splitmix64::SplitMix64;
pub use xoshiro256ss::Xoshiro256ss;
pub use rand_core::*;

/// A seedable source of 64-bit random numbers.
///
/// Concrete generators implement the same methods inherently, so calls on a
/// known type compile to direct calls. This trait is for code that wants to
/// stay generic over the generator, including through `dyn Source64`.
pub trait Source64 {
    /// Reinitializes the whole state from the seed. All seeds are valid.
    fn seed(&mut self, seed: i64);

    /// Advances by one step and returns the output.
    fn next_u64(&mut self) -> u64;

    /// Returns a non-negative 63-bit number, `next_u64() >> 1`.
    #[inline]
    fn next_i63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }
}

impl<S: Source64 + ?Sized> Source64 for &mut S {
    #[inline]
    fn seed(&mut self, seed: i64) {
        (**self).seed(seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_i63(&mut self) -> i64 {
        (**self).next_i63()
    }
}

/// Fills `dest` with successive outputs of `next`, always Little-Endian.
#[inline]
pub(crate) fn fill_bytes_le(dest: &mut [u8], mut next: impl FnMut() -> u64) {
    let bytes = dest.len();
    let mut i = 0;
    while i < bytes {
        let x = next();
        let j = bytes.min(i + 8);
        dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
        i = j;
    }
}

/// Implements the shared plumbing of a generator type with inherent
/// `seed`, `from_seed` and `next_u64` methods: `next_i63`, `Default`,
/// a `Debug` that does not expose internal state, `Source64`,
/// and the `rand_core` traits. The `u32` form is for generators
/// whose primitive output is 32 bits wide.
macro_rules! impl_generator {
    ($name:ident) => {
        $crate::impl_generator!(@common $name);

        impl $crate::RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $name::next_u64(self) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $name::next_u64(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::fill_bytes_le(dest, || $name::next_u64(self))
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), $crate::Error> {
                $crate::RngCore::fill_bytes(self, dest);
                Ok(())
            }
        }
    };

    ($name:ident, u32) => {
        $crate::impl_generator!(@common $name);

        impl $crate::RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $name::next_u32(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $name::next_u64(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::fill_bytes_le(dest, || $name::next_u64(self))
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), $crate::Error> {
                $crate::RngCore::fill_bytes(self, dest);
                Ok(())
            }
        }
    };

    (@common $name:ident) => {
        impl $name {
            /// Returns a non-negative 63-bit number, `next_u64() >> 1`.
            #[inline]
            pub fn next_i63(&mut self) -> i64 {
                ($name::next_u64(self) >> 1) as i64
            }
        }

        impl Default for $name {
            /// Equivalent to seeding with 0.
            fn default() -> Self {
                $name::from_seed(0)
            }
        }

        // As recommended, this Debug implementation does not expose internal state.
        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), " {{}}"))
            }
        }

        impl $crate::Source64 for $name {
            #[inline]
            fn seed(&mut self, seed: i64) {
                $name::seed(self, seed)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $name::next_u64(self)
            }
        }

        impl $crate::SeedableRng for $name {
            type Seed = [u8; 8];

            /// The seed bytes are read as a Little-Endian `i64`.
            fn from_seed(seed: Self::Seed) -> Self {
                $name::from_seed(i64::from_le_bytes(seed))
            }
        }
    };
}

pub(crate) use impl_generator;
