use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::SplitMix64;

// Xoshiro256** features
// -design by David Blackman and Sebastiano Vigna
// -64-bit output, 256-bit state, period 2**256 - 1
// -the state transition is linear over GF(2), so the generator
//  can jump ahead by 2**128 or 2**192 steps at the cost of 256 steps
// -the all-zero state is a fixed point and must never be entered

/// Jump polynomial for 2**128 steps, low word first.
pub const JUMP: [u64; 4] = [0x180ec6d33cfd0aba, 0xd5a61266f0c9392c, 0xa9582618e03fc9aa, 0x39abdc4529b1661c];

/// Jump polynomial for 2**192 steps, low word first.
pub const LONG_JUMP: [u64; 4] = [0x76e15d3efefdcbbf, 0xc5004e441c522fb3, 0x77710069854ee241, 0x39109bb02acbe635];

/// Xoshiro256** non-cryptographic RNG. 64-bit output, 256-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xoshiro256ss {
    s: [u64; 4],
}

impl Xoshiro256ss {

    /// Creates a new Xoshiro256** RNG seeded with 0.
    pub fn new() -> Self {
        Self::from_seed(0)
    }

    /// Creates a new Xoshiro256** RNG. All seeds work equally well.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = Xoshiro256ss { s: [0; 4] };
        rng.seed(seed);
        rng
    }

    /// Creates a Xoshiro256** RNG from raw state.
    /// The state must not be all zero.
    pub fn from_state(s: [u64; 4]) -> Self {
        Xoshiro256ss { s }
    }

    /// Returns the raw state.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Reseeds from four consecutive SplitMix64 outputs.
    /// SplitMix64 hashes distinct counter values bijectively,
    /// so at most one of the words can be zero.
    pub fn seed(&mut self, seed: i64) {
        let mut mixer = SplitMix64::from_seed(seed);
        for x in self.s.iter_mut() {
            *x = mixer.next_u64();
        }
    }

    /// Advances to the next state.
    #[inline]
    fn step(&mut self) {
        // Later updates read words that have already been updated.
        let [s0, s1, s2, s3] = self.s;
        let t = s1 << 17;
        let s2 = s2 ^ s0;
        let s3 = s3 ^ s1;
        let s1 = s1 ^ s2;
        let s0 = s0 ^ s3;
        let s2 = s2 ^ t;
        let s3 = s3.rotate_left(45);
        self.s = [s0, s1, s2, s3];
    }

    /// Returns the scrambled output of the current state.
    #[wrappit] #[inline]
    fn get(&self) -> u64 {
        (self.s[1] * 5).rotate_left(7) * 9
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let x = self.get();
        self.step();
        x
    }

    /// Advances the state by 2**128 steps.
    /// Calling this k times from one seed yields 2**64 non-overlapping
    /// subsequences for parallel use.
    pub fn jump(&mut self) {
        self.jump_by(&JUMP);
    }

    /// Advances the state by 2**192 steps.
    /// Each long jump spans 2**64 ordinary jumps.
    pub fn long_jump(&mut self) {
        self.jump_by(&LONG_JUMP);
    }

    /// Evaluates the jump polynomial at the transition matrix,
    /// one coefficient per step, lowest degree first.
    fn jump_by(&mut self, polynomial: &[u64; 4]) {
        let mut accumulator = [0u64; 4];
        for &word in polynomial {
            for bit in 0 .. 64 {
                if (word >> bit) & 1 == 1 {
                    for (a, s) in accumulator.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.step();
            }
        }
        self.s = accumulator;
    }
}

crate::impl_generator!(Xoshiro256ss);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn published_vector() {
        // The poor initial output shows why raw states need care.
        let expected: [u64; 15] = [
            0x0000000000002d00, 0x0000000000000000, 0x000000005a007080,
            0x10e0000000009d80, 0x10e0b61ce1009d80, 0x0870021ce143ad00,
            0xe071c3c2e143f089, 0x75a1690ef7a20380, 0x9309685b465c23f9,
            0x284f3cc2e13e3c88, 0xc8d749005a413820, 0x1194b410fef20904,
            0xb54a54470263b28c, 0x959e65495daf641c, 0xe561ccecea17f527,
        ];
        let mut rng = Xoshiro256ss::from_state([1, 2, 3, 4]);
        for x in expected {
            assert_eq!(x, rng.next_u64());
        }
    }

    #[test] pub fn seeded_vector() {
        let mut rng = Xoshiro256ss::from_seed(0);
        assert_eq!([0xe220a8397b1dcdaf, 0x6e789e6aa1b965f4, 0x06c45d188009454f, 0xf88bb8a8724c81ec], rng.state());
        assert_eq!(0x99ec5f36cb75f2b4, rng.next_u64());
        assert_eq!(0xbf6e1f784956452a, rng.next_u64());
        assert_eq!(0x1a5f849d4933e6e0, rng.next_u64());
        assert_eq!(0x6aa594f1262d2d2c, rng.next_u64());
    }

    #[test] pub fn jump_vectors() {
        let mut rng = Xoshiro256ss::from_state([1, 2, 3, 4]);
        rng.jump();
        assert_eq!([0x8c7a153956b5f3d1, 0x701f1a713401d85e, 0x6527f66a65469085, 0x8386b786c4408050], rng.state());
        for x in [0xbbd2f312298443d8, 0x62e57db2d5706577, 0x34d1890374a6d72b, 0xa0425028ca8b66a0, 0x986a928c99a10251] {
            assert_eq!(x, rng.next_u64());
        }

        let mut rng = Xoshiro256ss::from_state([1, 2, 3, 4]);
        rng.long_jump();
        for x in [0x527752a1d792704d, 0xd8d8bdec57599e64, 0x601cb926727eb003, 0xe0cd980a84253102, 0xe9b0eff2a3c1375f] {
            assert_eq!(x, rng.next_u64());
        }

        let mut rng = Xoshiro256ss::from_seed(0);
        rng.jump();
        assert_eq!(0x376215edc846d62c, rng.next_u64());
        assert_eq!(0x57c0611de8350ca7, rng.next_u64());
        assert_eq!(0xbc46a3515afee385, rng.next_u64());
    }

    #[test] pub fn monomial_jump_equals_steps() {
        // The polynomial x**k jumps exactly k steps.
        for k in [0usize, 1, 5, 63, 64, 100, 255] {
            let mut polynomial = [0u64; 4];
            polynomial[k >> 6] = 1 << (k & 63);
            let mut jumped = Xoshiro256ss::from_seed(k as i64);
            let mut stepped = jumped.clone();
            jumped.jump_by(&polynomial);
            for _ in 0 .. k { stepped.next_u64(); }
            assert_eq!(stepped, jumped);
            assert_eq!(stepped.next_u64(), jumped.next_u64());
        }
    }

    #[test] pub fn jump_is_linear() {
        let mut r = SplitMix64::from_seed(7);
        for _ in 0 .. 16 {
            let a = [r.next_u64(), r.next_u64(), r.next_u64(), r.next_u64()];
            let b = [r.next_u64(), r.next_u64(), r.next_u64(), r.next_u64()];
            let sum = [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]];
            let mut x = Xoshiro256ss::from_state(a);
            let mut y = Xoshiro256ss::from_state(b);
            let mut z = Xoshiro256ss::from_state(sum);
            x.jump();
            y.jump();
            z.jump();
            let (x, y, z) = (x.state(), y.state(), z.state());
            assert_eq!([x[0] ^ y[0], x[1] ^ y[1], x[2] ^ y[2], x[3] ^ y[3]], z);
        }
    }

    #[test] pub fn jumps_compose() {
        // The two jump lengths are both powers of two, so jumps commute.
        let mut a = Xoshiro256ss::from_seed(99);
        let mut b = a.clone();
        a.jump();
        a.long_jump();
        b.long_jump();
        b.jump();
        assert_eq!(a, b);
        assert_ne!(a, Xoshiro256ss::from_seed(99));
    }

    #[test] pub fn seeded_state_is_never_zero() {
        let mut r = SplitMix64::from_seed(1);
        let edge = [0, 1, -1, i64::MIN, i64::MAX];
        for seed in edge.into_iter().chain((0 .. 1 << 12).map(|_| r.next_u64() as i64)) {
            let rng = Xoshiro256ss::from_seed(seed);
            assert!(rng.state().iter().filter(|&&x| x == 0).count() <= 1);
        }
    }
}
