use wrapping_arithmetic::wrappit;

// This module contains the word-level arithmetic the generators are built from.
// 128-bit quantities are kept as (hi, lo) pairs of 64-bit words.

/// Widening 64x64 -> 128-bit multiply. Returns (hi, lo).
#[inline]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    // Casting the arguments from 64 bits gets us the widening multiply;
    // the product of two 64-bit numbers always fits in 128 bits.
    let p = (a as u128) * (b as u128);
    ((p >> 64) as u64, p as u64)
}

/// 64-bit addition with carry in and carry out. Returns (sum, carry).
/// Carries are 0 or 1.
#[inline]
pub fn add_carry(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let (s, c1) = a.overflowing_add(b);
    let (s, c2) = s.overflowing_add(carry);
    (s, (c1 | c2) as u64)
}

/// Computes state * m + a modulo 2**128 on (hi, lo) word pairs.
#[wrappit] #[inline]
pub fn mul_add_128(state: (u64, u64), m: (u64, u64), a: (u64, u64)) -> (u64, u64) {
    let (hi, lo) = state;
    let (m_hi, m_lo) = m;
    let (a_hi, a_lo) = a;
    // Only the low word product needs the full 128 bits,
    // the cross terms overflow past 2**128 and are truncated.
    let (p_hi, p_lo) = mul_wide(lo, m_lo);
    let p_hi = p_hi + hi * m_lo + lo * m_hi;
    let (lo, carry) = add_carry(p_lo, a_lo, 0);
    let (hi, _) = add_carry(p_hi, a_hi, carry);
    (hi, lo)
}

/// Joins a (hi, lo) pair into a u128.
#[inline]
pub const fn join(hi: u64, lo: u64) -> u128 {
    ((hi as u128) << 64) | lo as u128
}

/// Splits a u128 into a (hi, lo) pair.
#[inline]
pub const fn split(x: u128) -> (u64, u64) {
    ((x >> 64) as u64, x as u64)
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn wide_multiply() {
        assert_eq!(mul_wide(0, u64::MAX), (0, 0));
        assert_eq!(mul_wide(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
        assert_eq!(mul_wide(1 << 32, 1 << 32), (1, 0));
        assert_eq!(add_carry(u64::MAX, 1, 0), (0, 1));
        assert_eq!(add_carry(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(add_carry(5, 6, 1), (12, 0));
    }

    #[test] pub fn multiply_add_agrees_with_u128() {
        let mut r: u128 = 0;
        let mut rnd = || -> u128 { r = r.wrapping_mul(0xde92a69f6e2f9f25fd0d90f576075fbd).wrapping_add(0xffff); r };

        for _ in 0 .. 1 << 12 {
            let (s, m, a) = (rnd(), rnd(), rnd());
            let expected = s.wrapping_mul(m).wrapping_add(a);
            assert_eq!(split(expected), mul_add_128(split(s), split(m), split(a)));
            let (hi, lo) = split(s);
            assert_eq!(s, join(hi, lo));
        }
    }
}
