use wrapping_arithmetic::wrappit;

// This module contains utility functions for working with
// LCGs (linear congruential generators) with power-of-two moduli.
// They back the advance and distance operations of the LCG based generators.

/// LCG iteration is state <- state * m + p.
/// Returns state after the specified number of iterations from the origin state.
/// Assumes (m, p) is full period.
#[wrappit]
pub fn get_state(m: u128, p: u128, origin: u128, iterations: u128) -> u128 {
    // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
    // Transactions of the American Nuclear Society, 1994.
    let mut jump_m = m;
    let mut jump_p = p;
    let mut state = origin;
    let mut ordinal = iterations;

    while ordinal > 0 {
        if ordinal & 1 == 1 {
            state = state * jump_m + jump_p;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        ordinal >>= 1;
    }
    state
}

/// LCG iteration is state <- state * m + p.
/// Returns the number of iterations between origin state and the given state.
/// Assumes (m, p) is full period.
#[wrappit]
pub fn get_iterations(m: u128, p: u128, origin: u128, state: u128) -> u128 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut ordinal: u128 = 0;
    let mut bit: u128 = 1;
    let mut address = origin;

    while address != state {
        if (bit & address) != (bit & state) {
            address = address * jump_m + jump_p;
            ordinal = ordinal + bit;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        bit <<= 1;
    }
    ordinal
}

/// 64-bit version of `get_state`.
#[wrappit]
pub fn get_state_64(m: u64, p: u64, origin: u64, iterations: u64) -> u64 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut state = origin;
    let mut ordinal = iterations;

    while ordinal > 0 {
        if ordinal & 1 == 1 {
            state = state * jump_m + jump_p;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        ordinal >>= 1;
    }
    state
}

/// 64-bit version of `get_iterations`.
#[wrappit]
pub fn get_iterations_64(m: u64, p: u64, origin: u64, state: u64) -> u64 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut ordinal: u64 = 0;
    let mut bit: u64 = 1;
    let mut address = origin;

    while address != state {
        if (bit & address) != (bit & state) {
            address = address * jump_m + jump_p;
            ordinal = ordinal + bit;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        bit <<= 1;
    }
    ordinal
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {

        let mut r: u128 = 0;
        let mut rnd = || -> u128 { r = r.wrapping_mul(crate::pcg64::MULTIPLIER).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<12 {

            let m = match rnd() % 3 { 0 => crate::lcg128::MULTIPLIER, 1 => crate::pcg64::MULTIPLIER, _ => 0x87ea3de194dd2e97074f3d0c2ea63d35 };
            let p = rnd() | 1;
            let origin = rnd();

            assert_eq!(origin.wrapping_mul(m).wrapping_add(p), get_state(m, p, origin, 1));
            assert_eq!(1, get_iterations(m, p, origin, origin.wrapping_mul(m).wrapping_add(p)));

            // Run some consistency tests.
            let state = rnd();
            let n = get_iterations(m, p, origin, state);
            assert_eq!(state, get_state(m, p, origin, n));

            let n = rnd();
            let state = get_state(m, p, origin, n);
            assert_eq!(n, get_iterations(m, p, origin, state));

            // Get h <= n.
            let h = n & rnd();
            let state_h = get_state(m, p, origin, h);
            assert_eq!(n - h, get_iterations(m, p, state_h, state));
        }
    }

    #[test] pub fn run_tests_64() {

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(crate::pcg32::MULTIPLIER).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<12 {

            let m = match rnd() % 2 { 0 => crate::pcg32::MULTIPLIER, _ => 0xd1342543de82ef95 };
            let p = rnd() | 1;
            let origin = rnd();

            assert_eq!(origin.wrapping_mul(m).wrapping_add(p), get_state_64(m, p, origin, 1));
            assert_eq!(0, get_iterations_64(m, p, origin, origin));

            let n = rnd();
            let state = get_state_64(m, p, origin, n);
            assert_eq!(n, get_iterations_64(m, p, origin, state));

            // Walking step by step agrees with the stride.
            let k = rnd() & 0xff;
            let mut walk = origin;
            for _ in 0 .. k { walk = walk.wrapping_mul(m).wrapping_add(p); }
            assert_eq!(walk, get_state_64(m, p, origin, k));
        }
    }
}
