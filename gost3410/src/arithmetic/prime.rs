//! Probabilistic primality testing.

use super::random_scalar;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds, each with a fresh random base.
///
/// A composite passes a single round with probability at most `1/4`.
pub const MILLER_RABIN_ROUNDS: usize = 32;

const SMALL_PRIMES: [u32; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Is `n` prime?
///
/// Trial division by small primes, then [`MILLER_RABIN_ROUNDS`] rounds of
/// Miller-Rabin with bases drawn from `rng`. A `true` answer is wrong with
/// probability below `2⁻⁶⁴`.
pub fn is_probable_prime(n: &BigUint, rng: &mut impl CryptoRngCore) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    if n.is_even() {
        return n == &two;
    }

    for p in SMALL_PRIMES {
        if n == &BigUint::from(p) {
            return true;
        }

        if (n % p).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^s · d with d odd
    let n_minus_1 = n - 1u32;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;
    let n_minus_3 = n - 3u32;

    'witness: for _ in 0..MILLER_RABIN_ROUNDS {
        // a ∈ [2, n-3]
        let a = random_scalar(rng, &n_minus_3) + 1u32;
        let mut x = a.modpow(&d, n);

        if x.is_one() || x == n_minus_1 {
            continue;
        }

        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_probable_prime;
    use num_bigint::BigUint;
    use rand_core::OsRng;

    /// Agrees with trial division on every small integer.
    #[test]
    fn small_numbers() {
        for q in 0u32..3000 {
            let expected = q >= 2 && (2..q).take_while(|d| d * d <= q).all(|d| q % d != 0);
            assert_eq!(is_probable_prime(&q.into(), &mut OsRng), expected, "{q}");
        }

        assert!(is_probable_prime(&65537u32.into(), &mut OsRng));
    }

    #[test]
    fn composites() {
        // 3215031751 = 151 · 751 · 28351 is a strong pseudoprime to bases 2, 3, 5 and 7
        for q in [59u64 * 61, 65535, 1_000_000_007 * 998_244_353, 3_215_031_751] {
            assert!(!is_probable_prime(&q.into(), &mut OsRng), "{q}");
        }
    }

    #[test]
    fn reference_curve_moduli() {
        for hex in [
            &b"fffffffffffffffffffffffffffffffeffffffffffffffff"[..],
            b"ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        ] {
            let q = BigUint::parse_bytes(hex, 16).unwrap();
            assert!(is_probable_prime(&q, &mut OsRng));
            assert!(!is_probable_prime(&(&q * &q), &mut OsRng));
        }

        let mersenne = (BigUint::from(1u32) << 127u32) - 1u32;
        assert!(is_probable_prime(&mersenne, &mut OsRng));
    }
}
