//! Pure Rust implementation of group operations on short Weierstrass curves
//! `y² = x³ + ax + b` over a prime field `GF(p)`.
//!
//! Field elements and scalars are [`BigUint`] values kept reduced into
//! `[0, modulus)`. Points are affine, with the group identity represented
//! explicitly as [`AffinePoint::Identity`].

mod point;
mod prime;
mod sqrt;

pub use self::{
    point::{AffinePoint, Curve},
    prime::{MILLER_RABIN_ROUNDS, is_probable_prime},
    sqrt::{MAX_NON_RESIDUE_ATTEMPTS, legendre, sqrt_mod},
};

pub(crate) use self::point::left_pad;

use crate::{Error, Result};
use alloc::vec;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Computes `(a - b) mod m` for `a, b` of any size.
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;

    if a >= b { a - b } else { m - b + a }
}

/// Computes `a⁻¹ mod m`.
///
/// Returns [`Error::NoModularInverse`] if `gcd(a, m) ≠ 1`, which includes
/// `a ≡ 0 (mod m)`.
pub(crate) fn inv_mod(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return Err(Error::NoModularInverse);
    }

    a.modinv(m).ok_or(Error::NoModularInverse)
}

/// Draws a uniformly random integer of at most `bits` bits.
pub(crate) fn random_bits(rng: &mut impl CryptoRngCore, bits: u64) -> BigUint {
    let len = usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX);
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    rng.fill_bytes(&mut bytes);

    // clear the excess high bits of the leading byte
    let excess = (len as u64) * 8 - bits;
    if let Some(first) = bytes.first_mut() {
        *first &= 0xff >> excess;
    }

    BigUint::from_bytes_be(&bytes)
}

/// Overwrites the limbs of `value` with zeros in place, leaving it `0`.
///
/// [`BigUint`] does not implement `Zeroize`, so secret scalars are cleared
/// through [`BigUint::assign_from_slice`], which reuses the existing buffer.
pub(crate) fn wipe(value: &mut BigUint) {
    let limbs = value.iter_u32_digits().len().next_multiple_of(2);
    value.assign_from_slice(&vec![0u32; limbs]);
}

/// Draws a uniformly random scalar in `[1, n-1]` by rejection sampling over
/// `bitlength(n)`-bit integers.
pub(crate) fn random_scalar(rng: &mut impl CryptoRngCore, n: &BigUint) -> BigUint {
    let bits = n.bits();

    loop {
        let mut k = random_bits(rng, bits);
        if !k.is_zero() && &k < n {
            return k;
        }

        wipe(&mut k);
    }
}

#[cfg(test)]
mod tests {
    use super::{inv_mod, random_bits, random_scalar, sub_mod, wipe};
    use crate::Error;
    use num_bigint::BigUint;
    use num_traits::Zero;
    use rand_core::OsRng;

    #[test]
    fn sub_mod_wraps() {
        let m = BigUint::from(97u32);
        assert_eq!(sub_mod(&5u32.into(), &7u32.into(), &m), BigUint::from(95u32));
        assert_eq!(sub_mod(&7u32.into(), &5u32.into(), &m), BigUint::from(2u32));
        assert_eq!(sub_mod(&200u32.into(), &3u32.into(), &m), BigUint::from(3u32));
    }

    #[test]
    fn inv_mod_rejects_zero_and_shared_factors() {
        let m = BigUint::from(97u32);
        assert_eq!(inv_mod(&0u32.into(), &m), Err(Error::NoModularInverse));
        assert_eq!(inv_mod(&194u32.into(), &m), Err(Error::NoModularInverse));
        assert_eq!(
            inv_mod(&6u32.into(), &BigUint::from(9u32)),
            Err(Error::NoModularInverse)
        );

        let inv = inv_mod(&5u32.into(), &m).unwrap();
        assert_eq!((inv * 5u32) % &m, BigUint::from(1u32));
    }

    #[test]
    fn random_bits_respects_width() {
        for bits in [1u64, 7, 8, 9, 191, 192] {
            for _ in 0..32 {
                assert!(random_bits(&mut OsRng, bits).bits() <= bits);
            }
        }
    }

    #[test]
    fn wipe_clears_value() {
        for mut value in [
            BigUint::from(0u32),
            BigUint::from(0x2au32),
            BigUint::from(u64::MAX),
            BigUint::from_bytes_be(&[0xa5; 24]),
            BigUint::from_bytes_be(&[0xff; 33]),
        ] {
            wipe(&mut value);
            assert!(value.is_zero());
        }
    }

    #[test]
    fn random_scalar_in_range() {
        let n = BigUint::from(5u32);
        for _ in 0..64 {
            let k = random_scalar(&mut OsRng, &n);
            assert!(k >= BigUint::from(1u32) && k < n);
        }
    }
}
