//! Modular square roots via a randomized Tonelli-Shanks algorithm.

use super::{inv_mod, random_scalar};
use crate::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Maximum number of random draws when searching for a quadratic
/// non-residue.
///
/// Half of the nonzero residues modulo an odd prime are non-residues, so the
/// expected number of draws is 2 and the chance of exhausting this bound is
/// below `2⁻¹²⁸`.
pub const MAX_NON_RESIDUE_ATTEMPTS: usize = 128;

/// Legendre symbol `a^((q-1)/2) mod q`.
///
/// Evaluates to `1` for nonzero quadratic residues, `q - 1` for
/// non-residues, and `0` when `q` divides `a`.
pub fn legendre(a: &BigUint, q: &BigUint) -> BigUint {
    let exp = (q - 1u32) >> 1u32;
    a.modpow(&exp, q)
}

/// Computes `r` such that `r² ≡ a (mod q)` for an odd prime `q`.
///
/// Works for every odd prime, including `q ≡ 1 (mod 4)` where the
/// `a^((q+1)/4)` shortcut does not apply. For `q ≡ 3 (mod 4)` the refinement
/// loop is empty and the result is exactly that shortcut.
///
/// Returns [`Error::NonResidue`] whenever no root can be produced: `a` has
/// no square root, no non-residue is found within
/// [`MAX_NON_RESIDUE_ATTEMPTS`] draws, the candidate root fails the final
/// check (which happens when `q` is not prime), or `q` is even or below `3`.
pub fn sqrt_mod(a: &BigUint, q: &BigUint, rng: &mut impl CryptoRngCore) -> Result<BigUint> {
    if q < &BigUint::from(3u32) || q.is_even() {
        return Err(Error::NonResidue);
    }

    let a = a % q;
    if a.is_zero() {
        return Ok(a);
    }

    if !legendre(&a, q).is_one() {
        return Err(Error::NonResidue);
    }

    let q_minus_1 = q - 1u32;
    let b = find_non_residue(q, &q_minus_1, rng)?;

    // q - 1 = 2^s · t with t odd
    let s = q_minus_1.trailing_zeros().unwrap_or(0);
    let t = &q_minus_1 >> s;

    let a_inv = inv_mod(&a, q)?;
    let mut c = b.modpow(&t, q);
    let mut r = a.modpow(&((&t + 1u32) >> 1u32), q);

    for i in 1..s {
        let exp = BigUint::one() << (s - i - 1);
        let d = ((&r * &r) % q * &a_inv % q).modpow(&exp, q);

        if d == q_minus_1 {
            r = r * &c % q;
        }

        c = &c * &c % q;
    }

    if (&r * &r) % q == a {
        Ok(r)
    } else {
        Err(Error::NonResidue)
    }
}

/// Draw random `b ∈ [2, q-1]` until `b` is a quadratic non-residue.
fn find_non_residue(
    q: &BigUint,
    q_minus_1: &BigUint,
    rng: &mut impl CryptoRngCore,
) -> Result<BigUint> {
    let two = BigUint::from(2u32);

    for _ in 0..MAX_NON_RESIDUE_ATTEMPTS {
        let b = random_scalar(rng, q);
        if b >= two && &legendre(&b, q) == q_minus_1 {
            return Ok(b);
        }
    }

    tracing::warn!(
        attempts = MAX_NON_RESIDUE_ATTEMPTS,
        "no quadratic non-residue found"
    );
    Err(Error::NonResidue)
}
