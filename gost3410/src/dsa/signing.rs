//! Support for signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1: calculate e = H(M) mod n, set e = 1 if e = 0
//! 2: pick a random number k in [1, n-1]
//! 3: calculate the elliptic curve point C = [k]G
//! 4: calculate r = Cₓ mod n, return to 2 if r = 0
//! 5: calculate s = (r·d + k·e) mod n, return to 2 if s = 0
//! 6: the digital signature of M is (r, s)
//! ```

use super::{Signature, VerifyingKey};
use crate::{
    DomainParams, Error, Result,
    arithmetic::{left_pad, random_bits, wipe},
};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use signature::{KeypairRef, RandomizedSigner, hazmat::RandomizedPrehashSigner};
use zeroize::{ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "getrandom")]
use {
    rand_core::OsRng,
    signature::{Signer, hazmat::PrehashSigner},
};

/// Secret key used for signing messages and producing signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message with an explicit random number
///   generator
/// - [`RandomizedPrehashSigner`]: sign the raw output bytes of a message
///   digest
/// - [`Signer`] and [`PrehashSigner`]: same as above, drawing nonces from
///   the operating system (`getrandom` feature)
///
/// The secret scalar is overwritten with zeros when the key is dropped.
///
/// [`Signer`]: signature::Signer
/// [`PrehashSigner`]: signature::hazmat::PrehashSigner
#[derive(Clone)]
pub struct SigningKey<'a> {
    /// Secret scalar `d`.
    secret_scalar: BigUint,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey<'a>,
}

impl<'a> SigningKey<'a> {
    /// Generate a random signing key whose secret scalar has at most
    /// `bit_size` bits.
    ///
    /// `bit_size` must lie in `[1, bitlength(n)]`. Candidates equal to zero
    /// or not below `n` are redrawn.
    #[tracing::instrument(level = "debug", skip(params, rng))]
    pub fn random(
        params: &'a DomainParams,
        bit_size: u64,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        if bit_size == 0 || bit_size > params.order().bits() {
            return Err(Error::InvalidKeySize);
        }

        let mut redraws = 0u32;
        loop {
            let mut d = random_bits(rng, bit_size);
            if params.is_valid_scalar(&d) {
                if redraws > 0 {
                    tracing::debug!(redraws, "secret scalar redrawn");
                }

                return Self::from_scalar(params, d);
            }

            wipe(&mut d);
            redraws += 1;
        }
    }

    /// Create a signing key from a secret scalar in `[1, n-1]`.
    ///
    /// A rejected scalar is wiped before the error is returned.
    pub fn from_scalar(params: &'a DomainParams, mut secret_scalar: BigUint) -> Result<Self> {
        let public_point = if params.is_valid_scalar(&secret_scalar) {
            params.mul_generator(&secret_scalar)
        } else {
            Err(Error::InvalidRange)
        };

        let verifying_key = match public_point.and_then(|point| VerifyingKey::new(params, point)) {
            Ok(verifying_key) => verifying_key,
            Err(err) => {
                wipe(&mut secret_scalar);
                return Err(err);
            }
        };

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Parse a signing key from a big endian-encoded secret scalar.
    pub fn from_slice(params: &'a DomainParams, bytes: &[u8]) -> Result<Self> {
        Self::from_scalar(params, BigUint::from_bytes_be(bytes))
    }

    /// Serialize the secret scalar as big endian bytes, left padded to the
    /// byte length of `n`.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let len = usize::try_from(self.params().order().bits().div_ceil(8)).unwrap_or(0);
        let bytes = Zeroizing::new(self.secret_scalar.to_bytes_be());
        Zeroizing::new(left_pad(&bytes, len))
    }

    /// Borrow the secret scalar for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'a> {
        &self.verifying_key
    }

    /// Domain parameters this key belongs to.
    pub fn params(&self) -> &'a DomainParams {
        self.verifying_key.params()
    }

    /// Hash `msg` with the domain's digest and sign it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = msg.len()))]
    pub fn sign_message(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        let digest = self.params().digest_size().digest(msg);
        self.sign_digest(rng, &digest)
    }

    /// Sign a precomputed message digest.
    pub fn sign_digest(&self, rng: &mut impl CryptoRngCore, digest: &[u8]) -> Result<Signature> {
        let params = self.params();
        let e = params.reduce_digest(digest);

        let mut redraws = 0u32;
        loop {
            let mut k = params.random_scalar(rng);
            let signed = self.try_sign_with_nonce(&e, &k);
            wipe(&mut k);

            if let Some(signature) = signed? {
                if redraws > 0 {
                    tracing::debug!(redraws, "nonce redrawn");
                }

                return Ok(signature);
            }

            redraws += 1;
        }
    }

    /// Sign a precomputed digest with a caller-chosen nonce `k`.
    ///
    /// Fails with [`Error::InvalidRange`] when `k` is out of range or yields
    /// a zero signature component.
    #[cfg(test)]
    pub(crate) fn sign_prehash_with_nonce(&self, digest: &[u8], k: &BigUint) -> Result<Signature> {
        let params = self.params();
        if !params.is_valid_scalar(k) {
            return Err(Error::InvalidRange);
        }

        let e = params.reduce_digest(digest);
        self.try_sign_with_nonce(&e, k)?.ok_or(Error::InvalidRange)
    }

    /// Steps 3-6 for a given nonce; `None` when `r` or `s` is zero.
    fn try_sign_with_nonce(&self, e: &BigUint, k: &BigUint) -> Result<Option<Signature>> {
        let params = self.params();
        let n = params.order();

        let c = params.mul_generator(k)?;
        let Some(x) = c.x() else {
            return Ok(None);
        };

        let r = x % n;
        if r.is_zero() {
            return Ok(None);
        }

        let mut rd = &r * &self.secret_scalar;
        let mut ke = k * e;
        let s = (&rd + &ke) % n;
        wipe(&mut rd);
        wipe(&mut ke);

        if s.is_zero() {
            return Ok(None);
        }

        Signature::from_scalars(r, s, params.scalar_hex_width()).map(Some)
    }
}

//
// `*Signer` trait impls
//

impl RandomizedPrehashSigner<Signature> for SigningKey<'_> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_digest(rng, prehash)?)
    }
}

impl RandomizedSigner<Signature> for SigningKey<'_> {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_message(rng, msg)?)
    }
}

#[cfg(feature = "getrandom")]
impl PrehashSigner<Signature> for SigningKey<'_> {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, prehash)
    }
}

#[cfg(feature = "getrandom")]
impl Signer<Signature> for SigningKey<'_> {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

//
// Other trait impls
//

impl<'a> AsRef<VerifyingKey<'a>> for SigningKey<'a> {
    fn as_ref(&self) -> &VerifyingKey<'a> {
        &self.verifying_key
    }
}

impl Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey<'_> {
    fn drop(&mut self) {
        wipe(&mut self.secret_scalar);
    }
}

impl ZeroizeOnDrop for SigningKey<'_> {}

impl Eq for SigningKey<'_> {}
impl PartialEq for SigningKey<'_> {
    fn eq(&self, other: &SigningKey<'_>) -> bool {
        self.secret_scalar == other.secret_scalar && self.verifying_key == other.verifying_key
    }
}

impl<'a> KeypairRef for SigningKey<'a> {
    type VerifyingKey = VerifyingKey<'a>;
}

#[cfg(test)]
mod tests {
    use super::SigningKey;
    use crate::{AffinePoint, DomainParams, Error, test_vectors::ecdsa::ECDSA_TEST_VECTORS};
    use alloc::format;
    use num_bigint::BigUint;
    use rand_core::OsRng;

    fn params() -> DomainParams {
        DomainParams::p192_with_rng(&mut OsRng).unwrap()
    }

    #[test]
    fn key_size_bounds() {
        let params = params();
        for bits in [0, 193, 256] {
            assert_eq!(
                SigningKey::random(&params, bits, &mut OsRng),
                Err(Error::InvalidKeySize)
            );
        }

        for bits in [1, 8, 100, 192] {
            let key = SigningKey::random(&params, bits, &mut OsRng).unwrap();
            assert!(key.as_scalar().bits() <= bits);
        }

        // the only 1-bit scalar is 1, so the public key is the generator
        let key = SigningKey::random(&params, 1, &mut OsRng).unwrap();
        assert_eq!(key.verifying_key().as_affine(), params.generator());
    }

    #[test]
    fn scalar_range() {
        let params = params();
        assert_eq!(
            SigningKey::from_scalar(&params, BigUint::from(0u32)),
            Err(Error::InvalidRange)
        );
        assert_eq!(
            SigningKey::from_scalar(&params, params.order().clone()),
            Err(Error::InvalidRange)
        );
        assert!(SigningKey::from_scalar(&params, params.order() - 1u32).is_ok());
    }

    #[test]
    fn bytes_round_trip() {
        let params = params();
        let key = SigningKey::from_slice(&params, &[0x2a]).unwrap();
        let bytes = key.to_bytes();

        assert_eq!(bytes.len(), 24);
        assert_eq!(bytes[23], 0x2a);
        assert_eq!(SigningKey::from_slice(&params, &bytes).unwrap(), key);
    }

    #[test]
    fn zeroize_on_drop() {
        fn assert_zeroize_on_drop<T: zeroize::ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<SigningKey<'_>>();
    }

    #[test]
    fn debug_hides_secret() {
        let params = params();
        let key = SigningKey::from_scalar(&params, BigUint::from(0x1234_5678u32)).unwrap();
        let debug = format!("{key:?}");

        assert!(debug.starts_with("SigningKey { verifying_key: "));
        assert!(!debug.contains("305419896"));
        assert!(!debug.contains("12345678"));
    }

    #[test]
    fn public_key_known_answers() {
        let params = params();

        for vector in ECDSA_TEST_VECTORS {
            let key = SigningKey::from_slice(&params, vector.d).unwrap();
            let expected = AffinePoint::new(
                BigUint::from_bytes_be(vector.q_x),
                BigUint::from_bytes_be(vector.q_y),
            );
            assert_eq!(key.verifying_key().as_affine(), &expected);
        }
    }

    /// `r = Cₓ mod n` for `C = k·G` matches the published ECDSA values.
    #[test]
    fn nonce_known_answers() {
        let params = params();

        for vector in ECDSA_TEST_VECTORS {
            let key = SigningKey::from_slice(&params, vector.d).unwrap();
            let k = BigUint::from_bytes_be(vector.k);
            let signature = key.sign_prehash_with_nonce(&[0x01], &k).unwrap();

            assert_eq!(signature.r(), &BigUint::from_bytes_be(vector.r));
            assert!(key.verifying_key().verify_digest(&[0x01], &signature).is_ok());
        }
    }

    #[test]
    fn nonce_out_of_range() {
        let params = params();
        let key = SigningKey::from_scalar(&params, BigUint::from(7u32)).unwrap();

        assert_eq!(
            key.sign_prehash_with_nonce(&[0x01], &BigUint::from(0u32)),
            Err(Error::InvalidRange)
        );
        assert_eq!(
            key.sign_prehash_with_nonce(&[0x01], params.order()),
            Err(Error::InvalidRange)
        );
    }
}
