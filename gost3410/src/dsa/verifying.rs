//! Support for verifying signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1: verify whether r, s in [1, n-1], verification failed if not
//! 2: calculate e = H(M) mod n, set e = 1 if e = 0
//! 3: calculate v = e⁻¹ mod n
//! 4: calculate z1 = s·v mod n, z2 = -r·v mod n
//! 5: calculate the point C = [z1]G + [z2]Q
//! 6: verification pass if C ≠ O and Cₓ mod n = r, otherwise failed
//! ```

use super::Signature;
use crate::{AffinePoint, DomainParams, Error, Result, arithmetic::inv_mod};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use rand_core::CryptoRngCore;
use signature::{Verifier, hazmat::PrehashVerifier};

/// Public key used for verifying signatures are valid for a given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Eq, PartialEq)]
pub struct VerifyingKey<'a> {
    /// Domain parameters the key is defined over.
    params: &'a DomainParams,

    /// Public point `Q = d·G`.
    public_point: AffinePoint,
}

impl<'a> VerifyingKey<'a> {
    /// Initialize [`VerifyingKey`] from a public point.
    ///
    /// Returns [`Error::InvalidPoint`] if the point is the identity or not on
    /// the curve.
    pub fn new(params: &'a DomainParams, public_point: AffinePoint) -> Result<Self> {
        if public_point.is_identity() || !params.curve().is_on_curve(&public_point) {
            return Err(Error::InvalidPoint);
        }

        Ok(Self {
            params,
            public_point,
        })
    }

    /// Initialize [`VerifyingKey`] from a SEC1 uncompressed point
    /// `0x04 || x || y`.
    pub fn from_sec1_bytes(params: &'a DomainParams, bytes: &[u8]) -> Result<Self> {
        Self::new(params, params.curve().from_uncompressed_bytes(bytes)?)
    }

    /// Initialize [`VerifyingKey`] from a SEC1 compressed point
    /// `0x02 | 0x03 || x`, where `x` is exactly the field byte length.
    pub fn decompress(
        params: &'a DomainParams,
        bytes: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        Self::new(params, params.curve().from_compressed_bytes(bytes, rng)?)
    }

    /// Initialize [`VerifyingKey`] from either SEC1 point encoding, chosen by
    /// the leading tag byte.
    pub fn from_encoded_point(
        params: &'a DomainParams,
        bytes: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        match bytes.first().copied() {
            Some(0x04) => Self::from_sec1_bytes(params, bytes),
            Some(0x02 | 0x03) => Self::decompress(params, bytes, rng),
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Serialize this key as a SEC1 point, optionally compressed.
    pub fn to_sec1_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        let curve = self.params.curve();
        if compress {
            curve.to_compressed_bytes(&self.public_point)
        } else {
            curve.to_uncompressed_bytes(&self.public_point)
        }
    }

    /// Borrow the public point for this key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.public_point
    }

    /// Domain parameters this key belongs to.
    pub fn params(&self) -> &'a DomainParams {
        self.params
    }

    /// Hash `msg` with the domain's digest and verify `signature` over it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = msg.len()))]
    pub fn verify_message(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        let digest = self.params.digest_size().digest(msg);
        self.verify_digest(&digest, signature)
    }

    /// Verify `signature` over a precomputed message digest.
    ///
    /// Signatures with `r` or `s` outside `[1, n-1]` are rejected with
    /// [`Error::InvalidRange`] before any curve arithmetic, and signatures
    /// encoded with the wrong field width with
    /// [`Error::MalformedSignatureEncoding`].
    pub fn verify_digest(&self, digest: &[u8], signature: &Signature) -> Result<()> {
        let params = self.params;
        let n = params.order();

        if signature.width() != params.scalar_hex_width() {
            return Err(Error::MalformedSignatureEncoding);
        }

        let (r, s) = (signature.r(), signature.s());
        if !params.is_valid_scalar(r) || !params.is_valid_scalar(s) {
            return Err(Error::InvalidRange);
        }

        let e = params.reduce_digest(digest);
        let v = inv_mod(&e, n)?;
        let z1 = s * &v % n;
        let z2 = params.neg_scalar(&(r * &v));

        let curve = params.curve();
        let c = curve.add(
            &params.mul_generator(&z1)?,
            &curve.mul(&self.public_point, &z2)?,
        )?;

        match c.x() {
            Some(x) if &(x % n) == r => Ok(()),
            _ => Err(Error::InvalidSignature),
        }
    }

    /// Does `signature` verify over `msg`?
    pub fn is_valid(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_message(msg, signature).is_ok()
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey<'_> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        Ok(self.verify_digest(prehash, signature)?)
    }
}

impl Verifier<Signature> for VerifyingKey<'_> {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        Ok(self.verify_message(msg, signature)?)
    }
}

//
// Other trait impls
//

impl Debug for VerifyingKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerifyingKey(")?;

        for byte in self.to_sec1_bytes(true).map_err(|_| fmt::Error)? {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}
