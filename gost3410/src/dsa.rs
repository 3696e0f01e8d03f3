//! GOST R 34.10-2001 style digital signatures over prime-order curve groups.
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "std", feature = "getrandom"), doc = "```")]
#![cfg_attr(
    not(all(feature = "std", feature = "getrandom")),
    doc = "```ignore"
)]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gost3410::{
//!     DomainParams,
//!     dsa::{Signature, SigningKey, signature::Signer},
//! };
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! // Signing
//! let params = DomainParams::p192()?;
//! let signing_key = SigningKey::random(&params, 192, &mut OsRng)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_sec1_bytes(true)?;
//! let message = b"test message";
//! let signature: Signature = signing_key.sign(message);
//! let signature_hex = signature.to_hex();
//!
//! // Verifying
//! use gost3410::dsa::{VerifyingKey, signature::Verifier};
//!
//! let verifying_key = VerifyingKey::decompress(&params, &verifying_key_bytes, &mut OsRng)?;
//! let signature: Signature = signature_hex.parse()?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Algorithm
//!
//! ```text
//! sign(d, M):
//!   e = H(M) mod n, e = 1 if e = 0
//!   repeat: k ← [1, n-1], C = k·G, r = Cₓ mod n, s = (r·d + k·e) mod n
//!   until r ≠ 0 and s ≠ 0
//!
//! verify(Q, M, (r, s)):
//!   reject unless r, s ∈ [1, n-1]
//!   v = e⁻¹ mod n, z1 = s·v mod n, z2 = -r·v mod n
//!   C = z1·G + z2·Q, accept iff C ≠ O and Cₓ mod n = r
//! ```

mod signing;
mod verifying;

pub use signature;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{DomainParams, Error, Result};
use alloc::{format, string::String, vec::Vec};
use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

#[cfg(all(feature = "std", feature = "getrandom"))]
use crate::p192_params;

/// Signature `(r, s)` with its hex field width.
///
/// Serialized as two concatenated, zero-padded, lower-case hex fields of
/// equal width: `⌈bitlength(n) / 4⌉` digits each for signatures produced
/// over a curve of order `n`.
///
/// Parsing only checks the encoding. Range checks against the group order
/// happen at verification time.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
    width: usize,
}

impl Signature {
    /// Create a [`Signature`] from its `r` and `s` components, each to be
    /// encoded as `width` hex digits.
    ///
    /// Fails if either value does not fit in `width` digits, or if the
    /// encoded length `2 · width` is not representable.
    pub fn from_scalars(r: BigUint, s: BigUint, width: usize) -> Result<Self> {
        let max_bits = u64::try_from(width)
            .ok()
            .and_then(|width| width.checked_mul(4))
            .filter(|_| width.checked_mul(2).is_some())
            .ok_or(Error::MalformedSignatureEncoding)?;

        let fits = |value: &BigUint| value.bits() <= max_bits;
        if width == 0 || !fits(&r) || !fits(&s) {
            return Err(Error::MalformedSignatureEncoding);
        }

        Ok(Self { r, s, width })
    }

    /// Parse a signature from its hex encoding.
    ///
    /// Accepts upper and lower case digits. The input must be non-empty and
    /// of even length; its two halves are `r` and `s`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex.as_bytes();
        if bytes.is_empty()
            || bytes.len() % 2 != 0
            || !bytes.iter().all(|byte| byte.is_ascii_hexdigit())
        {
            return Err(Error::MalformedSignatureEncoding);
        }

        let width = bytes.len() / 2;
        let (r_hex, s_hex) = bytes.split_at(width);
        let parse = |digits: &[u8]| {
            BigUint::parse_bytes(digits, 16).ok_or(Error::MalformedSignatureEncoding)
        };

        Ok(Self {
            r: parse(r_hex)?,
            s: parse(s_hex)?,
            width,
        })
    }

    /// Serialize as `r || s` lower-case hex.
    pub fn to_hex(&self) -> String {
        format!("{:0w$x}{:0w$x}", self.r, self.s, w = self.width)
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Number of hex digits in each component.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost3410::dsa::Signature({})", self.to_hex())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        Self::from_hex(hex)
    }
}

impl From<Signature> for Vec<u8> {
    fn from(signature: Signature) -> Vec<u8> {
        signature.to_hex().into_bytes()
    }
}

impl From<&Signature> for Vec<u8> {
    fn from(signature: &Signature) -> Vec<u8> {
        signature.to_hex().into_bytes()
    }
}

/// The byte encoding is the ASCII hex string.
impl signature::SignatureEncoding for Signature {
    type Repr = Vec<u8>;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        self.width.saturating_mul(2)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        let hex = core::str::from_utf8(bytes).map_err(|_| signature::Error::new())?;
        Ok(Self::from_hex(hex)?)
    }
}

/// Sign `message` with a freshly generated key of `private_key_bits` bits.
///
/// Returns the signature together with the public key needed to verify it.
pub fn sign<'a>(
    params: &'a DomainParams,
    message: &[u8],
    private_key_bits: u64,
    rng: &mut impl CryptoRngCore,
) -> Result<(Signature, VerifyingKey<'a>)> {
    let signing_key = SigningKey::random(params, private_key_bits, rng)?;
    let signature = signing_key.sign_message(rng, message)?;
    Ok((signature, signing_key.verifying_key().clone()))
}

/// Check a hex-encoded signature of `message` under `public_key`.
///
/// Every failure, including a malformed encoding, yields `false`.
pub fn verify(message: &[u8], signature_hex: &str, public_key: &VerifyingKey<'_>) -> bool {
    Signature::from_hex(signature_hex)
        .is_ok_and(|signature| public_key.is_valid(message, &signature))
}

/// [`sign`] over the shared reference curve using the operating system's
/// random number generator.
#[cfg(all(feature = "std", feature = "getrandom"))]
pub fn sign_with_os_rng(
    message: &[u8],
    private_key_bits: u64,
) -> Result<(Signature, VerifyingKey<'static>)> {
    sign(p192_params()?, message, private_key_bits, &mut rand_core::OsRng)
}

/// [`verify`] over the shared reference curve.
///
/// `public_key` is a SEC1 encoded point, compressed or uncompressed.
#[cfg(all(feature = "std", feature = "getrandom"))]
pub fn verify_message(message: &[u8], signature_hex: &str, public_key: &[u8]) -> bool {
    let Ok(params) = p192_params() else {
        return false;
    };

    VerifyingKey::from_encoded_point(params, public_key, &mut rand_core::OsRng)
        .is_ok_and(|key| verify(message, signature_hex, &key))
}
