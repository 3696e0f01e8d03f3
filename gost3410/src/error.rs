//! Error type

use core::fmt::{self, Display};

/// Result type with the `gost3410` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Signature scheme and curve arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A scalar (private key, `r` or `s`) lies outside `[1, n-1]`.
    InvalidRange,

    /// Attempted to invert an element which has no modular inverse.
    NoModularInverse,

    /// The value has no square root modulo the given prime.
    NonResidue,

    /// Signature string is not two hex fields of the expected width.
    MalformedSignatureEncoding,

    /// Encoded point is malformed, not on the curve, or the identity.
    InvalidPoint,

    /// Curve domain parameters failed validation.
    InvalidDomainParameters,

    /// Requested private key size is zero or wider than the group order.
    InvalidKeySize,

    /// Hash oracle does not support the requested digest size.
    UnsupportedDigestSize,

    /// Signature does not match the message and public key.
    InvalidSignature,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidRange => "scalar out of range [1, n-1]",
            Error::NoModularInverse => "element has no modular inverse",
            Error::NonResidue => "value is not a quadratic residue",
            Error::MalformedSignatureEncoding => "malformed signature encoding",
            Error::InvalidPoint => "invalid curve point",
            Error::InvalidDomainParameters => "invalid curve domain parameters",
            Error::InvalidKeySize => "invalid private key size",
            Error::UnsupportedDigestSize => "unsupported digest size",
            Error::InvalidSignature => "signature verification failed",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
