//! Message hashing with Streebog (GOST R 34.11-2012).
//!
//! Any [`Digest`] can be used through [`hash_with`]; the domain parameters
//! carry a [`DigestSize`] selecting the Streebog variant used by the
//! message-level signing and verification APIs.

use crate::{Error, Result};
use alloc::vec::Vec;
use streebog::{Digest, Streebog256, Streebog512};

/// Output size of the Streebog hash oracle.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum DigestSize {
    /// Streebog-256.
    #[default]
    Bits256,

    /// Streebog-512.
    Bits512,
}

impl DigestSize {
    /// Digest size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits256 => 256,
            Self::Bits512 => 512,
        }
    }

    /// Hash `message` with the Streebog variant of this size.
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Bits256 => hash_with::<Streebog256>(message),
            Self::Bits512 => hash_with::<Streebog512>(message),
        }
    }
}

impl TryFrom<usize> for DigestSize {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            256 => Ok(Self::Bits256),
            512 => Ok(Self::Bits512),
            _ => Err(Error::UnsupportedDigestSize),
        }
    }
}

/// Hash `message` producing a `digest_bits`-bit Streebog digest.
///
/// Only 256 and 512 bit digests are supported.
pub fn hash(message: &[u8], digest_bits: usize) -> Result<Vec<u8>> {
    Ok(DigestSize::try_from(digest_bits)?.digest(message))
}

/// Hash `message` with an arbitrary [`Digest`].
pub fn hash_with<D: Digest>(message: &[u8]) -> Vec<u8> {
    D::digest(message).to_vec()
}

#[cfg(test)]
mod tests {
    use super::{DigestSize, hash};
    use crate::Error;
    use hex_literal::hex;

    // GOST R 34.11-2012 Appendix A, example 1
    const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";

    #[test]
    fn streebog256_test_vector() {
        assert_eq!(
            hash(M1, 256).unwrap(),
            hex!("9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500")
        );
    }

    #[test]
    fn streebog512_test_vector() {
        assert_eq!(
            hash(M1, 512).unwrap(),
            hex!(
                "1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa"
                "00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48"
            )
        );
    }

    #[test]
    fn unsupported_sizes() {
        for bits in [0, 128, 255, 384] {
            assert_eq!(hash(b"", bits), Err(Error::UnsupportedDigestSize));
        }
        assert_eq!(DigestSize::try_from(512).unwrap().bits(), 512);
    }
}
