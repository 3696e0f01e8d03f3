//! Curve domain parameters.

use crate::{
    AffinePoint, Curve, DigestSize, Error, Result,
    arithmetic::{is_probable_prime, random_scalar, sub_mod},
};
use alloc::vec::Vec;
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Field modulus of the reference curve.
///
/// ```text
/// p = 6277101735386680763835789423207666416083908700390324961279
///   = 2¹⁹² - 2⁶⁴ - 1
/// ```
const P192_MODULUS: [u8; 24] = hex!("fffffffffffffffffffffffffffffffeffffffffffffffff");

/// Equation coefficient `a = -3` of the reference curve.
const P192_EQUATION_A: i32 = -3;

/// Equation coefficient `b` of the reference curve.
const P192_EQUATION_B: [u8; 24] = hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1");

/// Order of the reference curve's base point.
const P192_ORDER: [u8; 24] = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

/// Compressed base point of the reference curve: odd `y`, then `Gₓ`.
const P192_GENERATOR: [u8; 25] = hex!("03188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");

/// Elliptic curve domain parameters `(p, a, b, n, G)`.
///
/// The base point is decompressed and validated once, when the parameters
/// are constructed, and never changes afterwards. A single instance can be
/// shared by reference between any number of signers and verifiers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainParams {
    curve: Curve,
    order: BigUint,
    generator: AffinePoint,
    compressed_generator: Vec<u8>,
    digest_size: DigestSize,
}

impl DomainParams {
    /// Build and validate domain parameters, drawing the randomness used by
    /// base point decompression from the operating system.
    #[cfg(feature = "getrandom")]
    pub fn new(
        p: BigUint,
        a: &BigInt,
        b: &BigUint,
        n: BigUint,
        compressed_generator: &[u8],
    ) -> Result<Self> {
        Self::new_with_rng(p, a, b, n, compressed_generator, &mut OsRng)
    }

    /// Build and validate domain parameters.
    ///
    /// `compressed_generator` is a parity byte followed by the big-endian
    /// x-coordinate of the base point. Fails unless `p` and `n` pass a
    /// Miller-Rabin test, the curve is non-singular, the base point
    /// decompresses, and `n · G` is the identity.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new_with_rng(
        p: BigUint,
        a: &BigInt,
        b: &BigUint,
        n: BigUint,
        compressed_generator: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        if n <= BigUint::one() || !is_probable_prime(&p, rng) || !is_probable_prime(&n, rng) {
            return Err(Error::InvalidDomainParameters);
        }

        let curve = Curve::new(p, a, b)?;
        let generator = curve.decompress(compressed_generator, rng)?;

        if !curve.mul(&generator, &n)?.is_identity() {
            return Err(Error::InvalidDomainParameters);
        }

        tracing::debug!(
            field_bits = curve.p().bits(),
            order_bits = n.bits(),
            "domain parameters validated"
        );

        Ok(Self {
            curve,
            order: n,
            generator,
            compressed_generator: compressed_generator.to_vec(),
            digest_size: DigestSize::default(),
        })
    }

    /// Reference 192-bit curve (NIST P-192 coefficients) with Streebog-256.
    #[cfg(feature = "getrandom")]
    pub fn p192() -> Result<Self> {
        Self::p192_with_rng(&mut OsRng)
    }

    /// Reference 192-bit curve (NIST P-192 coefficients) with Streebog-256.
    pub fn p192_with_rng(rng: &mut impl CryptoRngCore) -> Result<Self> {
        Self::new_with_rng(
            BigUint::from_bytes_be(&P192_MODULUS),
            &BigInt::from(P192_EQUATION_A),
            &BigUint::from_bytes_be(&P192_EQUATION_B),
            BigUint::from_bytes_be(&P192_ORDER),
            &P192_GENERATOR,
            rng,
        )
    }

    /// Use a different Streebog digest size for message hashing.
    pub fn with_digest_size(mut self, digest_size: DigestSize) -> Self {
        self.digest_size = digest_size;
        self
    }

    /// Underlying curve equation.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Decompressed base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Base point in the compressed form it was constructed from.
    pub fn compressed_generator(&self) -> &[u8] {
        &self.compressed_generator
    }

    /// Digest size used for message hashing.
    pub fn digest_size(&self) -> DigestSize {
        self.digest_size
    }

    /// Number of hex digits in each signature component:
    /// `⌈bitlength(n) / 4⌉`.
    pub fn scalar_hex_width(&self) -> usize {
        usize::try_from(self.order.bits().div_ceil(4)).unwrap_or(usize::MAX)
    }

    /// Recover a curve point from `parity || x`.
    ///
    /// See [`Curve::decompress`].
    pub fn decompress(&self, bytes: &[u8], rng: &mut impl CryptoRngCore) -> Result<AffinePoint> {
        self.curve.decompress(bytes, rng)
    }

    /// Returns `k · G`.
    pub fn mul_generator(&self, k: &BigUint) -> Result<AffinePoint> {
        self.curve.mul(&self.generator, k)
    }

    /// Is `k` in `[1, n-1]`?
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        !k.is_zero() && k < &self.order
    }

    /// Draw a uniformly random scalar in `[1, n-1]`.
    pub fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> BigUint {
        random_scalar(rng, &self.order)
    }

    /// Map a message digest onto `e ∈ [1, n-1]`: the big-endian integer
    /// value reduced modulo `n`, with `0` replaced by `1`.
    pub fn reduce_digest(&self, digest: &[u8]) -> BigUint {
        let e = BigUint::from_bytes_be(digest) % &self.order;
        if e.is_zero() { BigUint::one() } else { e }
    }

    /// Returns `(n - value mod n) mod n`.
    pub(crate) fn neg_scalar(&self, value: &BigUint) -> BigUint {
        sub_mod(&BigUint::zero(), value, &self.order)
    }
}

/// Process-wide reference curve, decompressed on first use.
#[cfg(all(feature = "std", feature = "getrandom"))]
static P192: std::sync::LazyLock<Result<DomainParams>> =
    std::sync::LazyLock::new(DomainParams::p192);

/// Shared reference curve parameters.
///
/// Initialized once on first use; every caller gets the same immutable
/// instance.
#[cfg(all(feature = "std", feature = "getrandom"))]
pub fn p192_params() -> Result<&'static DomainParams> {
    P192.as_ref().map_err(|err| *err)
}

#[cfg(test)]
mod tests {
    use super::{DomainParams, P192_MODULUS};
    use crate::{AffinePoint, Error};
    use hex_literal::hex;
    use num_bigint::{BigInt, BigUint};
    use rand_core::OsRng;

    #[test]
    fn reference_modulus_matches_decimal() {
        let decimal = BigUint::parse_bytes(
            b"6277101735386680763835789423207666416083908700390324961279",
            10,
        )
        .unwrap();
        assert_eq!(BigUint::from_bytes_be(&P192_MODULUS), decimal);
    }

    #[test]
    fn reference_generator() {
        let params = DomainParams::p192_with_rng(&mut OsRng).unwrap();
        let expected = AffinePoint::new(
            BigUint::from_bytes_be(&hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012")),
            BigUint::from_bytes_be(&hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811")),
        );

        assert_eq!(params.generator(), &expected);
        assert!(params.curve().is_on_curve(params.generator()));
        assert_eq!(params.scalar_hex_width(), 48);
        assert_eq!(params.curve().field_len(), 24);
    }

    #[test]
    fn order_mismatch_is_rejected() {
        let err = DomainParams::new_with_rng(
            BigUint::from_bytes_be(&P192_MODULUS),
            &BigInt::from(-3),
            &BigUint::from_bytes_be(&hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1")),
            BigUint::from_bytes_be(&hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22833")),
            &hex!("03188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
            &mut OsRng,
        );
        assert_eq!(err, Err(Error::InvalidDomainParameters));
    }

    #[test]
    fn tiny_order_is_rejected() {
        let err = DomainParams::new_with_rng(
            97u32.into(),
            &BigInt::from(2),
            &3u32.into(),
            BigUint::from(1u32),
            &[0x02, 3],
            &mut OsRng,
        );
        assert_eq!(err, Err(Error::InvalidDomainParameters));
    }

    #[test]
    fn composite_moduli_are_rejected() {
        // 10·(3, 6) is the identity, but 10 is not prime
        let composite_order = DomainParams::new_with_rng(
            97u32.into(),
            &BigInt::from(2),
            &3u32.into(),
            10u32.into(),
            &[0x02, 3],
            &mut OsRng,
        );
        assert_eq!(composite_order, Err(Error::InvalidDomainParameters));

        let composite_field = DomainParams::new_with_rng(
            91u32.into(),
            &BigInt::from(2),
            &3u32.into(),
            5u32.into(),
            &[0x02, 3],
            &mut OsRng,
        );
        assert_eq!(composite_field, Err(Error::InvalidDomainParameters));
    }

    #[test]
    fn toy_curve_parameters() {
        // (3, 6) has order 5 on y² = x³ + 2x + 3 over GF(97)
        let params = DomainParams::new_with_rng(
            97u32.into(),
            &BigInt::from(2),
            &3u32.into(),
            5u32.into(),
            &[0x02, 3],
            &mut OsRng,
        )
        .unwrap();
        assert_eq!(params.generator(), &AffinePoint::new(3u32.into(), 6u32.into()));
        assert_eq!(params.scalar_hex_width(), 1);
    }

    #[test]
    fn digest_reduction_substitutes_one_for_zero() {
        let params = DomainParams::p192_with_rng(&mut OsRng).unwrap();
        let n_bytes = params.order().to_bytes_be();

        assert_eq!(params.reduce_digest(&n_bytes), BigUint::from(1u32));
        assert_eq!(params.reduce_digest(&[0u8; 32]), BigUint::from(1u32));
        assert_eq!(params.reduce_digest(&[0x2a]), BigUint::from(42u32));
    }

    #[test]
    fn non_residue_generator_is_rejected() {
        // x = 5: 125 + 10 + 3 = 138 ≡ 41, a non-residue mod 97
        let err = DomainParams::new_with_rng(
            97u32.into(),
            &BigInt::from(2),
            &3u32.into(),
            5u32.into(),
            &[0x02, 5],
            &mut OsRng,
        );
        assert_eq!(err, Err(Error::NonResidue));
    }
}
