//! Affine curve points and the curve group law.

use super::{inv_mod, sqrt_mod, sub_mod};
use crate::{Error, Result};
use alloc::vec::Vec;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// SEC1 tag byte for an even-`y` compressed point.
const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag byte for an odd-`y` compressed point.
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC1 tag byte for an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Point with coordinates reduced into `[0, p)`.
    Finite {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Create a finite point from its coordinates.
    ///
    /// The coordinates are not checked against any curve; use
    /// [`Curve::is_on_curve`] for that.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self::Finite { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Get the x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Identity => None,
            Self::Finite { x, .. } => Some(x),
        }
    }

    /// Get the y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Identity => None,
            Self::Finite { y, .. } => Some(y),
        }
    }

    /// Is the y-coordinate odd? The identity reports `false`.
    pub fn y_is_odd(&self) -> bool {
        self.y().is_some_and(|y| y.is_odd())
    }

    /// Is this point `(x, 0)`, i.e. a point of order two?
    pub fn is_two_torsion(&self) -> bool {
        self.y().is_some_and(|y| y.is_zero())
    }
}

/// Short Weierstrass curve `y² = x³ + ax + b` over `GF(p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl Curve {
    /// Create a curve from its field modulus and equation coefficients.
    ///
    /// `a` may be negative and both coefficients are reduced into `[0, p)`.
    /// Fails if `p` is not an odd integer greater than 3, or the curve is
    /// singular (`4a³ + 27b² ≡ 0 (mod p)`).
    pub fn new(p: BigUint, a: &BigInt, b: &BigUint) -> Result<Self> {
        if p <= BigUint::from(3u32) || p.is_even() {
            return Err(Error::InvalidDomainParameters);
        }

        let a = a
            .mod_floor(&BigInt::from(p.clone()))
            .to_biguint()
            .ok_or(Error::InvalidDomainParameters)?;
        let b = b % &p;

        let a3 = a.modpow(&BigUint::from(3u32), &p);
        let discriminant = (a3 * 4u32 + (&b * &b) * 27u32) % &p;
        if discriminant.is_zero() {
            return Err(Error::InvalidDomainParameters);
        }

        Ok(Self { p, a, b })
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Equation coefficient `a`, reduced into `[0, p)`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Equation coefficient `b`, reduced into `[0, p)`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Size of a serialized field element in bytes.
    pub fn field_len(&self) -> usize {
        usize::try_from(self.p.bits().div_ceil(8)).unwrap_or(usize::MAX)
    }

    /// Right hand side of the curve equation: `x³ + ax + b mod p`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x3 = x.modpow(&BigUint::from(3u32), &self.p);
        (x3 + &self.a * x + &self.b) % &self.p
    }

    /// Does the point satisfy the curve equation? The identity always does.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => true,
            AffinePoint::Finite { x, y } => {
                x < &self.p && y < &self.p && (y * y) % &self.p == self.rhs(x)
            }
        }
    }

    /// Returns `-point`.
    pub fn neg(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Finite { x, y } => AffinePoint::Finite {
                x: x.clone(),
                y: sub_mod(&BigUint::zero(), y, &self.p),
            },
        }
    }

    /// Returns `lhs + rhs`.
    ///
    /// Equal x-coordinates are routed to [`Curve::double`] when the points
    /// coincide and to the identity when they are inverses of each other.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        match (lhs, rhs) {
            (AffinePoint::Identity, _) => Ok(rhs.clone()),
            (_, AffinePoint::Identity) => Ok(lhs.clone()),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                if x1 == x2 {
                    return if y1 == y2 {
                        self.double(lhs)
                    } else {
                        Ok(AffinePoint::Identity)
                    };
                }

                let dy = sub_mod(y2, y1, &self.p);
                let dx = sub_mod(x2, x1, &self.p);
                let lambda = dy * inv_mod(&dx, &self.p)? % &self.p;
                Ok(self.chord(&lambda, x1, y1, x2))
            }
        }
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        match point {
            AffinePoint::Identity => Ok(AffinePoint::Identity),
            AffinePoint::Finite { y, .. } if y.is_zero() => Ok(AffinePoint::Identity),
            AffinePoint::Finite { x, y } => {
                let numerator = (x * x * 3u32 + &self.a) % &self.p;
                let denominator = (y * 2u32) % &self.p;
                let lambda = numerator * inv_mod(&denominator, &self.p)? % &self.p;
                Ok(self.chord(&lambda, x, y, x))
            }
        }
    }

    /// Third intersection of the line with slope `lambda` through
    /// `(x1, y1)`, reflected over the x-axis.
    fn chord(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> AffinePoint {
        let p = &self.p;
        let x3 = sub_mod(&sub_mod(&(lambda * lambda), x1, p), x2, p);
        let y3 = sub_mod(&(lambda * sub_mod(x1, &x3, p)), y1, p);
        AffinePoint::Finite { x: x3, y: y3 }
    }

    /// Returns `k · point` using double-and-add over the bits of `k`, least
    /// significant bit first.
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        let bits = k.bits();
        let mut acc = AffinePoint::Identity;
        let mut addend = point.clone();

        for i in 0..bits {
            if k.bit(i) {
                acc = self.add(&acc, &addend)?;
            }

            if i + 1 < bits {
                addend = self.double(&addend)?;
            }
        }

        Ok(acc)
    }

    /// Recover a point from a parity byte followed by a big-endian
    /// x-coordinate.
    ///
    /// Only the lowest bit of the parity byte is significant, so both SEC1
    /// compressed tags (`0x02`, `0x03`) are accepted.
    pub fn decompress(&self, bytes: &[u8], rng: &mut impl CryptoRngCore) -> Result<AffinePoint> {
        let (parity, x_bytes) = bytes.split_first().ok_or(Error::InvalidPoint)?;
        if x_bytes.is_empty() {
            return Err(Error::InvalidPoint);
        }

        let x = BigUint::from_bytes_be(x_bytes);
        if x >= self.p {
            return Err(Error::InvalidPoint);
        }

        let beta = sqrt_mod(&self.rhs(&x), &self.p, rng)?;
        let y = if beta.is_odd() == (parity & 1 == 1) {
            beta
        } else {
            sub_mod(&BigUint::zero(), &beta, &self.p)
        };

        Ok(AffinePoint::Finite { x, y })
    }

    /// Parse a SEC1 compressed point: tag `0x02` or `0x03` followed by
    /// exactly [`Curve::field_len`] bytes of x-coordinate.
    pub fn from_compressed_bytes(
        &self,
        bytes: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<AffinePoint> {
        match bytes.split_first() {
            Some((&(TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD), x))
                if x.len() == self.field_len() =>
            {
                self.decompress(bytes, rng)
            }
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Serialize a finite point as `parity || x`, using the SEC1 tags.
    pub fn to_compressed_bytes(&self, point: &AffinePoint) -> Result<Vec<u8>> {
        let x = point.x().ok_or(Error::InvalidPoint)?;
        let tag = if point.y_is_odd() {
            TAG_COMPRESSED_ODD
        } else {
            TAG_COMPRESSED_EVEN
        };

        let mut bytes = Vec::with_capacity(1 + self.field_len());
        bytes.push(tag);
        bytes.extend_from_slice(&self.encode_field(x));
        Ok(bytes)
    }

    /// Serialize a finite point as SEC1 uncompressed `0x04 || x || y`.
    pub fn to_uncompressed_bytes(&self, point: &AffinePoint) -> Result<Vec<u8>> {
        let AffinePoint::Finite { x, y } = point else {
            return Err(Error::InvalidPoint);
        };

        let mut bytes = Vec::with_capacity(1 + 2 * self.field_len());
        bytes.push(TAG_UNCOMPRESSED);
        bytes.extend_from_slice(&self.encode_field(x));
        bytes.extend_from_slice(&self.encode_field(y));
        Ok(bytes)
    }

    /// Parse a SEC1 uncompressed `0x04 || x || y` point and check it lies on
    /// the curve.
    pub fn from_uncompressed_bytes(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let len = self.field_len();
        match bytes.split_first() {
            Some((&TAG_UNCOMPRESSED, coords)) if coords.len() == 2 * len => {
                let (x, y) = coords.split_at(len);
                let point = AffinePoint::Finite {
                    x: BigUint::from_bytes_be(x),
                    y: BigUint::from_bytes_be(y),
                };

                if self.is_on_curve(&point) {
                    Ok(point)
                } else {
                    Err(Error::InvalidPoint)
                }
            }
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Big-endian encoding of a field element, left padded to
    /// [`Curve::field_len`] bytes.
    pub(crate) fn encode_field(&self, value: &BigUint) -> Vec<u8> {
        left_pad(&value.to_bytes_be(), self.field_len())
    }
}

/// Left pad `bytes` with zeroes to `len` bytes.
pub(crate) fn left_pad(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len.max(bytes.len()));
    out.resize(len.saturating_sub(bytes.len()), 0);
    out.extend_from_slice(bytes);
    out
}
