//! Group law tests on the reference curve.

use gost3410::{
    AffinePoint, BigUint, DomainParams, Error,
    arithmetic::{legendre, sqrt_mod},
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::OsRng;
use std::sync::LazyLock;

static PARAMS: LazyLock<DomainParams> =
    LazyLock::new(|| DomainParams::p192_with_rng(&mut OsRng).unwrap());

/// `2·G` on P-192.
const DOUBLE_G: [u8; 49] = hex!(
    "04"
    "dafebf5828783f2ad35534631588a3f629a70fb16982a888"
    "dd6bda0d993da0fa46b27bbc141b868f59331afa5c7e93ab"
);

#[test]
fn double_generator() {
    let curve = PARAMS.curve();
    let g = PARAMS.generator();
    let expected = curve.from_uncompressed_bytes(&DOUBLE_G).unwrap();

    assert_eq!(curve.double(g).unwrap(), expected);
    assert_eq!(curve.add(g, g).unwrap(), expected);
    assert_eq!(PARAMS.mul_generator(&BigUint::from(2u32)).unwrap(), expected);
}

#[test]
fn generator_order() {
    let curve = PARAMS.curve();
    let n = PARAMS.order();

    assert_eq!(PARAMS.mul_generator(n).unwrap(), AffinePoint::Identity);
    assert_eq!(
        PARAMS.mul_generator(&(n - 1u32)).unwrap(),
        curve.neg(PARAMS.generator())
    );
    assert_eq!(
        PARAMS.mul_generator(&(n + 1u32)).unwrap(),
        *PARAMS.generator()
    );
}

#[test]
fn field_modulus_square_roots() {
    let p = PARAMS.curve().p();

    // p ≡ 3 (mod 4)
    assert_eq!(p % 4u32, BigUint::from(3u32));

    let x = BigUint::from_bytes_be(&hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"));
    let square = &x * &x % p;
    let root = sqrt_mod(&square, p, &mut OsRng).unwrap();
    assert!(root == x || root == p - &x);

    let minus_one = p - 1u32;
    assert_eq!(legendre(&minus_one, p), minus_one);
    assert_eq!(sqrt_mod(&minus_one, p, &mut OsRng), Err(Error::NonResidue));
}

#[test]
fn decompression_rejects_off_curve_x() {
    let curve = PARAMS.curve();

    // x = 1 gives 1 - 3 + b, a non-residue modulo p
    assert_eq!(
        PARAMS.decompress(&[0x02, 0x01], &mut OsRng),
        Err(Error::NonResidue)
    );

    // x = 0 gives b, which has a square root
    let point = PARAMS.decompress(&[0x02, 0x00], &mut OsRng).unwrap();
    assert!(curve.is_on_curve(&point));
    assert!(!point.y_is_odd());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_mul_composes(k1 in 1u64.., k2 in 1u64..) {
        let n = PARAMS.order();
        let (k1, k2) = (BigUint::from(k1), BigUint::from(k2));

        let lhs = PARAMS.curve().mul(&PARAMS.mul_generator(&k2).unwrap(), &k1).unwrap();
        let rhs = PARAMS.mul_generator(&(&k1 * &k2 % n)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mul_distributes(k1 in 1u64.., k2 in 1u64..) {
        let (k1, k2) = (BigUint::from(k1), BigUint::from(k2));

        let sum = PARAMS.curve().add(
            &PARAMS.mul_generator(&k1).unwrap(),
            &PARAMS.mul_generator(&k2).unwrap(),
        ).unwrap();
        prop_assert_eq!(sum, PARAMS.mul_generator(&(k1 + k2)).unwrap());
    }

    #[test]
    fn compression_round_trip(k in 1u64..) {
        let curve = PARAMS.curve();
        let point = PARAMS.mul_generator(&BigUint::from(k)).unwrap();
        prop_assert!(curve.is_on_curve(&point));

        let compressed = curve.to_compressed_bytes(&point).unwrap();
        prop_assert_eq!(compressed.len(), 25);
        prop_assert_eq!(PARAMS.decompress(&compressed, &mut OsRng).unwrap(), point);
    }
}
