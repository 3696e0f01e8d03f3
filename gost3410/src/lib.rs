#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_possible_truncation,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod dsa;
pub mod hash;

mod error;
mod params;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, Curve},
    dsa::{Signature, SigningKey, VerifyingKey},
    error::{Error, Result},
    hash::{DigestSize, hash},
    params::DomainParams,
};

#[cfg(all(feature = "std", feature = "getrandom"))]
pub use crate::params::p192_params;

pub use num_bigint::{self, BigInt, BigUint};
pub use signature;
