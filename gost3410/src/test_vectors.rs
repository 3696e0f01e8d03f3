//! Known-answer test vectors.

pub mod ecdsa;

/// Secret key, public point, and nonce with the `r` component it yields.
#[derive(Debug)]
pub struct TestVector {
    /// Secret scalar `d`, big endian.
    pub d: &'static [u8],

    /// x-coordinate of `Q = d·G`.
    pub q_x: &'static [u8],

    /// y-coordinate of `Q = d·G`.
    pub q_y: &'static [u8],

    /// Signing nonce `k`.
    pub k: &'static [u8],

    /// `x(k·G) mod n`.
    pub r: &'static [u8],
}
