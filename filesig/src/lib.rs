#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::panic,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod error;

pub use crate::error::{Error, Result};

use core::fmt::{self, Debug};
use hmac::{Hmac, Mac, digest::Key};
use rand_core::CryptoRngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write},
    path::Path,
};

type HmacSha256 = Hmac<Sha256>;

/// Size of a secret key in bytes: one SHA-256 block.
pub const KEY_SIZE: usize = 64;

/// Size of the tag prepended to signed contents.
pub const TAG_SIZE: usize = 32;

/// Read buffer size.
const CHUNK_SIZE: usize = 1024;

/// Secret HMAC key, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    /// Generate a random key.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        let mut key = Self([0u8; KEY_SIZE]);
        rng.fill_bytes(&mut key.0);
        key
    }

    /// Create a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    fn mac(&self) -> HmacSha256 {
        <HmacSha256 as Mac>::new(Key::<HmacSha256>::from_slice(&self.0))
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// Compute the tag of `contents` read to the end.
pub fn tag(key: &SecretKey, contents: impl Read) -> Result<[u8; TAG_SIZE]> {
    let (mac, _) = update_from(key.mac(), contents)?;
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Write `tag || contents` to `writer`.
///
/// The input is read twice: once to compute the tag and once, after
/// rewinding, to copy it out.
pub fn sign_stream<R, W>(key: &SecretKey, mut reader: R, mut writer: W) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let start = reader.stream_position()?;
    let tag = tag(key, &mut reader)?;
    reader.seek(SeekFrom::Start(start))?;

    writer.write_all(&tag)?;
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;

    tracing::debug!(bytes = copied, "signed stream");
    Ok(())
}

/// Check a `tag || contents` stream.
///
/// Returns `Ok(false)` when the stored and recomputed tags differ, and
/// [`Error::Truncated`] when the stream ends before a full tag.
pub fn verify_stream(key: &SecretKey, mut reader: impl Read) -> Result<bool> {
    let mut stored = [0u8; TAG_SIZE];
    reader.read_exact(&mut stored).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated,
        _ => Error::Io(err),
    })?;

    let (mac, len) = update_from(key.mac(), reader)?;
    let valid = mac.verify_slice(&stored).is_ok();

    if valid {
        tracing::debug!(bytes = len, "tags agree");
    } else {
        tracing::warn!(bytes = len, "tags differ, signed contents were modified");
    }

    Ok(valid)
}

/// Sign the file at `src`, writing the signed copy to `dst`.
#[tracing::instrument(level = "debug", skip(key, src, dst), fields(src = %src.as_ref().display()))]
pub fn sign_file(key: &SecretKey, src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let reader = BufReader::new(File::open(src.as_ref())?);
    let writer = BufWriter::new(File::create(dst.as_ref())?);
    sign_stream(key, reader, writer)
}

/// Verify the signed file at `path`.
#[tracing::instrument(level = "debug", skip(key, path), fields(path = %path.as_ref().display()))]
pub fn verify_file(key: &SecretKey, path: impl AsRef<Path>) -> Result<bool> {
    verify_stream(key, BufReader::new(File::open(path.as_ref())?))
}

/// Feed `reader` to `mac` in chunks until end of input.
fn update_from(mut mac: HmacSha256, mut reader: impl Read) -> Result<(HmacSha256, u64)> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut len = 0u64;

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok((mac, len)),
            Ok(n) => {
                mac.update(&buffer[..n]);
                len += n as u64;
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}
