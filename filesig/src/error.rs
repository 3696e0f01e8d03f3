//! Error type

use core::fmt::{self, Display};
use std::io;

/// Result type with the `filesig` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// File signing errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing a stream failed.
    Io(io::Error),

    /// Signed input is shorter than a tag.
    Truncated,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Truncated => f.write_str("signed input shorter than its tag"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Truncated => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
