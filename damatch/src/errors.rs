//! Definition of errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// A specialized Result type for damatch.
pub type Result<T, E = DamatchError> = std::result::Result<T, E>;

/// The error type for damatch.
#[derive(Debug)]
pub enum DamatchError {
    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`SourceUnavailableError`].
    SourceUnavailable(SourceUnavailableError),

    /// The error variant for [`TryFromIntError`](std::num::TryFromIntError).
    TryFromInt(std::num::TryFromIntError),

    /// The error variant for [`DecodeError`](bincode::error::DecodeError).
    BincodeDecode(bincode::error::DecodeError),

    /// The error variant for [`EncodeError`](bincode::error::EncodeError).
    BincodeEncode(bincode::error::EncodeError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl DamatchError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn source_unavailable<P>(path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::SourceUnavailable(SourceUnavailableError {
            path: path.into(),
            source,
        })
    }
}

impl fmt::Display for DamatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::SourceUnavailable(e) => e.fmt(f),
            Self::TryFromInt(e) => e.fmt(f),
            Self::BincodeDecode(e) => e.fmt(f),
            Self::BincodeEncode(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for DamatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SourceUnavailable(e) => Some(&e.source),
            Self::StdIo(e) => Some(e),
            _ => None,
        }
    }
}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a word list cannot be opened for loading.
#[derive(Debug)]
pub struct SourceUnavailableError {
    /// Path of the word list.
    pub(crate) path: PathBuf,

    /// Underlying I/O error.
    pub(crate) source: std::io::Error,
}

impl SourceUnavailableError {
    /// Gets the path that could not be opened.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl fmt::Display for SourceUnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SourceUnavailableError: {} can not be opened for loading: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for SourceUnavailableError {}

impl From<std::num::TryFromIntError> for DamatchError {
    fn from(error: std::num::TryFromIntError) -> Self {
        Self::TryFromInt(error)
    }
}

impl From<bincode::error::DecodeError> for DamatchError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::BincodeDecode(error)
    }
}

impl From<bincode::error::EncodeError> for DamatchError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::BincodeEncode(error)
    }
}

impl From<std::io::Error> for DamatchError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
