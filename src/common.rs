//! Common functions and types.

use core::{error, fmt};

use crate::alloc::collections::TryReserveError;

/// Errors returned by fallible [`CharBuf`](crate::CharBuf) and
/// [`Split`](crate::Split) operations.
///
/// A failed operation never leaves a partial mutation behind: bounds are
/// checked before storage is touched.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The storage could not be allocated.
    Allocation(TryReserveError),
    /// The requested length exceeds what the storage can hold.
    InvalidLength { requested: usize, max: usize },
    /// The index is outside the valid bounds.
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Returns a static message for the error.
    #[must_use]
    pub const fn const_message(&self) -> &'static str {
        match self {
            Self::Allocation(_) => "memory allocation failed",
            Self::InvalidLength { .. } => "length exceeds capacity",
            Self::IndexOutOfRange { .. } => "index out of range",
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "memory allocation failed: {err}"),
            Self::InvalidLength { requested, max } => {
                write!(f, "length {requested} exceeds the maximal length {max}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
        }
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(err: TryReserveError) -> Self {
        Self::Allocation(err)
    }
}

/// Checks that `index < len`.
#[inline]
pub(crate) const fn check_index(index: usize, len: usize) -> Result<usize, Error> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Checks that `offset <= len`, i.e. `offset` is a valid cut point.
#[inline]
pub(crate) const fn check_offset(offset: usize, len: usize) -> Result<usize, Error> {
    if offset <= len {
        Ok(offset)
    } else {
        Err(Error::IndexOutOfRange { index: offset, len })
    }
}
