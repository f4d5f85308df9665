//! Conversion trait implementations for `CharBuf`.

use super::CharBuf;
use crate::alloc::borrow::Cow;
use crate::alloc::boxed::Box;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;

impl AsRef<[char]> for CharBuf {
    #[inline]
    fn as_ref(&self) -> &[char] {
        self.as_chars()
    }
}

impl AsMut<[char]> for CharBuf {
    #[inline]
    fn as_mut(&mut self) -> &mut [char] {
        self.as_mut_chars()
    }
}

// Infallible conversions

impl From<&str> for CharBuf {
    #[inline]
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<&String> for CharBuf {
    #[inline]
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<String> for CharBuf {
    #[inline]
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Cow<'_, str>> for CharBuf {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::from(value.as_ref())
    }
}

impl From<&[char]> for CharBuf {
    #[inline]
    fn from(value: &[char]) -> Self {
        Self::from_storage(Box::from(value))
    }
}

/// Takes ownership of the boxed slice as storage, without copying.
impl From<Box<[char]>> for CharBuf {
    #[inline]
    fn from(value: Box<[char]>) -> Self {
        Self::from_storage(value)
    }
}

/// Takes ownership of the vector as storage. The vector is shrunk to fit,
/// which may reallocate.
impl From<Vec<char>> for CharBuf {
    #[inline]
    fn from(value: Vec<char>) -> Self {
        Self::from_storage(value.into_boxed_slice())
    }
}

impl FromIterator<char> for CharBuf {
    #[inline]
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::from_storage(iter.into_iter().collect())
    }
}

// Read back

impl From<&CharBuf> for String {
    #[inline]
    fn from(value: &CharBuf) -> Self {
        value.chars().collect()
    }
}

impl From<CharBuf> for String {
    #[inline]
    fn from(value: CharBuf) -> Self {
        Self::from(&value)
    }
}

impl From<CharBuf> for Vec<char> {
    #[inline]
    fn from(value: CharBuf) -> Self {
        value.as_chars().to_vec()
    }
}
