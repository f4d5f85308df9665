//! Bstr support for `CharBuf`.
//!
//! Byte strings compare with the UTF-8 encoding of the content.

use core::cmp::Ordering;
use core::str;

use bstr::{BStr, BString};

use super::CharBuf;
use crate::alloc::vec::Vec;
use crate::macros::{symmetric_eq, symmetric_ord};

/// Iterates over the UTF-8 encoding of the content.
fn utf8_bytes(buf: &CharBuf) -> impl Iterator<Item = u8> + '_ {
    buf.chars().flat_map(|c| {
        let mut tmp = [0; 4];
        let n = c.encode_utf8(&mut tmp).len();
        tmp.into_iter().take(n)
    })
}

#[inline]
fn bstr_eq<S: AsRef<[u8]> + ?Sized>(a: &S, b: &CharBuf) -> bool {
    a.as_ref().iter().copied().eq(utf8_bytes(b))
}

#[inline]
fn bstr_cmp<S: AsRef<[u8]> + ?Sized>(a: &S, b: &CharBuf) -> Option<Ordering> {
    Some(a.as_ref().iter().copied().cmp(utf8_bytes(b)))
}

symmetric_eq! {
    (BStr, CharBuf) = bstr_eq;
    (&BStr, CharBuf) = bstr_eq;
    (BString, CharBuf) = bstr_eq;
    (&BString, CharBuf) = bstr_eq;
}

symmetric_ord! {
    (BStr, CharBuf) = bstr_cmp;
    (&BStr, CharBuf) = bstr_cmp;
    (BString, CharBuf) = bstr_cmp;
    (&BString, CharBuf) = bstr_cmp;
}

impl TryFrom<&BStr> for CharBuf {
    type Error = str::Utf8Error;

    fn try_from(value: &BStr) -> Result<Self, Self::Error> {
        let slice = <&[u8]>::from(value);
        str::from_utf8(slice).map(Self::from)
    }
}

impl TryFrom<BString> for CharBuf {
    type Error = str::Utf8Error;

    fn try_from(value: BString) -> Result<Self, Self::Error> {
        let vec = Vec::from(value);
        str::from_utf8(&vec).map(Self::from)
    }
}

impl From<&CharBuf> for BString {
    fn from(value: &CharBuf) -> Self {
        Self::from(utf8_bytes(value).collect::<Vec<u8>>())
    }
}
