//! Comparison trait implementations for `CharBuf`.
//!
//! Buffers compare by content only; see [`CharBuf::ptr_eq`] for identity.

use core::cmp::Ordering;

use super::CharBuf;
use crate::alloc::borrow::Cow;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::macros::{symmetric_eq, symmetric_ord};

// Equality

impl Eq for CharBuf {}

impl PartialEq for CharBuf {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

#[inline]
fn str_eq<S: AsRef<str> + ?Sized>(a: &S, b: &CharBuf) -> bool {
    a.as_ref().chars().eq(b.chars())
}

#[inline]
fn chars_eq<S: AsRef<[char]> + ?Sized>(a: &S, b: &CharBuf) -> bool {
    a.as_ref() == b.as_chars()
}

symmetric_eq! {
    (str, CharBuf) = str_eq;
    (&str, CharBuf) = str_eq;
    (String, CharBuf) = str_eq;
    (Cow<'_, str>, CharBuf) = str_eq;
    ([char], CharBuf) = chars_eq;
    (&[char], CharBuf) = chars_eq;
    (Vec<char>, CharBuf) = chars_eq;
}

// Ordering

impl Ord for CharBuf {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_chars().cmp(other.as_chars())
    }
}

impl PartialOrd for CharBuf {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn str_cmp<S: AsRef<str> + ?Sized>(a: &S, b: &CharBuf) -> Option<Ordering> {
    Some(a.as_ref().chars().cmp(b.chars()))
}

symmetric_ord! {
    (str, CharBuf) = str_cmp;
    (&str, CharBuf) = str_cmp;
    (String, CharBuf) = str_cmp;
}
