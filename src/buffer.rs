//! Fixed-capacity, mutable character buffer.

use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::iter::Copied;
use core::ops::{Deref, Range};
use core::slice;

use crate::alloc::boxed::Box;
use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::class;
use crate::common::{check_offset, Error};
use crate::split::{Split, SplitMut};

mod cmp;
mod convert;

#[cfg(feature = "borsh")]
mod borsh;

#[cfg(feature = "bstr")]
mod bstr;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

/// Sentinel written into storage right after the logical end of the content,
/// whenever the content does not reach the end of the storage.
pub const TERMINATOR: char = '\0';

/// Mutable character buffer with a fixed capacity.
///
/// The storage is allocated once, when the buffer is created, and is never
/// reallocated: every operation works in place, and can only shrink the
/// logical length (or restore it up to the capacity with [`set_len`]).
///
/// # Examples
///
/// You can create a `CharBuf` from a [string slice][str] or an owned string
/// with [`From`], or with the fallible [`CharBuf::wrap`]:
///
/// ```
/// # use lightstr::CharBuf;
/// let mut buf = CharBuf::from("Hello");
/// buf.to_uppercase_in_place().reverse_in_place();
/// assert_eq!(buf, "OLLEH");
/// ```
///
/// # Layout
///
/// The content is the window `start .. start + len` of the storage. Most
/// operations keep the start at 0; [`trim_view`] and [`truncate_front`] move
/// it forward instead of shifting characters, and [`compact`] moves the
/// content back down.
///
/// [`set_len`]: CharBuf::set_len
/// [`trim_view`]: CharBuf::trim_view
/// [`truncate_front`]: CharBuf::truncate_front
/// [`compact`]: CharBuf::compact
#[derive(Clone, Default)]
pub struct CharBuf {
    storage: Box<[char]>,
    start: usize,
    len: usize,
}

impl CharBuf {
    /// Creates an empty `CharBuf`, with no capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let buf = CharBuf::new();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `text` into a newly allocated `CharBuf`, whose capacity is the
    /// number of characters in `text`.
    ///
    /// Unlike the `From<&str>` conversion, this function reports allocation
    /// failures instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let buf = CharBuf::wrap("Non mutable").unwrap();
    /// assert_eq!(buf, "Non mutable");
    /// assert_eq!(buf.capacity(), 11);
    /// ```
    pub fn wrap(text: &str) -> Result<Self, Error> {
        let mut storage: Vec<char> = Vec::new();
        storage.try_reserve_exact(text.chars().count())?;
        storage.extend(text.chars());
        Ok(Self::from_storage(storage.into_boxed_slice()))
    }

    /// Collects characters into a newly allocated `CharBuf`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let buf = CharBuf::try_from_chars("abc".chars().rev()).unwrap();
    /// assert_eq!(buf, "cba");
    /// ```
    pub fn try_from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let chars = chars.into_iter();
        let mut storage: Vec<char> = Vec::new();
        storage.try_reserve_exact(chars.size_hint().0)?;
        for c in chars {
            if storage.len() == storage.capacity() {
                storage.try_reserve(1)?;
            }
            storage.push(c);
        }
        Ok(Self::from_storage(storage.into_boxed_slice()))
    }

    #[inline]
    pub(crate) fn from_storage(storage: Box<[char]>) -> Self {
        let len = storage.len();
        Self {
            storage,
            start: 0,
            len,
        }
    }

    /// Returns the logical length, in characters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let buf = CharBuf::from("Rust \u{1F980}");
    /// assert_eq!(buf.len(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical length is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the storage, fixed at creation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("  abc  ");
    /// buf.trim_in_place();
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(buf.capacity(), 7);
    /// ```
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the offset of the content in the storage.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the largest length reachable from the current start offset,
    /// i.e. the capacity minus the start offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("  abc  ");
    /// buf.trim_view();
    /// assert_eq!(buf.start(), 2);
    /// assert_eq!(buf.max_len(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.storage.len() - self.start
    }

    /// Returns the content as a slice of characters.
    #[inline]
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.storage[self.content_range()]
    }

    /// Returns the content as a mutable slice of characters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("abc");
    /// buf.as_mut_chars()[1] = 'B';
    /// assert_eq!(buf, "aBc");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_mut_chars(&mut self) -> &mut [char] {
        let range = self.content_range();
        &mut self.storage[range]
    }

    /// Returns an iterator over the characters of the content.
    #[inline]
    pub fn chars(&self) -> Copied<slice::Iter<'_, char>> {
        self.as_chars().iter().copied()
    }

    /// Returns a raw pointer to the storage.
    ///
    /// The pointer stays the same across every in-place operation.
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const char {
        self.storage.as_ptr()
    }

    /// Returns `true` if both buffers are backed by the same storage.
    ///
    /// Two buffers of zero capacity may compare as identical.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::eq(&*self.storage, &*other.storage)
    }

    #[inline]
    const fn content_range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Sets the logical length to `new_len` and marks the new end of the
    /// content with the [`TERMINATOR`].
    ///
    /// Restoring a length re-exposes whatever the storage holds past the
    /// current end, terminators included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `new_len` is greater than
    /// [`max_len`](CharBuf::max_len). The buffer is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("abcdef");
    /// buf.set_len(3).unwrap();
    /// assert_eq!(buf, "abc");
    /// buf.set_len(6).unwrap();
    /// assert_eq!(buf, "abc\0ef");
    /// assert!(buf.set_len(7).is_err());
    /// ```
    pub fn set_len(&mut self, new_len: usize) -> Result<&mut Self, Error> {
        let max = self.max_len();
        if new_len > max {
            return Err(Error::InvalidLength {
                requested: new_len,
                max,
            });
        }
        self.resize(new_len);
        Ok(self)
    }

    /// Shortens the content to `new_len` characters.
    ///
    /// Has no effect if `new_len` is greater than or equal to the current
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("abcdef");
    /// buf.truncate(2).truncate(4);
    /// assert_eq!(buf, "ab");
    /// ```
    pub fn truncate(&mut self, new_len: usize) -> &mut Self {
        if new_len < self.len {
            self.resize(new_len);
        }
        self
    }

    /// Restores the whole storage as content: start offset 0, length equal to
    /// the capacity.
    pub fn reset(&mut self) -> &mut Self {
        self.start = 0;
        self.len = self.storage.len();
        self
    }

    /// Moves the content down to the start of the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("  abc  ");
    /// buf.trim_view().compact();
    /// assert_eq!(buf.start(), 0);
    /// assert_eq!(buf, "abc");
    /// assert_eq!(buf.max_len(), 7);
    /// ```
    pub fn compact(&mut self) -> &mut Self {
        if self.start > 0 {
            let range = self.content_range();
            self.storage.copy_within(range, 0);
            self.start = 0;
            self.resize(self.len);
        }
        self
    }

    /// Length mutation with the bound already checked by the caller.
    #[inline]
    fn resize(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.max_len());
        self.len = new_len;
        self.terminate_at(new_len);
    }

    /// Writes the [`TERMINATOR`] at `offset`, relative to the start of the
    /// content, if it falls inside the storage.
    #[inline]
    pub(crate) fn terminate_at(&mut self, offset: usize) {
        if let Some(slot) = self.storage.get_mut(self.start + offset) {
            *slot = TERMINATOR;
        }
    }

    /// Converts every character to uppercase, in place.
    ///
    /// See [`class::to_upper`] for the mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("Non mutable");
    /// buf.to_uppercase_in_place();
    /// assert_eq!(buf, "NON MUTABLE");
    /// ```
    pub fn to_uppercase_in_place(&mut self) -> &mut Self {
        for c in self.as_mut_chars() {
            *c = class::to_upper(*c);
        }
        self
    }

    /// Converts every character to lowercase, in place.
    ///
    /// See [`class::to_lower`] for the mapping.
    pub fn to_lowercase_in_place(&mut self) -> &mut Self {
        for c in self.as_mut_chars() {
            *c = class::to_lower(*c);
        }
        self
    }

    /// Removes leading and trailing whitespace without moving any character:
    /// the start offset moves past the leading whitespace and the length is
    /// cut before the trailing whitespace.
    ///
    /// The storage given up in front of the content is only recovered by
    /// [`compact`](CharBuf::compact) or [`reset`](CharBuf::reset).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("  a b  ");
    /// buf.trim_view();
    /// assert_eq!(buf, "a b");
    /// assert_eq!(buf.start(), 2);
    /// ```
    pub fn trim_view(&mut self) -> &mut Self {
        let chars = self.as_chars();
        let Some(first) = chars.iter().position(|&c| !class::is_whitespace(c)) else {
            self.resize(0);
            return self;
        };
        let last = chars
            .iter()
            .rposition(|&c| !class::is_whitespace(c))
            .unwrap_or(first);

        self.start += first;
        self.resize(last + 1 - first);
        self
    }

    /// Removes leading and trailing whitespace, shifting the retained
    /// characters down to the start of the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("  a b  ");
    /// buf.trim_in_place();
    /// assert_eq!(buf, "a b");
    /// assert_eq!(buf.start(), 0);
    /// ```
    pub fn trim_in_place(&mut self) -> &mut Self {
        let mut write = 0;
        let mut kept = 0;
        let mut leading = true;

        for read in self.content_range() {
            let c = self.storage[read];
            let space = class::is_whitespace(c);
            if leading && space {
                continue;
            }
            leading = false;
            self.storage[write] = c;
            write += 1;
            if !space {
                kept = write;
            }
        }

        self.start = 0;
        self.resize(kept);
        self
    }

    /// Collapses every run of whitespace into its first character, drops
    /// leading whitespace entirely, and strips a trailing whitespace left at
    /// the end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("a   b \t c  ");
    /// buf.collapse_whitespace_in_place();
    /// assert_eq!(buf, "a b c");
    /// ```
    pub fn collapse_whitespace_in_place(&mut self) -> &mut Self {
        let base = self.start;
        let mut write = 0;
        // starting at 1 drops leading whitespace
        let mut run = 1usize;

        for read in self.content_range() {
            let c = self.storage[read];
            run = if class::is_whitespace(c) {
                run.saturating_add(1)
            } else {
                0
            };
            if run <= 1 {
                self.storage[base + write] = c;
                write += 1;
            }
        }

        if write > 0 && class::is_whitespace(self.storage[base + write - 1]) {
            write -= 1;
        }
        self.resize(write);
        self
    }

    /// Replaces every occurrence of `old` with `new`, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("a-b-c");
    /// buf.replace_in_place('-', '+');
    /// assert_eq!(buf, "a+b+c");
    /// ```
    pub fn replace_in_place(&mut self, old: char, new: char) -> &mut Self {
        for c in self.as_mut_chars() {
            if *c == old {
                *c = new;
            }
        }
        self
    }

    /// Reverses the order of the characters, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("stressed");
    /// buf.reverse_in_place();
    /// assert_eq!(buf, "desserts");
    /// ```
    pub fn reverse_in_place(&mut self) -> &mut Self {
        let chars = self.as_mut_chars();
        let (mut p, mut q) = (0, chars.len());
        while p + 1 < q {
            q -= 1;
            chars.swap(p, q);
            p += 1;
        }
        self
    }

    /// Discards the first `start` characters.
    ///
    /// No character is moved: the start offset of the content moves forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is greater than the
    /// length. The buffer is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("Non mutable");
    /// buf.truncate_front(4).unwrap();
    /// assert_eq!(buf, "mutable");
    /// assert!(buf.truncate_front(8).is_err());
    /// ```
    pub fn truncate_front(&mut self, start: usize) -> Result<&mut Self, Error> {
        let start = check_offset(start, self.len)?;
        self.start += start;
        self.len -= start;
        Ok(self)
    }

    /// Sorts the characters by code point with a counting sort.
    ///
    /// Runs in `O(n + k)` time, where `k` is the distance between the
    /// smallest and the largest code point of the content.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let mut buf = CharBuf::from("dcba");
    /// buf.sort_chars_in_place();
    /// assert_eq!(buf, "abcd");
    /// ```
    pub fn sort_chars_in_place(&mut self) -> &mut Self {
        let chars = self.as_mut_chars();
        let (Some(&min), Some(&max)) = (chars.iter().min(), chars.iter().max()) else {
            return self;
        };
        let lo = min as usize;

        let mut counts = vec![0usize; max as usize - lo + 1];
        for &c in chars.iter() {
            counts[c as usize - lo] += 1;
        }

        let mut slots = chars.iter_mut();
        for (offset, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let Some(c) = u32::try_from(lo + offset).ok().and_then(char::from_u32) else {
                continue;
            };
            for slot in slots.by_ref().take(count) {
                *slot = c;
            }
        }
        self
    }

    /// Splits the content on `separator`.
    ///
    /// The segments are views into this buffer, which stays borrowed (and
    /// thus immutable) as long as the [`Split`] is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// let buf = CharBuf::from("Non,mutable");
    /// let split = buf.split(',');
    /// assert_eq!(split.len(), 2);
    /// assert_eq!(split.extract(1).unwrap(), "mutable");
    /// assert_eq!(split.extract(0).unwrap(), "Non");
    /// ```
    #[must_use]
    pub fn split(&self, separator: char) -> Split<'_> {
        Split::new(self, separator)
    }

    /// Splits the content on `separator`, keeping a mutable borrow of this
    /// buffer.
    ///
    /// See [`SplitMut::extract_terminated`].
    #[must_use]
    pub fn split_mut(&mut self, separator: char) -> SplitMut<'_> {
        SplitMut::new(self, separator)
    }
}

impl Deref for CharBuf {
    type Target = [char];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_chars()
    }
}

impl Hash for CharBuf {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_chars().hash(state);
    }
}

impl<'a> IntoIterator for &'a CharBuf {
    type Item = char;
    type IntoIter = Copied<slice::Iter<'a, char>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

// Formatting

impl fmt::Debug for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.chars() {
            for e in c.escape_debug() {
                f.write_char(e)?;
            }
        }
        f.write_char('"')
    }
}

impl fmt::Display for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}
