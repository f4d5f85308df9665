//! Delimiter split over a [`CharBuf`], with segments as views into the
//! buffer's storage.
//!
//! A split scans the content once and only records the boundaries of the
//! segments; no segment is copied until asked for.
//!
//! ```
//! # use lightstr::CharBuf;
//! let buf = CharBuf::from("a,b,,c");
//! let split = buf.split(',');
//! assert_eq!(split.len(), 4);
//!
//! let segments: Vec<String> = split.iter().map(String::from_iter).collect();
//! assert_eq!(segments, ["a", "b", "", "c"]);
//! ```

use core::iter::{Enumerate, FusedIterator};
use core::ops::Range;
use core::slice::Windows;

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::buffer::CharBuf;
use crate::common::{check_index, Error};


/// Records the boundaries of the segments of `chars` split on `separator`:
/// `0`, the offset of every separator, and the length.
///
/// Empty content has no boundary at all, hence no segment.
fn scan(chars: &[char], separator: char) -> Vec<usize> {
    if chars.is_empty() {
        return Vec::new();
    }

    let mut boundaries = Vec::with_capacity(2);
    boundaries.push(0);
    boundaries.extend(
        chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == separator)
            .map(|(i, _)| i),
    );
    boundaries.push(chars.len());
    boundaries
}

/// Range of the `index`-th segment, relative to the content.
///
/// Every segment but the first begins right after its boundary, which holds
/// either the separator or a terminator written by an earlier extraction.
#[inline]
fn span(boundaries: &[usize], index: usize) -> Result<Range<usize>, Error> {
    let index = check_index(index, segment_count(boundaries))?;
    Ok(segment_range(index, boundaries[index], boundaries[index + 1]))
}

#[inline]
fn segment_range(index: usize, start: usize, end: usize) -> Range<usize> {
    start + usize::from(index > 0)..end
}

#[inline]
const fn segment_count(boundaries: &[usize]) -> usize {
    boundaries.len().saturating_sub(1)
}

/// Segments of a [`CharBuf`] split on a separator.
///
/// This object is created by [`CharBuf::split`]. It borrows the buffer, which
/// therefore cannot be mutated nor dropped while the split is alive.
///
/// # Examples
///
/// ```
/// # use lightstr::CharBuf;
/// let buf = CharBuf::from("Non,mutable");
/// let split = buf.split(',');
/// assert_eq!(split.segment(0).unwrap(), ['N', 'o', 'n']);
/// assert_eq!(split.extract(1).unwrap(), "mutable");
/// assert!(split.extract(2).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Split<'a> {
    source: &'a CharBuf,
    boundaries: Vec<usize>,
}

impl<'a> Split<'a> {
    pub(crate) fn new(source: &'a CharBuf, separator: char) -> Self {
        let boundaries = scan(source.as_chars(), separator);
        Self { source, boundaries }
    }

    /// Returns the number of segments.
    ///
    /// Splitting an empty buffer yields no segment at all, while a non-empty
    /// buffer without separator yields exactly one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::CharBuf;
    /// assert_eq!(CharBuf::from("").split(',').len(), 0);
    /// assert_eq!(CharBuf::from("abc").split(',').len(), 1);
    /// assert_eq!(CharBuf::from(",,").split(',').len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        segment_count(&self.boundaries)
    }

    /// Returns `true` if there is no segment.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the boundaries, as offsets into the content of the buffer.
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Returns the buffer this split was made from.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &'a CharBuf {
        self.source
    }

    /// Returns the `index`-th segment as a view into the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](Split::len).
    pub fn segment(&self, index: usize) -> Result<&'a [char], Error> {
        let range = span(&self.boundaries, index)?;
        Ok(&self.source.as_chars()[range])
    }

    /// Copies the `index`-th segment into a new `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](Split::len).
    pub fn extract(&self, index: usize) -> Result<String, Error> {
        self.segment(index).map(|chars| chars.iter().collect())
    }

    /// Returns an iterator over the segments.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments::new(self.source.as_chars(), &self.boundaries)
    }
}

impl<'s> IntoIterator for &'s Split<'_> {
    type Item = &'s [char];
    type IntoIter = Segments<'s>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Segments of a [`CharBuf`] split on a separator, holding a mutable borrow
/// of the buffer.
///
/// This object is created by [`CharBuf::split_mut`]. Besides the read-only
/// accessors of [`Split`], it offers
/// [`extract_terminated`](SplitMut::extract_terminated), which marks the end
/// of a segment in the shared storage before copying it.
#[derive(Debug)]
pub struct SplitMut<'a> {
    source: &'a mut CharBuf,
    boundaries: Vec<usize>,
}

impl<'a> SplitMut<'a> {
    pub(crate) fn new(source: &'a mut CharBuf, separator: char) -> Self {
        let boundaries = scan(source.as_chars(), separator);
        Self { source, boundaries }
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        segment_count(&self.boundaries)
    }

    /// Returns `true` if there is no segment.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the boundaries, as offsets into the content of the buffer.
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Returns the `index`-th segment as a view into the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](SplitMut::len).
    pub fn segment(&self, index: usize) -> Result<&[char], Error> {
        let range = span(&self.boundaries, index)?;
        Ok(&self.source.as_chars()[range])
    }

    /// Copies the `index`-th segment into a new `String`, without touching
    /// the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](SplitMut::len).
    pub fn extract(&self, index: usize) -> Result<String, Error> {
        self.segment(index).map(|chars| chars.iter().collect())
    }

    /// Writes the [`TERMINATOR`](crate::TERMINATOR) at the end of the
    /// `index`-th segment, then copies the segment into a new `String`.
    ///
    /// The terminator overwrites the separator following the segment, and
    /// stays in the buffer once the split is dropped. Extractions return the
    /// same segments in any order and any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](SplitMut::len). The buffer is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lightstr::{CharBuf, TERMINATOR};
    /// let mut buf = CharBuf::from("Non,mutable");
    /// let mut split = buf.split_mut(',');
    /// assert_eq!(split.extract_terminated(1).unwrap(), "mutable");
    /// assert_eq!(split.extract_terminated(0).unwrap(), "Non");
    /// drop(split);
    /// assert_eq!(buf.chars().nth(3), Some(TERMINATOR));
    /// ```
    pub fn extract_terminated(&mut self, index: usize) -> Result<String, Error> {
        let range = span(&self.boundaries, index)?;
        self.source.terminate_at(range.end);
        Ok(self.source.as_chars()[range].iter().collect())
    }

    /// Returns an iterator over the segments.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments::new(self.source.as_chars(), &self.boundaries)
    }

    /// Downgrades into a shared [`Split`], keeping the boundaries.
    #[must_use]
    pub fn into_split(self) -> Split<'a> {
        Split {
            source: self.source,
            boundaries: self.boundaries,
        }
    }
}

impl<'s> IntoIterator for &'s SplitMut<'_> {
    type Item = &'s [char];
    type IntoIter = Segments<'s>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the segments of a [`Split`] or [`SplitMut`].
#[derive(Clone, Debug)]
pub struct Segments<'s> {
    chars: &'s [char],
    windows: Enumerate<Windows<'s, usize>>,
}

impl<'s> Segments<'s> {
    fn new(chars: &'s [char], boundaries: &'s [usize]) -> Self {
        Self {
            chars,
            windows: boundaries.windows(2).enumerate(),
        }
    }

    #[inline]
    fn get(&self, (index, window): (usize, &[usize])) -> &'s [char] {
        &self.chars[segment_range(index, window[0], window[1])]
    }
}

impl<'s> Iterator for Segments<'s> {
    type Item = &'s [char];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.windows.next()?;
        Some(self.get(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.windows.next_back()?;
        Some(self.get(item))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}
