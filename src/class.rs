//! Locale-independent character classification.
//!
//! Every in-place operation of [`CharBuf`](crate::CharBuf) that needs to know
//! what a whitespace is, or what the upper/lower case of a character is, goes
//! through these functions. They depend on nothing but the Unicode tables
//! compiled into `core`, so results never vary with the environment.

/// Returns `true` if `c` has the Unicode `White_Space` property.
///
/// # Examples
///
/// ```
/// use lightstr::class::is_whitespace;
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('a'));
/// ```
#[inline]
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Maps `c` to its uppercase counterpart.
///
/// Only simple one-to-one mappings are applied: characters whose uppercase
/// form spans several characters (like `'ß'`) are left unchanged.
///
/// # Examples
///
/// ```
/// use lightstr::class::to_upper;
/// assert_eq!(to_upper('a'), 'A');
/// assert_eq!(to_upper('é'), 'É');
/// assert_eq!(to_upper('ß'), 'ß');
/// assert_eq!(to_upper('1'), '1');
/// ```
#[inline]
#[must_use]
pub fn to_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    single(c.to_uppercase()).unwrap_or(c)
}

/// Maps `c` to its lowercase counterpart.
///
/// Only simple one-to-one mappings are applied, see [`to_upper`].
///
/// # Examples
///
/// ```
/// use lightstr::class::to_lower;
/// assert_eq!(to_lower('A'), 'a');
/// assert_eq!(to_lower('Σ'), 'σ');
/// assert_eq!(to_lower('İ'), 'İ');
/// ```
#[inline]
#[must_use]
pub fn to_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    single(c.to_lowercase()).unwrap_or(c)
}

/// Returns the only item of `iter`, if it has exactly one.
fn single(mut iter: impl Iterator<Item = char>) -> Option<char> {
    let first = iter.next()?;
    iter.next().map_or(Some(first), |_| None)
}
