use crate::alloc::format;
use crate::alloc::string::{String, ToString};
use crate::alloc::vec::Vec;
use crate::{CharBuf, Error, TERMINATOR};

/// Characters used to build random inputs: ASCII letters, whitespace,
/// non-ASCII letters and a few symbols.
const ALPHABET: &[char] = &[
    'a', 'b', 'z', 'A', 'Z', ' ', ' ', '\t', '\n', '\u{A0}', '\u{3000}', 'é', 'É', 'ß', 'Σ', 'σ',
    '0', '9', ',', '-', '\u{1F980}',
];

fn random_string(rng: &mut fastrand::Rng, max_len: usize) -> String {
    let len = rng.usize(0..=max_len);
    (0..len).map(|_| ALPHABET[rng.usize(..ALPHABET.len())]).collect()
}

/// Storage past the content must start with the terminator.
fn assert_terminated(buf: &CharBuf) {
    let end = buf.start + buf.len;
    if end < buf.capacity() {
        assert_eq!(buf.storage[end], TERMINATOR, "{buf:?}");
    }
}

#[test]
fn test_new_default() {
    let new = CharBuf::new();
    assert_eq!(new, "");
    assert!(new.is_empty());
    assert_eq!(new.capacity(), 0);

    let new = CharBuf::default();
    assert_eq!(new, "");
    assert_eq!(new.max_len(), 0);
}

#[test]
fn test_wrap_read_back() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..200 {
        let s = random_string(&mut rng, 32);
        let buf = CharBuf::wrap(&s).unwrap();
        assert_eq!(buf, s.as_str());
        assert_eq!(buf.to_string(), s);
        assert_eq!(buf.capacity(), s.chars().count());
    }
}

#[test]
fn test_wrap_copies() {
    let s = String::from("Non mutable");
    let mut buf = CharBuf::wrap(&s).unwrap();
    buf.to_uppercase_in_place();
    assert_eq!(s, "Non mutable");
    assert_eq!(buf, "NON MUTABLE");
}

#[test]
fn test_try_from_chars() {
    let buf = CharBuf::try_from_chars("abc".chars().filter(|&c| c != 'b')).unwrap();
    assert_eq!(buf, "ac");
    assert_eq!(buf.capacity(), 2);
}

#[test]
fn test_fmt() {
    let buf = CharBuf::from("Rust \u{1F980}\n\"");
    assert_eq!(format!("{buf}"), "Rust \u{1F980}\n\"");
    assert_eq!(format!("{buf:?}"), format!("{:?}", "Rust \u{1F980}\n\""));
}

#[test]
#[cfg(feature = "std")]
fn test_hash() {
    use std::collections::HashSet;

    let mut a = CharBuf::from("  a  ");
    a.trim_view();
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&CharBuf::from("a")));
    assert!(!set.contains(&CharBuf::from(" a")));
}

#[test]
fn test_in_place_keeps_storage() {
    let mut buf = CharBuf::from("  Hello,   World  ");
    let ptr = buf.as_ptr();
    let capacity = buf.capacity();

    buf.to_uppercase_in_place()
        .to_lowercase_in_place()
        .collapse_whitespace_in_place()
        .replace_in_place(',', ';')
        .reverse_in_place()
        .sort_chars_in_place()
        .trim_view()
        .trim_in_place();
    buf.truncate_front(1).unwrap().set_len(2).unwrap().compact();

    assert_eq!(buf.as_ptr(), ptr);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_ptr_eq() {
    let a = CharBuf::from("abc");
    let b = a.clone();
    assert_eq!(a, b);
    assert!(a.ptr_eq(&a));
    assert!(!a.ptr_eq(&b));
}

// Case

#[test]
fn test_uppercase() {
    let mut buf = CharBuf::from("Non mutable \u{E9}\u{DF}");
    buf.to_uppercase_in_place();
    assert_eq!(buf, "NON MUTABLE \u{C9}\u{DF}");
}

#[test]
fn test_lowercase() {
    let mut buf = CharBuf::from("NON Mutable \u{C9}\u{3A3}");
    buf.to_lowercase_in_place();
    assert_eq!(buf, "non mutable \u{E9}\u{3C3}");
}

#[test]
fn test_case_idempotent() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..200 {
        let s = random_string(&mut rng, 24);

        let mut once = CharBuf::from(s.as_str());
        once.to_uppercase_in_place();
        let mut twice = once.clone();
        twice.to_uppercase_in_place();
        assert_eq!(once, twice);

        once.to_lowercase_in_place();
        twice = once.clone();
        twice.to_lowercase_in_place();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_case_non_alphabetic() {
    let s = "0123 ,;- \t\u{1F980}";
    let mut buf = CharBuf::from(s);
    buf.to_uppercase_in_place();
    assert_eq!(buf, s);
    buf.to_lowercase_in_place();
    assert_eq!(buf, s);
}

#[test]
fn test_case_respects_content_window() {
    let mut buf = CharBuf::from("ab cd");
    buf.truncate_front(1).unwrap().set_len(2).unwrap();
    buf.to_uppercase_in_place();
    assert_eq!(buf, "B ");
    buf.reset();
    assert_eq!(buf, "aB \0d");
}

// Trim

#[test]
fn test_trim_both_policies() {
    for (input, expected) in [
        ("  a  ", "a"),
        ("a", "a"),
        ("", ""),
        ("   ", ""),
        ("\t\n a b \r\n", "a b"),
        ("\u{3000}x\u{A0}", "x"),
        ("ab  ", "ab"),
        ("  ab", "ab"),
    ] {
        let mut view = CharBuf::from(input);
        view.trim_view();
        assert_eq!(view, expected, "trim_view({input:?})");
        assert_terminated(&view);

        let mut compact = CharBuf::from(input);
        compact.trim_in_place();
        assert_eq!(compact, expected, "trim_in_place({input:?})");
        assert_eq!(compact.start(), 0);
        assert_terminated(&compact);
    }
}

#[test]
fn test_trim_view_moves_start() {
    let mut buf = CharBuf::from("  abc  ");
    buf.trim_view();
    assert_eq!(buf.start(), 2);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.max_len(), 5);
    assert_eq!(&buf.storage[..], [' ', ' ', 'a', 'b', 'c', TERMINATOR, ' ']);
}

#[test]
fn test_trim_in_place_shifts() {
    let mut buf = CharBuf::from("  abc  ");
    buf.trim_in_place();
    assert_eq!(buf.start(), 0);
    assert_eq!(buf.max_len(), 7);
    assert_eq!(&buf.storage[..3], ['a', 'b', 'c']);
    assert_eq!(buf.storage[3], TERMINATOR);
}

#[test]
fn test_trim_idempotent() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..300 {
        let s = random_string(&mut rng, 24);
        let expected = s.trim();

        let mut view = CharBuf::from(s.as_str());
        view.trim_view();
        assert_eq!(view, expected, "{s:?}");
        let once = view.to_string();
        view.trim_view();
        assert_eq!(view, once.as_str());

        let mut compact = CharBuf::from(s.as_str());
        compact.trim_in_place();
        assert_eq!(compact, expected, "{s:?}");
        compact.trim_in_place();
        assert_eq!(compact, expected);
    }
}

// Collapse

#[test]
fn test_collapse_whitespace() {
    for (input, expected) in [
        ("a   b   c  ", "a b c"),
        ("   a", "a"),
        ("a", "a"),
        ("", ""),
        ("    ", ""),
        ("a b", "a b"),
        ("a\t\t b", "a\tb"),
        (" a \n\n b \u{3000}", "a b"),
    ] {
        let mut buf = CharBuf::from(input);
        buf.collapse_whitespace_in_place();
        assert_eq!(buf, expected, "collapse({input:?})");
        assert_terminated(&buf);
    }
}

#[test]
fn test_collapse_whitespace_after_view() {
    let mut buf = CharBuf::from("xx  a   b  ");
    buf.truncate_front(2).unwrap();
    buf.collapse_whitespace_in_place();
    assert_eq!(buf, "a b");
    assert_eq!(buf.start(), 2);
    assert_terminated(&buf);
}

#[test]
fn test_collapse_whitespace_random() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..300 {
        let s = random_string(&mut rng, 24);
        let mut buf = CharBuf::from(s.as_str());
        buf.collapse_whitespace_in_place();

        let chars = buf.as_chars();
        assert!(chars.first().is_none_or(|c| !c.is_whitespace()), "{s:?}");
        assert!(chars.last().is_none_or(|c| !c.is_whitespace()), "{s:?}");
        assert!(
            chars
                .windows(2)
                .all(|w| !(w[0].is_whitespace() && w[1].is_whitespace())),
            "{s:?}"
        );

        let words: Vec<&str> = s.split_whitespace().collect();
        let collapsed = buf.to_string();
        let collapsed_words: Vec<&str> = collapsed.split_whitespace().collect();
        assert_eq!(words, collapsed_words);
    }
}

// Replace

#[test]
fn test_replace() {
    let mut buf = CharBuf::from("a,b,,c");
    buf.replace_in_place(',', ' ');
    assert_eq!(buf, "a b  c");
    buf.replace_in_place('x', 'y');
    assert_eq!(buf, "a b  c");
    buf.replace_in_place(' ', '\u{1F980}');
    assert_eq!(buf, "a\u{1F980}b\u{1F980}\u{1F980}c");
}

#[test]
fn test_replace_stays_in_content() {
    let mut buf = CharBuf::from("a,b,c");
    buf.set_len(3).unwrap();
    buf.replace_in_place(',', ';');
    buf.reset();
    assert_eq!(buf, "a;b\0c");
}

// Reverse

#[test]
fn test_reverse() {
    for (input, expected) in [
        ("", ""),
        ("a", "a"),
        ("ab", "ba"),
        ("abc", "cba"),
        ("Rust \u{1F980}", "\u{1F980} tsuR"),
    ] {
        let mut buf = CharBuf::from(input);
        buf.reverse_in_place();
        assert_eq!(buf, expected);
    }
}

#[test]
fn test_reverse_round_trip() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..200 {
        let s = random_string(&mut rng, 32);
        let mut buf = CharBuf::from(s.as_str());
        buf.reverse_in_place();
        let reversed: String = s.chars().rev().collect();
        assert_eq!(buf, reversed);
        buf.reverse_in_place();
        assert_eq!(buf, s);
    }
}

// Truncate

#[test]
fn test_truncate_front() {
    let mut buf = CharBuf::from("Non mutable");
    buf.truncate_front(0).unwrap();
    assert_eq!(buf, "Non mutable");
    buf.truncate_front(4).unwrap();
    assert_eq!(buf, "mutable");
    assert_eq!(buf.start(), 4);
    buf.truncate_front(7).unwrap();
    assert_eq!(buf, "");
    assert_eq!(buf.start(), 11);
}

#[test]
fn test_truncate_front_out_of_range() {
    let mut buf = CharBuf::from("abc");
    let err = buf.truncate_front(4).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 4, len: 3 });
    assert_eq!(buf, "abc");
    assert_eq!(buf.start(), 0);
}

#[test]
fn test_truncate() {
    let mut buf = CharBuf::from("abcdef");
    buf.truncate(10);
    assert_eq!(buf, "abcdef");
    buf.truncate(4);
    assert_eq!(buf, "abcd");
    assert_terminated(&buf);
    buf.truncate(0);
    assert!(buf.is_empty());
    assert_eq!(buf.storage[0], TERMINATOR);
}

// Sort

#[test]
fn test_sort() {
    for (input, expected) in [
        ("dcba", "abcd"),
        ("", ""),
        ("a", "a"),
        ("banana", "aaabnn"),
        ("b A a B", "   ABab"),
        ("\u{1F980}z\u{E9}a", "az\u{E9}\u{1F980}"),
    ] {
        let mut buf = CharBuf::from(input);
        buf.sort_chars_in_place();
        assert_eq!(buf, expected);
    }
}

#[test]
fn test_sort_random() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..200 {
        let s = random_string(&mut rng, 32);
        let mut buf = CharBuf::from(s.as_str());
        buf.sort_chars_in_place();

        let mut expected: Vec<char> = s.chars().collect();
        expected.sort_unstable();
        assert_eq!(buf, expected);

        let once = buf.clone();
        buf.sort_chars_in_place();
        assert_eq!(buf, once);
    }
}

#[test]
fn test_sort_respects_content_window() {
    let mut buf = CharBuf::from("zzcbazz");
    buf.truncate_front(2).unwrap().set_len(3).unwrap();
    buf.sort_chars_in_place();
    assert_eq!(buf, "abc");
    buf.reset();
    assert_eq!(buf, "zzabc\0z");
}

// Length

#[test]
fn test_set_len() {
    let mut buf = CharBuf::from("abcdef");
    buf.set_len(3).unwrap();
    assert_eq!(buf, "abc");
    assert_eq!(buf.capacity(), 6);
    assert_terminated(&buf);

    buf.set_len(6).unwrap();
    assert_eq!(buf, "abc\0ef");

    buf.set_len(0).unwrap();
    assert_eq!(buf, "");
    assert_eq!(buf.storage[0], TERMINATOR);
}

#[test]
fn test_set_len_beyond_capacity() {
    let mut buf = CharBuf::from("abcdef");
    buf.set_len(2).unwrap();
    let before = buf.storage.clone();

    let err = buf.set_len(7).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            requested: 7,
            max: 6
        }
    );
    assert_eq!(buf, "ab");
    assert_eq!(buf.storage, before);
}

#[test]
fn test_set_len_checks_capacity_not_len() {
    let mut buf = CharBuf::from("abcdef");
    buf.set_len(1).unwrap();
    // growing back within the capacity is fine
    buf.set_len(5).unwrap();
    assert_eq!(buf.len(), 5);
}

#[test]
fn test_set_len_after_view() {
    let mut buf = CharBuf::from("  abc");
    buf.trim_view();
    assert_eq!(buf.max_len(), 3);
    assert!(buf.set_len(4).is_err());
    buf.set_len(3).unwrap();
    assert_eq!(buf, "abc");

    buf.compact();
    assert_eq!(buf.max_len(), 5);
    buf.set_len(5).unwrap();
    assert_eq!(buf, "abc\0c");
}

#[test]
fn test_reset() {
    let mut buf = CharBuf::from("  abc  ");
    buf.trim_view();
    buf.reset();
    assert_eq!(buf.start(), 0);
    assert_eq!(buf.len(), 7);
    assert_eq!(buf, "  abc\0 ");
}

#[test]
fn test_compact() {
    let mut buf = CharBuf::from("xyabc");
    buf.truncate_front(2).unwrap();
    buf.compact();
    assert_eq!(buf, "abc");
    assert_eq!(buf.start(), 0);
    assert_eq!(&buf.storage[..], ['a', 'b', 'c', TERMINATOR, 'c']);

    // no-op without start offset
    let mut buf = CharBuf::from("abc");
    buf.compact();
    assert_eq!(&buf.storage[..], ['a', 'b', 'c']);
}
