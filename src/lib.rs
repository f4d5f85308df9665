//! A **mutable character buffer** for Rust 🦀
//!
//! * one allocation, at wrap time, and **no reallocation** afterwards
//! * **in-place** case folding, trimming, whitespace collapsing, reversal
//!   and counting sort
//! * **zero-copy split**: segments are views into the buffer's storage
//! * **zero dependency**, except for optional `serde`, `borsh` and `bstr`
//!   support
//!
//! # Examples
//!
//! ```rust
//! use lightstr::CharBuf;
//!
//! let mut buf = CharBuf::from("  Hello,   World  ");
//! buf.trim_in_place().collapse_whitespace_in_place().to_uppercase_in_place();
//! assert_eq!(buf, "HELLO, WORLD");
//!
//! let split = buf.split(',');
//! assert_eq!(split.len(), 2);
//! assert_eq!(split.extract(1).unwrap(), " WORLD");
//! ```
//!
//! # Capacity and length
//!
//! A [`CharBuf`] is created by copying text into owned storage whose size,
//! the _capacity_, never changes. Operations can shrink the logical length
//! and [`CharBuf::set_len`] can restore it, but never past the capacity.
//! Past the logical end, storage is marked with [`TERMINATOR`].
//!
//! # Views
//!
//! [`Split`] borrows the buffer: the buffer cannot be mutated or dropped
//! while its segments are in use, which the compiler checks for you.
//! [`SplitMut`] borrows it mutably and may write terminators into shared
//! storage when extracting segments.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
pub(crate) extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std as alloc;

pub mod buffer;
pub mod class;
mod common;
mod macros;
pub mod split;

pub use buffer::{CharBuf, TERMINATOR};
pub use common::Error;
pub use split::{Segments, Split, SplitMut};
