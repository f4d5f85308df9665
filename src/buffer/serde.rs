//! Serde support for `CharBuf`.
//!
//! A `CharBuf` is serialized as a string of its content. It is deserialized
//! from a string, or from bytes holding valid UTF-8.

use core::fmt;

use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CharBuf;
use crate::alloc::string::String;

impl Serialize for CharBuf {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct CharBufVisitor;

impl Visitor<'_> for CharBufVisitor {
    type Value = CharBuf;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(CharBuf::from(v))
    }

    #[inline]
    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(CharBuf::from(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: Error,
    {
        core::str::from_utf8(v)
            .map(CharBuf::from)
            .map_err(|_| E::invalid_value(Unexpected::Bytes(v), &self))
    }
}

impl<'de> Deserialize<'de> for CharBuf {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CharBufVisitor)
    }
}
