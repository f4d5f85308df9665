//! Borsh support for `CharBuf`.
//!
//! The encoding is the one of a borsh `String`: a little-endian `u32` byte
//! length followed by the UTF-8 encoding of the content.

use borsh::io::{Error, ErrorKind};
use borsh::{io, BorshDeserialize, BorshSerialize};

use super::CharBuf;
use crate::alloc::string::String;


impl BorshDeserialize for CharBuf {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let string = String::deserialize_reader(reader)?;
        Ok(Self::from(string))
    }
}

impl BorshSerialize for CharBuf {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let len: usize = self.chars().map(char::len_utf8).sum();
        let len = u32::try_from(len)
            .map_err(|_| Error::new(ErrorKind::InvalidData, "content too long"))?;
        len.serialize(writer)?;

        let mut tmp = [0; 4];
        for c in self.chars() {
            writer.write_all(c.encode_utf8(&mut tmp).as_bytes())?;
        }
        Ok(())
    }
}
