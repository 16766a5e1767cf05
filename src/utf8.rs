// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Decoding of utf8 byte streams into `char`s for the lexer.

use std::error::Error as StdError;
use std::io::{self, Read};

use encode_unicode::{U8UtfExt, Utf8Char};

/// An iterator that decodes a stream of bytes into utf8 `char`s.
///
/// # Errors
/// The iterator passes on every error of the underlying byte iterator. It
/// also produces the following decoding errors:
///
/// - `ErrorKind::UnexpectedEof`: the bytes ended in the middle of a
/// multibyte `char`
/// - `ErrorKind::InvalidData`: a byte sequence is not a valid utf8 `char`
pub struct Utf8Chars<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    bytes: I,
}

impl<I> Utf8Chars<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    /// Creates a `Utf8Chars` over the given bytes.
    pub fn new(bytes: I) -> Utf8Chars<I> {
        Utf8Chars { bytes }
    }
}

impl<I> Iterator for Utf8Chars<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes
            .next()
            .map(|lead| lead.and_then(|lead| decode_char(lead, &mut self.bytes)))
    }
}

fn decode_char<I>(lead: u8, bytes: &mut I) -> io::Result<char>
where
    I: Iterator<Item = io::Result<u8>>,
{
    let extra = lead.extra_utf8_bytes().map_err(invalid_data)?;

    let mut buffer = [lead, 0, 0, 0];
    for slot in buffer.iter_mut().skip(1).take(extra) {
        *slot = match bytes.next() {
            Some(byte) => byte?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "utf8 char truncated by end of input",
                ))
            }
        };
    }

    Utf8Char::from_array(buffer)
        .map(|c| c.to_char())
        .map_err(invalid_data)
}

fn invalid_data<E>(error: E) -> io::Error
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}

/// Extension trait for readers to decode their contents as utf8 `char`s.
///
/// Every read of the underlying reader is a single byte, so wrap unbuffered
/// readers in a `BufReader` first.
pub trait ReadUtf8Chars: Read + Sized {
    /// Iterate over the utf8 encoded `char`s of this reader.
    fn utf8_chars(self) -> Utf8Chars<io::Bytes<Self>>;
}

impl<R: Read> ReadUtf8Chars for R {
    fn utf8_chars(self) -> Utf8Chars<io::Bytes<Self>> {
        Utf8Chars::new(self.bytes())
    }
}
