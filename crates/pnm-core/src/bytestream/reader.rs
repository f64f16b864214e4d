/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

/// Errors raised by [`ZByteReader`] when a read cannot be satisfied
pub enum ZByteIoError {
    // requested, available
    NotEnoughBytes(usize, usize)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for ZByteIoError {}

/// An encapsulation of a bytestream
///
/// The lifetime parameter is from the slice which we are reading from,
/// references handed out by the reader borrow from that slice and not
/// from the reader itself.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end is allowed, subsequent reads
    /// will report end of stream
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num);
    }
    /// Move the stream `num` bytes back, stopping at the start
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }
    /// Return true if there are no more bytes to read
    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Number of unread bytes
    ///
    /// ```
    /// use pnm_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(b"P5");
    /// reader.skip(1);
    /// assert_eq!(reader.remaining(), 1);
    /// ```
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    #[inline(always)]
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Return the next byte without advancing the stream
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }
    /// Look ahead `position` bytes and return a reference
    /// to `num_bytes` from that position, or an error if the
    /// peek would be out of bounds.
    ///
    /// This doesn't increment the position.
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], ZByteIoError> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        match self.stream.get(start..end) {
            Some(bytes) => Ok(bytes),
            None => Err(ZByteIoError::NotEnoughBytes(
                num_bytes,
                self.stream.len().saturating_sub(start)
            ))
        }
    }
    /// Return a reference to the next `num_bytes` bytes and advance
    /// past them, or an error without advancing if the stream is short.
    pub fn get_as_ref(&mut self, num_bytes: usize) -> Result<&'a [u8], ZByteIoError> {
        let bytes = self.peek_at(0, num_bytes)?;
        self.position += num_bytes;
        Ok(bytes)
    }
    /// Advance while `func` returns true for the current byte,
    /// leaving the stream at the first byte for which it is false
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) {
        while let Some(byte) = self.peek_u8() {
            if !(func)(byte) {
                break;
            }
            self.position += 1;
        }
    }
}

#[test]
fn test_skip_past_end_is_balanced() {
    let mut reader = ZByteReader::new(&[7]);
    reader.skip(2);
    assert!(reader.eof());
    assert_eq!(reader.remaining(), 0);
    reader.rewind(1);
    assert!(reader.eof());
    reader.rewind(1);
    assert_eq!(reader.peek_u8(), Some(7));
}

#[test]
fn test_get_as_ref_does_not_advance_on_error() {
    let mut reader = ZByteReader::new(b"abc");
    assert!(reader.get_as_ref(4).is_err());
    assert_eq!(reader.get_position(), 0);
    assert_eq!(reader.get_as_ref(2).unwrap(), b"ab");
    assert_eq!(reader.remaining(), 1);
}

#[test]
fn test_skip_until_false() {
    let mut reader = ZByteReader::new(b"  \t42");
    reader.skip_until_false(|b| b.is_ascii_whitespace());
    assert_eq!(reader.peek_u8(), Some(b'4'));
    assert_eq!(reader.get_as_ref(2).unwrap(), b"42");
    assert!(reader.eof());
}
