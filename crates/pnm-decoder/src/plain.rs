/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! ASCII payloads of the plain formats
//!
//! Only used when `DecoderOptions::plain_ascii` is set, otherwise
//! P1, P2 and P3 share the byte layouts of P4, P5 and P6.
use pnm_core::bytestream::ZByteReader;

use crate::errors::{FormatErrors, PnmDecodeErrors};

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
pub(crate) fn skip_separators(stream: &mut ZByteReader) {
    while let Some(byte) = stream.peek_u8() {
        if byte == b'#' {
            // skip the whole comment
            stream.skip_until_false(|b| b != b'\n');
        } else if byte.is_ascii_whitespace() {
            stream.skip(1);
        } else {
            break;
        }
    }
}

/// Read `count` P1 pixels
///
/// Each pixel is a single `0` or `1`, whitespace between
/// pixels is optional.
pub(crate) fn read_bits(stream: &mut ZByteReader, count: usize) -> Result<Vec<u8>, PnmDecodeErrors> {
    // every pixel takes at least one byte
    let mut pixels = Vec::with_capacity(count.min(stream.remaining()));

    while pixels.len() < count {
        skip_separators(stream);

        match stream.peek_u8() {
            Some(b'0') => pixels.push(0),
            Some(b'1') => pixels.push(1),
            Some(other) => {
                return Err(FormatErrors::InvalidSample(other.escape_ascii().to_string()).into())
            }
            None => {
                return Err(FormatErrors::TruncatedPayload {
                    expected: count,
                    found:    pixels.len()
                }
                .into())
            }
        }
        stream.skip(1);
    }
    Ok(pixels)
}

/// Read `count` whitespace separated decimal samples
///
/// A value that does not fit in a byte is always an error since it
/// cannot be stored, smaller values are range checked by the caller.
pub(crate) fn read_samples(
    stream: &mut ZByteReader, count: usize, max_value: u8
) -> Result<Vec<u8>, PnmDecodeErrors> {
    // a sample and its separator take at least two bytes
    let mut samples = Vec::with_capacity(count.min(stream.remaining() / 2 + 1));

    while samples.len() < count {
        skip_separators(stream);

        if stream.eof() {
            return Err(FormatErrors::TruncatedPayload {
                expected: count,
                found:    samples.len()
            }
            .into());
        }
        let token = next_token(stream);

        let value = parse_decimal(token).ok_or_else(|| {
            FormatErrors::InvalidSample(String::from_utf8_lossy(token).into_owned())
        })?;

        let sample = u8::try_from(value).map_err(|_| FormatErrors::SampleOutOfRange {
            value,
            max: usize::from(max_value)
        })?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Return the bytes up to the next whitespace or comment
fn next_token<'a>(stream: &mut ZByteReader<'a>) -> &'a [u8] {
    let start = stream.get_position();
    stream.skip_until_false(|b| !b.is_ascii_whitespace() && b != b'#');
    let end = stream.get_position();

    stream.rewind(end - start);
    // cannot fail, we just walked over these bytes
    stream.get_as_ref(end - start).unwrap_or_default()
}

fn parse_decimal(token: &[u8]) -> Option<usize> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    token.iter().try_fold(0_usize, |acc, b| {
        acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
    })
}

#[test]
fn test_read_bits_without_separators() {
    let mut stream = ZByteReader::new(b"0110\n1 0");
    assert_eq!(read_bits(&mut stream, 6).unwrap(), [0, 1, 1, 0, 1, 0]);
}

#[test]
fn test_read_samples_skips_comments() {
    let mut stream = ZByteReader::new(b"12 # a comment\n 7\t255");
    assert_eq!(read_samples(&mut stream, 3, 255).unwrap(), [12, 7, 255]);
}

#[test]
fn test_read_samples_rejects_words() {
    let mut stream = ZByteReader::new(b"12 ab");
    assert!(matches!(
        read_samples(&mut stream, 2, 255),
        Err(PnmDecodeErrors::Format(FormatErrors::InvalidSample(token))) if token == "ab"
    ));
}

#[test]
fn test_read_samples_reports_count_when_short() {
    let mut stream = ZByteReader::new(b"1 2 3\n");
    assert!(matches!(
        read_samples(&mut stream, 5, 255),
        Err(PnmDecodeErrors::Format(FormatErrors::TruncatedPayload {
            expected: 5,
            found:    3
        }))
    ));
}

#[test]
fn test_short_input_bounds_the_reservation() {
    let mut stream = ZByteReader::new(b"1 0");
    assert!(matches!(
        read_bits(&mut stream, usize::MAX / 2),
        Err(PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { found: 2, .. }))
    ));

    let mut stream = ZByteReader::new(b"9");
    assert!(matches!(
        read_samples(&mut stream, usize::MAX / 2, 255),
        Err(PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { found: 1, .. }))
    ));
}
