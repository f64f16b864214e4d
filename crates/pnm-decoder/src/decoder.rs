/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::bytestream::ZByteReader;
use pnm_core::log::{info, trace, warn};
use pnm_core::options::DecoderOptions;

use crate::color::Color;
use crate::errors::{FormatErrors, PnmDecodeErrors};
use crate::image::{DecodedImage, PnmHeader, PnmVersion, Samples};
use crate::plain;

/// Longest magic token echoed back in an error message
const MAX_MAGIC_ECHO: usize = 16;

/// An instance of a netpbm decoder
///
/// The decoder can decode P1 to P6 formats from an in memory buffer
pub struct PnmDecoder<'a> {
    header:  Option<PnmHeader>,
    reader:  ZByteReader<'a>,
    options: DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new netpbm decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded pixels
    ///
    /// # Example
    /// ```
    /// use pnm_decoder::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new netpbm decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: netpbm encoded data.
    /// # Example
    /// ```
    /// use pnm_core::options::DecoderOptions;
    /// use pnm_decoder::PnmDecoder;
    /// let options = DecoderOptions::default().set_plain_ascii(true);
    /// let mut decoder = PnmDecoder::new_with_options(options, b"P2\n2 1\n9\n4 9\n");
    ///
    /// let image = decoder.decode().unwrap();
    /// assert_eq!(image.samples().gray(), Some(&[4_u8, 9][..]));
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder {
            header: None,
            reader: ZByteReader::new(data),
            options
        }
    }
    /// Read the header and store it in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn decode_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.header.is_none() {
            self.read_headers()?;
        }
        Ok(())
    }

    fn read_headers(&mut self) -> Result<PnmHeader, PnmDecodeErrors> {
        let version = self.read_magic()?;
        info!("Version: {}", version);

        self.skip_magic_line();
        self.skip_comment_lines();

        let width = self
            .get_integer()
            .ok_or(FormatErrors::InvalidDimensions("width is not a number"))?;
        let height = self
            .get_integer()
            .ok_or(FormatErrors::InvalidDimensions("height is not a number"))?;

        if width == 0 {
            return Err(FormatErrors::InvalidDimensions("width is zero").into());
        }
        if height == 0 {
            return Err(FormatErrors::InvalidDimensions("height is zero").into());
        }
        if width > self.options.max_width() {
            return Err(FormatErrors::LargeDimensions {
                limit: self.options.max_width(),
                found: width
            }
            .into());
        }
        if height > self.options.max_height() {
            return Err(FormatErrors::LargeDimensions {
                limit: self.options.max_height(),
                found: height
            }
            .into());
        }
        info!("Width: {}, height: {}", width, height);

        let max_value = if version.has_max_value() {
            let max_value = self
                .get_integer()
                .ok_or(FormatErrors::InvalidMaxValue)?;

            if max_value == 0 {
                return Err(FormatErrors::InvalidMaxValue.into());
            }
            u8::try_from(max_value).map_err(|_| FormatErrors::UnsupportedMaxValue(max_value))?
        } else {
            1
        };
        info!("Max value: {}", max_value);

        // a single whitespace byte separates the header from the payload
        if let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_whitespace() {
                let msg = format!(
                    "Expected whitespace after the last header field but found '{}'",
                    byte.escape_ascii()
                );
                return Err(FormatErrors::InvalidHeader(msg).into());
            }
            self.reader.skip(1);
        }
        trace!("Payload starts at byte {}", self.reader.get_position());

        let header = PnmHeader {
            version,
            width,
            height,
            max_value
        };
        self.header = Some(header);

        Ok(header)
    }

    /// Read the first whitespace delimited token and match it
    /// against the supported versions
    fn read_magic(&mut self) -> Result<PnmVersion, PnmDecodeErrors> {
        self.reader.skip_until_false(|b| b.is_ascii_whitespace());

        let start = self.reader.get_position();
        self.reader.skip_until_false(|b| !b.is_ascii_whitespace());
        let end = self.reader.get_position();

        self.reader.rewind(end - start);
        let token = self
            .reader
            .get_as_ref(end - start)
            .map_err(|_| FormatErrors::UnsupportedMagic(String::new()))?;

        PnmVersion::from_magic(token).ok_or_else(|| {
            let echoed = &token[..token.len().min(MAX_MAGIC_ECHO)];
            FormatErrors::UnsupportedMagic(String::from_utf8_lossy(echoed).into_owned()).into()
        })
    }

    /// Skip whatever whitespace trails the magic up to and including the newline.
    ///
    /// Stops early on a non whitespace byte, that byte is the width of a
    /// single line header.
    fn skip_magic_line(&mut self) {
        while let Some(byte) = self.reader.peek_u8() {
            if byte == b'\n' {
                self.reader.skip(1);
                break;
            }
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.reader.skip(1);
        }
    }

    /// Skip lines starting with `#`, leaving the reader on the
    /// first byte of the first line that isn't a comment
    fn skip_comment_lines(&mut self) {
        while self.reader.peek_u8() == Some(b'#') {
            self.reader.skip_until_false(|b| b != b'\n');
            // the newline itself
            self.reader.skip(1);
        }
    }

    /// Skip whitespace then read a decimal integer
    ///
    /// Returns `None` when no digit follows or the value overflows
    fn get_integer(&mut self) -> Option<usize> {
        self.reader.skip_until_false(|b| b.is_ascii_whitespace());

        let mut value = 0_usize;
        let mut digits = 0;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)?
                .checked_add(usize::from(byte - b'0'))?;
            digits += 1;
            self.reader.skip(1);
        }
        (digits > 0).then_some(value)
    }

    /// Return the header or none if it isn't decoded
    pub const fn header(&self) -> Option<&PnmHeader> {
        self.header.as_ref()
    }
    /// Return the version or none if headers aren't decoded
    pub fn version(&self) -> Option<PnmVersion> {
        self.header.map(|h| h.version)
    }
    /// Return image dimensions or none if headers aren't decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|h| (h.width, h.height))
    }
    /// Return the max value or none if headers aren't decoded
    pub fn max_value(&self) -> Option<u8> {
        self.header.map(|h| h.max_value)
    }

    /// Decode a netpbm encoded buffer and return the samples from it
    ///
    /// Which [`Samples`] variant is set depends on the magic:
    /// P3 and P6 give colors, the rest give gray samples.
    pub fn decode(&mut self) -> Result<DecodedImage, PnmDecodeErrors> {
        let header = match self.header {
            Some(header) => header,
            None => self.read_headers()?
        };
        let pixels = header
            .width
            .checked_mul(header.height)
            .ok_or(FormatErrors::InvalidDimensions("pixel count overflows"))?;

        let ascii = header.version.is_plain() && self.options.plain_ascii();

        let samples = match header.version {
            PnmVersion::P1 if ascii => {
                Samples::Gray(plain::read_bits(&mut self.reader, pixels)?)
            }
            PnmVersion::P2 if ascii => {
                Samples::Gray(plain::read_samples(&mut self.reader, pixels, header.max_value)?)
            }
            PnmVersion::P3 if ascii => {
                let components = checked_components(pixels)?;
                let values = plain::read_samples(&mut self.reader, components, header.max_value)?;

                Samples::Color(values.chunks_exact(3).map(to_color).collect())
            }
            PnmVersion::P1 | PnmVersion::P4 => {
                Samples::Gray(self.decode_bitmap(header.width, header.height)?)
            }
            PnmVersion::P2 | PnmVersion::P5 => Samples::Gray(self.take_payload(pixels)?.to_vec()),
            PnmVersion::P3 | PnmVersion::P6 => {
                let bytes = self.take_payload(checked_components(pixels)?)?;

                Samples::Color(bytes.chunks_exact(3).map(to_color).collect())
            }
        };
        self.check_sample_range(&samples, header.max_value)?;
        self.check_trailing_bytes(ascii)?;

        Ok(DecodedImage::new(header, samples))
    }

    /// Take exactly `size` payload bytes
    fn take_payload(&mut self, size: usize) -> Result<&'a [u8], PnmDecodeErrors> {
        let found = self.reader.remaining();

        self.reader
            .get_as_ref(size)
            .map_err(|_| FormatErrors::TruncatedPayload { expected: size, found }.into())
    }

    fn decode_bitmap(&mut self, width: usize, height: usize) -> Result<Vec<u8>, PnmDecodeErrors> {
        let row_bytes = bitmap_row_bytes(width);
        let size = row_bytes
            .checked_mul(height)
            .ok_or(FormatErrors::InvalidDimensions("pixel count overflows"))?;

        let payload = self.take_payload(size)?;
        let mut pixels = Vec::with_capacity(width * height);

        for row in payload.chunks_exact(row_bytes) {
            unpack_bitmap_row(row, width, &mut pixels);
        }
        Ok(pixels)
    }

    fn check_sample_range(&self, samples: &Samples, max_value: u8) -> Result<(), PnmDecodeErrors> {
        if max_value == u8::MAX {
            return Ok(());
        }
        let (first, count) = match samples {
            Samples::Gray(data) => {
                let mut larger = data.iter().filter(|x| **x > max_value);
                (larger.next().copied(), larger.count())
            }
            Samples::Color(data) => {
                let mut larger = data
                    .iter()
                    .map(|c| c.max_component())
                    .filter(|x| *x > max_value);
                (larger.next(), larger.count())
            }
        };
        if let Some(value) = first {
            if self.options.strict_mode() {
                return Err(FormatErrors::SampleOutOfRange {
                    value: usize::from(value),
                    max:   usize::from(max_value)
                }
                .into());
            }
            warn!(
                "{} samples are larger than the max value {}",
                count + 1,
                max_value
            );
        }
        Ok(())
    }

    fn check_trailing_bytes(&mut self, ascii: bool) -> Result<(), PnmDecodeErrors> {
        if ascii {
            plain::skip_separators(&mut self.reader);
        }
        let trailing = self.reader.remaining();

        if trailing != 0 {
            if self.options.strict_mode() {
                return Err(FormatErrors::TrailingData(trailing).into());
            }
            warn!("Ignoring {} bytes after the payload", trailing);
        }
        Ok(())
    }
}

/// Number of bytes a packed bitmap row of `width` pixels occupies
///
/// ```
/// assert_eq!(pnm_decoder::bitmap_row_bytes(10), 2);
/// assert_eq!(pnm_decoder::bitmap_row_bytes(8), 1);
/// ```
pub const fn bitmap_row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

/// Unpack one bitmap row, most significant bit first,
/// appending `width` samples of 0 or 1 to `out`
///
/// Padding bits in the last byte are ignored.
pub fn unpack_bitmap_row(row: &[u8], width: usize, out: &mut Vec<u8>) {
    out.extend((0..width).map(|x| (row[x / 8] >> (7 - (x % 8))) & 1));
}

fn checked_components(pixels: usize) -> Result<usize, PnmDecodeErrors> {
    pixels
        .checked_mul(3)
        .ok_or_else(|| FormatErrors::InvalidDimensions("pixel count overflows").into())
}

fn to_color(chunk: &[u8]) -> Color {
    Color::new(chunk[0], chunk[1], chunk[2])
}

#[test]
fn test_unpack_row_msb_first() {
    let mut out = vec![];
    unpack_bitmap_row(&[0b1011_0000, 0b0100_0000], 10, &mut out);
    assert_eq!(out, [1, 0, 1, 1, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_unpack_row_ignores_padding() {
    let mut out = vec![];
    unpack_bitmap_row(&[0b0000_0111], 5, &mut out);
    assert_eq!(out, [0, 0, 0, 0, 0]);
}

#[test]
fn test_comment_lookahead_is_kept() {
    let mut decoder = PnmDecoder::new(b"P5\n# one\n#two\n12 3\n255\n");
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((12, 3)));
}

#[test]
fn test_integer_overflow_is_rejected() {
    let mut decoder = PnmDecoder::new(b"P5\n99999999999999999999999 1\n255\n");
    assert!(matches!(
        decoder.decode_headers(),
        Err(PnmDecodeErrors::Format(FormatErrors::InvalidDimensions(_)))
    ));
}
