/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross crate tests
//!
//! Holds the fixture encoder used to build netpbm files for the
//! round trip tests. The shipped crates only decode.

use std::fmt::{Debug, Formatter};
use std::io;
use std::io::Write;

use pnm_decoder::{Color, DecodedImage, PnmVersion, Samples};

#[cfg(test)]
mod roundtrip;
#[cfg(test)]
mod stats;

/// Errors occurring during encoding
pub enum PnmEncodeErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PnmEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

/// A netpbm encoder for the raw formats
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, version: PnmVersion, width: usize, height: usize, max_val: Option<u8>
    ) -> Result<(), PnmEncodeErrors> {
        let header = match max_val {
            Some(max_val) => format!("{version}\n{width} {height}\n{max_val}\n"),
            None => format!("{version}\n{width} {height}\n")
        };
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode samples of 0 and 1 as P4, packing rows most significant bit first
    pub fn encode_bitmap(
        &mut self, width: usize, height: usize, bits: &[u8]
    ) -> Result<(), PnmEncodeErrors> {
        if width * height != bits.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(PnmVersion::P4, width, height, None)?;

        for row in bits.chunks_exact(width) {
            let mut packed = vec![0_u8; width.div_ceil(8)];

            for (x, bit) in row.iter().enumerate() {
                packed[x / 8] |= (bit & 1) << (7 - (x % 8));
            }
            self.writer.write_all(&packed)?;
        }
        Ok(())
    }

    /// Encode gray samples as P5
    pub fn encode_gray(
        &mut self, width: usize, height: usize, max_val: u8, data: &[u8]
    ) -> Result<(), PnmEncodeErrors> {
        if width * height != data.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(PnmVersion::P5, width, height, Some(max_val))?;
        self.writer.write_all(data)?;

        Ok(())
    }

    /// Encode colors as P6
    pub fn encode_colors(
        &mut self, width: usize, height: usize, data: &[Color]
    ) -> Result<(), PnmEncodeErrors> {
        if width * height != data.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(PnmVersion::P6, width, height, Some(255))?;

        let owned_data = data
            .iter()
            .flat_map(|c| [c.r, c.g, c.b])
            .collect::<Vec<u8>>();
        self.writer.write_all(&owned_data)?;

        Ok(())
    }

    /// Encode an image in the raw counterpart of its version
    pub fn encode_image(&mut self, image: &DecodedImage) -> Result<(), PnmEncodeErrors> {
        let (width, height) = image.dimensions();

        match image.samples() {
            Samples::Gray(data) if image.version().is_bitmap() => {
                self.encode_bitmap(width, height, data)
            }
            Samples::Gray(data) => self.encode_gray(width, height, image.max_value(), data),
            Samples::Color(data) => self.encode_colors(width, height, data)
        }
    }
}

/// Encode `image` into a fresh buffer
pub fn encode_to_vec(image: &DecodedImage) -> Result<Vec<u8>, PnmEncodeErrors> {
    let mut out = vec![];
    PnmEncoder::new(&mut out).encode_image(image)?;
    Ok(out)
}
