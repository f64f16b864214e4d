/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoded image representation
use std::fmt::{Display, Formatter};

use crate::color::Color;

/// The six netpbm sub-formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PnmVersion {
    /// Bitmap, plain
    P1,
    /// Graymap, plain
    P2,
    /// Pixmap, plain
    P3,
    /// Bitmap, raw
    P4,
    /// Graymap, raw
    P5,
    /// Pixmap, raw
    P6
}

impl PnmVersion {
    /// Match a whitespace delimited magic token
    pub fn from_magic(token: &[u8]) -> Option<PnmVersion> {
        match token {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None
        }
    }
    /// Bitmaps carry no max value field
    pub const fn has_max_value(self) -> bool {
        !self.is_bitmap()
    }
    pub const fn is_bitmap(self) -> bool {
        matches!(self, Self::P1 | Self::P4)
    }
    pub const fn is_color(self) -> bool {
        matches!(self, Self::P3 | Self::P6)
    }
    /// P1, P2 and P3 are the plain (ASCII) formats
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::P1 | Self::P2 | Self::P3)
    }
}

impl Display for PnmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
            Self::P3 => write!(f, "P3"),
            Self::P4 => write!(f, "P4"),
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// Header fields of a netpbm file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PnmHeader {
    pub version:   PnmVersion,
    pub width:     usize,
    pub height:    usize,
    /// Fixed at 1 for bitmaps
    pub max_value: u8
}

/// Decoded samples, which variant is set is decided by the magic
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Samples {
    /// One sample per pixel, used by bitmaps and graymaps
    Gray(Vec<u8>),
    /// One RGB triple per pixel
    Color(Vec<Color>)
}

impl Samples {
    /// Number of pixels held
    pub fn len(&self) -> usize {
        match self {
            Samples::Gray(data) => data.len(),
            Samples::Color(data) => data.len()
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Return the gray samples or `None` for a color image
    pub fn gray(&self) -> Option<&[u8]> {
        match self {
            Samples::Gray(data) => Some(data),
            Samples::Color(_) => None
        }
    }
    /// Return the colors or `None` for a gray image
    pub fn colors(&self) -> Option<&[Color]> {
        match self {
            Samples::Color(data) => Some(data),
            Samples::Gray(_) => None
        }
    }
}

/// A fully decoded netpbm image
///
/// Either every field is populated or the decoder returned an error,
/// partially decoded images are never handed out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedImage {
    header:  PnmHeader,
    samples: Samples
}

impl DecodedImage {
    /// Build an image from parts
    ///
    /// Used by the decoder, and by callers that want to analyze
    /// synthetic buffers. Nothing ties `samples.len()` to the
    /// header here, the decoder upholds that itself.
    pub fn new(header: PnmHeader, samples: Samples) -> DecodedImage {
        DecodedImage { header, samples }
    }
    pub const fn header(&self) -> &PnmHeader {
        &self.header
    }
    pub const fn version(&self) -> PnmVersion {
        self.header.version
    }
    pub const fn width(&self) -> usize {
        self.header.width
    }
    pub const fn height(&self) -> usize {
        self.header.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.header.width, self.header.height)
    }
    pub const fn max_value(&self) -> u8 {
        self.header.max_value
    }
    pub const fn samples(&self) -> &Samples {
        &self.samples
    }
}

#[test]
fn test_version_kinds() {
    assert!(PnmVersion::P3.is_color() && PnmVersion::P6.is_color());
    assert!(!PnmVersion::P5.is_color());
    assert!(PnmVersion::P1.is_bitmap() && PnmVersion::P1.is_plain());
    assert!(!PnmVersion::P4.has_max_value());
}
