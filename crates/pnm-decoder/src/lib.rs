/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A netpbm decoder
//!
//! Decodes the six netpbm sub-formats, P1 to P6, into either
//! gray samples (bitmaps and graymaps) or RGB colors (pixmaps).
//!
//! # Layouts
//! - P4, P5, P6: raw bytes, bitmaps are packed one bit per pixel,
//!   most significant bit first, with rows padded to a byte.
//! - P1, P2, P3: read with the same byte layouts as their raw
//!   counterparts unless [`DecoderOptions::set_plain_ascii`](pnm_core::options::DecoderOptions::set_plain_ascii)
//!   is set, in which case the payload is tokenized as ASCII.
//!
//! # Example
//! ```
//! use pnm_decoder::{PnmDecoder, Samples};
//! let mut decoder = PnmDecoder::new(b"P5\n2 2\n255\n\x01\x02\x03\x04");
//! let image = decoder.decode().unwrap();
//!
//! assert_eq!(image.dimensions(), (2, 2));
//! assert_eq!(image.samples(), &Samples::Gray(vec![1, 2, 3, 4]));
//! ```
//!
//! # Features
//! - `log`: Log header fields and recoverable problems via the `log` crate
//! - `serde`: Serialize and deserialize [`Color`]
pub use pnm_core;

pub use crate::color::Color;
pub use crate::decoder::*;
pub use crate::errors::*;
pub use crate::file_io::{parse, parse_with_options};
pub use crate::image::*;

mod color;
mod decoder;
mod errors;
mod file_io;
mod image;
mod plain;
