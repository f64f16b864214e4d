/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frequency statistics for decoded netpbm images
//!
//! Computes the most common gray value or color of an image, how often
//! it occurs and how many distinct values the image holds.
//!
//! # Example
//! ```
//! use pnm_decoder::PnmDecoder;
//! use pnm_stats::{analyze, ModeValue};
//!
//! let image = PnmDecoder::new(b"P5\n5 1\n255\n\x03\x03\x03\x05\x05")
//!     .decode()
//!     .unwrap();
//! let stats = analyze(&image);
//!
//! assert_eq!(stats.mode, Some(ModeValue::Gray(3)));
//! assert_eq!(stats.mode_count, 3);
//! assert_eq!(stats.distinct_count, 2);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub use crate::analyze::{analyze, analyze_colors, analyze_gray, ModeValue, Stats};
pub use crate::histogram::{histogram, Histogram};

mod analyze;
pub mod histogram;
