/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

use pnm_decoder::pnm_core::log::trace;
use pnm_decoder::{Color, DecodedImage, Samples};

use crate::histogram::Histogram;

/// The most frequent value of an image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ModeValue {
    Gray(u8),
    Color(Color)
}

impl Display for ModeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeValue::Gray(value) => write!(f, "{value}"),
            ModeValue::Color(color) => write!(f, "{color}")
        }
    }
}

/// Frequency statistics of one image
///
/// An image without samples has no mode, a zero `mode_count`
/// and a zero `distinct_count`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Most frequent value, ties resolve to the smallest value
    pub mode:           Option<ModeValue>,
    /// Occurrences of `mode`
    pub mode_count:     usize,
    /// Number of distinct values
    pub distinct_count: usize
}

impl Stats {
    fn from_histogram<K, F>(histo: &Histogram<K>, wrap: F) -> Stats
    where
        K: Copy + Eq + std::hash::Hash + Ord,
        F: Fn(K) -> ModeValue
    {
        trace!(
            "Histogram of {} samples holds {} distinct values",
            histo.total(),
            histo.distinct()
        );

        match histo.mode() {
            Some((key, count)) => Stats {
                mode:           Some(wrap(key)),
                mode_count:     count,
                distinct_count: histo.distinct()
            },
            None => Stats::default()
        }
    }
}

/// Compute frequency statistics of a decoded image
///
/// Gray and bitmap images are keyed by sample value,
/// color images by the whole RGB triple.
#[must_use]
pub fn analyze(image: &DecodedImage) -> Stats {
    match image.samples() {
        Samples::Gray(data) => analyze_gray(data),
        Samples::Color(data) => analyze_colors(data)
    }
}

/// Compute frequency statistics of gray samples
#[must_use]
pub fn analyze_gray(data: &[u8]) -> Stats {
    Stats::from_histogram(&Histogram::from_gray(data), ModeValue::Gray)
}

/// Compute frequency statistics of colors
#[must_use]
pub fn analyze_colors(data: &[Color]) -> Stats {
    Stats::from_histogram(&Histogram::from_colors(data), ModeValue::Color)
}

#[test]
fn test_gray_stats() {
    let stats = analyze_gray(&[3, 3, 3, 5, 5]);

    assert_eq!(stats.distinct_count, 2);
    assert_eq!(stats.mode, Some(ModeValue::Gray(3)));
    assert_eq!(stats.mode_count, 3);
}

#[test]
fn test_color_stats() {
    let red = Color::new(255, 0, 0);
    let blue = Color::new(0, 0, 255);
    let stats = analyze_colors(&[red, blue, red, Color::new(255, 0, 1)]);

    assert_eq!(stats.distinct_count, 3);
    assert_eq!(stats.mode, Some(ModeValue::Color(red)));
    assert_eq!(stats.mode_count, 2);
}

#[test]
fn test_empty_image() {
    use pnm_decoder::{PnmHeader, PnmVersion};

    let header = PnmHeader {
        version:   PnmVersion::P5,
        width:     0,
        height:    7,
        max_value: 255
    };
    let image = DecodedImage::new(header, Samples::Gray(vec![]));
    let stats = analyze(&image);

    assert_eq!(stats, Stats::default());
    assert_eq!(stats.mode, None);
    assert_eq!(stats.distinct_count, 0);
}

#[test]
fn test_colors_keyed_by_triple() {
    // same components, different channels
    let stats = analyze_colors(&[Color::new(1, 2, 3), Color::new(3, 2, 1)]);
    assert_eq!(stats.distinct_count, 2);
    assert_eq!(stats.mode, Some(ModeValue::Color(Color::new(1, 2, 3))));
}

#[test]
fn test_mode_display() {
    assert_eq!(ModeValue::Gray(7).to_string(), "7");
    assert_eq!(ModeValue::Color(Color::new(1, 2, 3)).to_string(), "1-2-3");
}
