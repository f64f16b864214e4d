/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::PathBuf;

use pnm_core::options::DecoderOptions;
use pnm_decoder::{parse, parse_with_options, Color, PnmDecoder};
use pnm_stats::{analyze, ModeValue};

use crate::PnmEncoder;

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pnm-tests-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_gray_file_stats() {
    let mut encoded = vec![];
    PnmEncoder::new(&mut encoded)
        .encode_gray(5, 1, 255, &[3, 3, 3, 5, 5])
        .unwrap();
    let path = temp_file("gray.pgm", &encoded);

    let image = parse(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let stats = analyze(&image);
    assert_eq!(stats.mode, Some(ModeValue::Gray(3)));
    assert_eq!(stats.mode_count, 3);
    assert_eq!(stats.distinct_count, 2);
}

#[test]
fn test_color_file_stats() {
    let red = Color::new(255, 0, 0);
    let green = Color::new(0, 255, 0);

    let mut encoded = vec![];
    PnmEncoder::new(&mut encoded)
        .encode_colors(2, 2, &[red, green, red, green])
        .unwrap();
    let path = temp_file("color.ppm", &encoded);

    let image = parse(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let stats = analyze(&image);
    // tie, the lower triple wins
    assert_eq!(stats.mode, Some(ModeValue::Color(green)));
    assert_eq!(stats.mode_count, 2);
    assert_eq!(stats.distinct_count, 2);
}

#[test]
fn test_bitmap_stats() {
    let image = PnmDecoder::new(b"P4\n10 1\n\xb0\x40").decode().unwrap();
    let stats = analyze(&image);

    assert_eq!(stats.mode, Some(ModeValue::Gray(0)));
    assert_eq!(stats.mode_count, 6);
    assert_eq!(stats.distinct_count, 2);
}

#[test]
fn test_plain_ascii_stats() {
    let path = temp_file("plain.pgm", b"P2\n3 2\n15\n1 15 1\n# row two\n0 1 0\n");
    let options = DecoderOptions::new_cmd().set_plain_ascii(true);

    let image = parse_with_options(&path, options).unwrap();
    fs::remove_file(&path).unwrap();

    let stats = analyze(&image);
    assert_eq!(stats.mode, Some(ModeValue::Gray(1)));
    assert_eq!(stats.mode_count, 3);
    assert_eq!(stats.distinct_count, 3);
}
