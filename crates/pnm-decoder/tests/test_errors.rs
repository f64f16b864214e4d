/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use pnm_core::options::DecoderOptions;
use pnm_decoder::{FormatErrors, IoErrors, PnmDecodeErrors, PnmDecoder};

fn decode_err(data: &[u8]) -> PnmDecodeErrors {
    PnmDecoder::new(data).decode().unwrap_err()
}

fn decode_strict_err(data: &[u8]) -> PnmDecodeErrors {
    PnmDecoder::new_with_options(DecoderOptions::new_strict(), data)
        .decode()
        .unwrap_err()
}

#[test]
fn test_unsupported_magic() {
    let err = decode_err(b"P9\n1 1\n255\n\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::UnsupportedMagic(ref m)) if m == "P9"
    ));
}

#[test]
fn test_magic_must_be_a_whole_token() {
    let err = decode_err(b"P66\n1 1\n255\n\x00\x00\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::UnsupportedMagic(_))
    ));
}

#[test]
fn test_empty_input() {
    let err = decode_err(b"");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::UnsupportedMagic(ref m)) if m.is_empty()
    ));
}

#[test]
fn test_magic_error_consumes_no_payload() {
    let mut decoder = PnmDecoder::new(b"P7\nWIDTH 1\n");
    assert!(decoder.decode_headers().is_err());
    assert_eq!(decoder.dimensions(), None);
}

#[test]
fn test_zero_width() {
    let err = decode_err(b"P5\n0 10\n255\n");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::InvalidDimensions(_))
    ));
}

#[test]
fn test_zero_height() {
    let err = decode_err(b"P4\n10 0\n");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::InvalidDimensions(_))
    ));
}

#[test]
fn test_non_numeric_dimensions() {
    let err = decode_err(b"P5\n-3 10\n255\n");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::InvalidDimensions(_))
    ));
}

#[test]
fn test_large_dimensions() {
    let options = DecoderOptions::default().set_max_width(8);
    let err = PnmDecoder::new_with_options(options, b"P5\n9 1\n255\n123456789")
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::LargeDimensions { limit: 8, found: 9 })
    ));
}

#[test]
fn test_zero_max_value() {
    let err = decode_err(b"P5\n1 1\n0\n\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::InvalidMaxValue)
    ));
}

#[test]
fn test_sixteen_bit_max_value() {
    let err = decode_err(b"P5\n1 1\n65535\n\x00\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::UnsupportedMaxValue(65535))
    ));
}

#[test]
fn test_header_must_end_in_whitespace() {
    let err = decode_err(b"P5\n1 1\n255x\x00");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::InvalidHeader(_))
    ));
}

#[test]
fn test_truncated_p5() {
    let mut data = b"P5\n100 100\n255\n".to_vec();
    data.extend_from_slice(&[0; 9999]);

    let err = decode_err(&data);
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload {
            expected: 10000,
            found:    9999
        })
    ));
}

#[test]
fn test_truncated_p6() {
    let err = decode_err(b"P6\n2 1\n255\n\x01\x02\x03\x04\x05");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { expected: 6, found: 5 })
    ));
}

#[test]
fn test_truncated_p4() {
    // 10 pixels wide needs 2 bytes per row
    let err = decode_err(b"P4\n10 2\n\xff\xff\xff");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { expected: 4, found: 3 })
    ));
}

#[test]
fn test_truncated_ascii_p2() {
    let options = DecoderOptions::default().set_plain_ascii(true);
    let err = PnmDecoder::new_with_options(options, b"P2\n2 2\n255\n1 2 3\n")
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { expected: 4, found: 3 })
    ));
}

#[test]
fn test_truncated_ascii_with_huge_geometry() {
    let options = DecoderOptions::default()
        .set_plain_ascii(true)
        .set_max_width(1 << 20)
        .set_max_height(1 << 20);

    let err = PnmDecoder::new_with_options(options, b"P3\n1000000 1000000\n255\n1")
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { found: 1, .. })
    ));

    let err = PnmDecoder::new_with_options(options, b"P1\n1000000 1000000\n1 0")
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TruncatedPayload { found: 2, .. })
    ));
}

#[test]
fn test_ascii_sample_larger_than_a_byte() {
    let options = DecoderOptions::default().set_plain_ascii(true);
    let err = PnmDecoder::new_with_options(options, b"P2\n1 1\n255\n256\n")
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::SampleOutOfRange { value: 256, max: 255 })
    ));
}

#[test]
fn test_strict_mode_rejects_samples_above_max() {
    let err = decode_strict_err(b"P5\n2 1\n15\n\x0f\x10");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::SampleOutOfRange { value: 16, max: 15 })
    ));
    // lenient mode keeps the sample
    let image = PnmDecoder::new(b"P5\n2 1\n15\n\x0f\x10").decode().unwrap();
    assert_eq!(image.samples().gray().unwrap(), &[15, 16]);
}

#[test]
fn test_strict_mode_rejects_trailing_data() {
    let err = decode_strict_err(b"P5\n1 1\n255\n\x01\x02");
    assert!(matches!(
        err,
        PnmDecodeErrors::Format(FormatErrors::TrailingData(1))
    ));
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("this/path/does/not/exist.pgm");
    let err = pnm_decoder::parse(&path).unwrap_err();

    assert!(matches!(
        err,
        PnmDecodeErrors::Io(IoErrors::FileNotFound(ref p)) if *p == path
    ));
}

#[test]
fn test_error_messages() {
    let err = decode_err(b"P9\n");
    assert_eq!(
        err.to_string(),
        "Unsupported magic `P9`, supported versions are P1 to P6"
    );
}
