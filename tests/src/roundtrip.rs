/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pnm_decoder::{Color, PnmDecoder, PnmVersion, Samples};

use crate::PnmEncoder;

#[test]
fn test_bitmap_roundtrip() {
    let mut rng = nanorand::WyRand::new_seed(23);

    for width in [1, 7, 8, 9, 31] {
        let height = 3;
        let bits: Vec<u8> = (0..width * height).map(|_| rng.generate_range(0_u8..=1)).collect();

        let mut encoded = vec![];
        PnmEncoder::new(&mut encoded)
            .encode_bitmap(width, height, &bits)
            .unwrap();

        let image = PnmDecoder::new(&encoded).decode().unwrap();

        assert_eq!(image.version(), PnmVersion::P4);
        assert_eq!(image.width() * image.height(), image.samples().len());
        assert_eq!(image.samples(), &Samples::Gray(bits));
    }
}

#[test]
fn test_gray_roundtrip() {
    let (width, height) = (33, 17);
    let mut pixels = vec![0_u8; width * height];
    nanorand::WyRand::new_seed(5).fill(&mut pixels);

    let mut encoded = vec![];
    PnmEncoder::new(&mut encoded)
        .encode_gray(width, height, 255, &pixels)
        .unwrap();

    let mut decoder = PnmDecoder::new(&encoded);
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((width, height)));
    assert_eq!(decoder.max_value(), Some(255));

    let image = decoder.decode().unwrap();
    assert_eq!(image.samples().gray(), Some(pixels.as_slice()));
}

#[test]
fn test_color_roundtrip() {
    let (width, height) = (12, 9);
    let mut rng = nanorand::WyRand::new_seed(91);
    let colors: Vec<Color> = (0..width * height)
        .map(|_| Color::new(rng.generate(), rng.generate(), rng.generate()))
        .collect();

    let mut encoded = vec![];
    PnmEncoder::new(&mut encoded)
        .encode_colors(width, height, &colors)
        .unwrap();

    let image = PnmDecoder::new(&encoded).decode().unwrap();

    assert_eq!(image.version(), PnmVersion::P6);
    assert_eq!(image.samples().colors(), Some(colors.as_slice()));
}

#[test]
fn test_reencode_is_stable() {
    let source = b"P5\n# written by hand\n4 2\n200\n\x01\x02\x03\x04\x05\x06\x07\xc8";
    let image = PnmDecoder::new(source).decode().unwrap();

    let encoded = crate::encode_to_vec(&image).unwrap();
    assert_eq!(encoded, b"P5\n4 2\n200\n\x01\x02\x03\x04\x05\x06\x07\xc8");

    let again = PnmDecoder::new(&encoded).decode().unwrap();
    assert_eq!(again, image);
}

#[test]
fn test_encoder_rejects_bad_length() {
    let mut encoded = vec![];
    assert!(PnmEncoder::new(&mut encoded)
        .encode_gray(2, 2, 255, &[1, 2, 3])
        .is_err());
    assert!(encoded.is_empty());
}
