/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use pnm_core::options::DecoderOptions;

pub mod global_options;

/// Input files in the order they were given, or `None`
/// when the interactive loop should run
pub fn get_input_files(options: &ArgMatches) -> Option<Vec<PathBuf>> {
    options
        .get_many::<String>("in")
        .map(|files| files.map(PathBuf::from).collect())
}

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options.get_one::<usize>("max-width").copied().unwrap_or(1 << 14);
    let max_height = options.get_one::<usize>("max-height").copied().unwrap_or(1 << 14);
    let strict_mode = options.get_flag("strict");
    let plain_ascii = options.get_flag("plain-ascii");

    DecoderOptions::new_cmd()
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
        .set_plain_ascii(plain_ascii)
}

#[test]
fn test_decoder_options_from_args() {
    let matches = crate::cmd_args::create_cmd_args().get_matches_from([
        "pnmstat",
        "--max-width",
        "12",
        "--strict",
        "--plain-ascii"
    ]);
    let options = get_decoder_options(&matches);

    assert_eq!(options.max_width(), 12);
    assert_eq!(options.max_height(), 1 << 14);
    assert!(options.strict_mode());
    assert!(options.plain_ascii());
    assert_eq!(get_input_files(&matches), None);
}

#[test]
fn test_input_files_keep_order() {
    let matches = crate::cmd_args::create_cmd_args().get_matches_from([
        "pnmstat", "-i", "b.pgm", "--input", "a.ppm"
    ]);
    assert_eq!(
        get_input_files(&matches),
        Some(vec![PathBuf::from("b.pgm"), PathBuf::from("a.ppm")])
    );
}
