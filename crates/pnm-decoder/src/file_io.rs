/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pnm_core::log::debug;
use pnm_core::options::DecoderOptions;

use crate::decoder::PnmDecoder;
use crate::errors::PnmDecodeErrors;
use crate::image::DecodedImage;

/// Decode the netpbm file at `path` with default options
///
/// # Example
/// ```no_run
/// let image = pnm_decoder::parse("picture.ppm").unwrap();
/// println!("{}x{}", image.width(), image.height());
/// ```
pub fn parse<P: AsRef<Path>>(path: P) -> Result<DecodedImage, PnmDecodeErrors> {
    parse_with_options(path, DecoderOptions::default())
}

/// Decode the netpbm file at `path` with the given options
///
/// The whole file is read into memory and the handle is
/// closed before decoding starts.
pub fn parse_with_options<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<DecodedImage, PnmDecodeErrors> {
    let path = path.as_ref();
    let data = read_file(path)?;

    debug!("Read {} bytes from {:?}", data.len(), path);

    PnmDecoder::new_with_options(options, &data).decode()
}

fn read_file(path: &Path) -> Result<Vec<u8>, PnmDecodeErrors> {
    let mut file =
        File::open(path).map_err(|e| PnmDecodeErrors::from_io(path.to_path_buf(), e))?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| PnmDecodeErrors::from_io(path.to_path_buf(), e))?;

    Ok(data)
}
