/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The decoders in this workspace load the whole image into memory
//! before decoding, so the reader works on a borrowed slice and
//! never performs I/O on its own.
pub use reader::{ZByteIoError, ZByteReader};

mod reader;
