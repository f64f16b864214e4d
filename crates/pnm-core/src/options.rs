/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which every entry point of the
//! decoder gets shared options, the same `DecoderOptions` can be reused
//! across files.
//!

/// Decoder options
///
/// Options are set through builder style setters, e.g
/// ```
/// use pnm_core::options::DecoderOptions;
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 1024);
/// assert!(options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat recoverable problems as errors
    ///
    /// When set to false, samples larger than the declared max value and
    /// bytes trailing the payload are logged via the log crate.
    ///
    /// When set to true, this will return an `Err` on such images.
    ///
    /// - Default value: false
    strict_mode: bool,
    /// Tokenize the plain formats (P1, P2, P3) as ASCII text
    ///
    /// When false, their payloads are read with the same byte layout
    /// as P4, P5 and P6.
    ///
    /// - Default value: false
    plain_ascii: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false,
            plain_ascii: false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Options used by the command line front end
    ///
    /// This is the same as `default`, with limits left
    /// for the caller to configure
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
    }
    /// Options that reject anything the lenient decoder
    /// would only warn about
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }
}

/// Getters
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    /// Return true whether the decoder should be in strict mode
    /// and reject images with recoverable problems
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }
    /// Return true if P1, P2 and P3 payloads are tokenized as ASCII
    pub const fn plain_ascii(&self) -> bool {
        self.plain_ascii
    }
}

/// Setters
impl DecoderOptions {
    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///  - width: The maximum width allowed
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///  - height: The maximum height allowed
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Set whether the decoder should be in strict mode
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
    /// Set whether P1, P2 and P3 payloads are tokenized as ASCII
    pub fn set_plain_ascii(mut self, yes: bool) -> Self {
        self.plain_ascii = yes;
        self
    }
}
