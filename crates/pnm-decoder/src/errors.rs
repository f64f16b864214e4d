/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding a netpbm file
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Failures to get the file contents into memory
pub enum IoErrors {
    /// The path does not exist
    FileNotFound(PathBuf),
    /// The file exists but could not be opened or read
    Unreadable(PathBuf, io::Error)
}

/// Failures caused by the contents of the file
pub enum FormatErrors {
    /// The first token is not one of `P1` to `P6`
    UnsupportedMagic(String),
    /// Width or height is missing, not a number or zero
    InvalidDimensions(&'static str),
    /// Width or height is larger than the configured limit
    LargeDimensions { limit: usize, found: usize },
    /// The max value is missing, not a number or zero
    InvalidMaxValue,
    /// The max value does not fit in a byte
    UnsupportedMaxValue(usize),
    /// Header is not terminated the way netpbm requires
    InvalidHeader(String),
    /// Fewer payload bytes (or ASCII samples) than the geometry requires
    TruncatedPayload { expected: usize, found: usize },
    /// An ASCII payload token could not be read as a sample
    InvalidSample(String),
    /// A sample is larger than the declared max value, strict mode only
    SampleOutOfRange { value: usize, max: usize },
    /// Bytes remain after the payload, strict mode only
    TrailingData(usize)
}

/// All errors returned by the decoder
pub enum PnmDecodeErrors {
    Io(IoErrors),
    Format(FormatErrors)
}

impl PnmDecodeErrors {
    /// Map an `io::Error` raised while reading `path`
    pub(crate) fn from_io(path: PathBuf, err: io::Error) -> PnmDecodeErrors {
        if err.kind() == io::ErrorKind::NotFound {
            PnmDecodeErrors::Io(IoErrors::FileNotFound(path))
        } else {
            PnmDecodeErrors::Io(IoErrors::Unreadable(path, err))
        }
    }
}

impl From<IoErrors> for PnmDecodeErrors {
    fn from(value: IoErrors) -> Self {
        PnmDecodeErrors::Io(value)
    }
}

impl From<FormatErrors> for PnmDecodeErrors {
    fn from(value: FormatErrors) -> Self {
        PnmDecodeErrors::Format(value)
    }
}

impl Debug for IoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Unreadable(path, err) => {
                write!(f, "Could not read {}, reason: {err}", path.display())
            }
        }
    }
}

impl Debug for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedMagic(magic) => {
                write!(
                    f,
                    "Unsupported magic `{magic}`, supported versions are P1 to P6"
                )
            }
            Self::InvalidDimensions(reason) => write!(f, "Invalid dimensions, reason: {reason}"),
            Self::LargeDimensions { limit, found } => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {limit} but found {found}"
                )
            }
            Self::InvalidMaxValue => write!(f, "Max value must be a number greater than zero"),
            Self::UnsupportedMaxValue(value) => {
                write!(f, "Max value {value} greater than 255 is not supported")
            }
            Self::InvalidHeader(reason) => write!(f, "Invalid header, reason: {reason}"),
            Self::TruncatedPayload { expected, found } => {
                write!(
                    f,
                    "Truncated payload, expected {expected} units but found {found}"
                )
            }
            Self::InvalidSample(token) => write!(f, "Invalid sample `{token}` in payload"),
            Self::SampleOutOfRange { value, max } => {
                write!(f, "Sample {value} is larger than max value {max}")
            }
            Self::TrailingData(count) => write!(f, "{count} bytes found after the payload"),
        }
    }
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err:?}"),
            Self::Format(err) => write!(f, "{err:?}")
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PnmDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(IoErrors::Unreadable(_, err)) => Some(err),
            _ => None
        }
    }
}
