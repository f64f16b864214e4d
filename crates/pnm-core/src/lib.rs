/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pnmstat crates
//!
//! It currently contains
//!
//! - A slice backed bytestream reader used by the header and payload parsers
//! - Decoder options shared by every entry point
//! - A log facade that forwards to the `log` crate when the `log` feature is on
//!
//! # Features
//!  - `log`: Forward the [`log`](crate::log) macros to the `log` crate.
//!
#![macro_use]

pub mod bytestream;
pub mod options;

#[cfg(not(feature = "log"))]
pub mod log;

#[cfg(feature = "log")]
pub use log;
