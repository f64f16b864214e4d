/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

/// A single RGB pixel
///
/// Equality, hashing and ordering are component wise, ordering
/// compares `r` first, then `g`, then `b`.
///
/// ```
/// use pnm_decoder::Color;
/// let dark = Color::new(0, 0, 255);
/// let light = Color::new(1, 0, 0);
/// assert!(dark < light);
/// assert_eq!(light.to_string(), "1-0-0");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    /// Largest of the three components
    pub fn max_component(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.r, self.g, self.b)
    }
}
