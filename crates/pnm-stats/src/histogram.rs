/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Value histograms
//!
//! A histogram maps every value present in an image to the number of
//! pixels holding it. Gray samples are counted with a fixed 256 bin
//! array, colors with a hash map.
use std::collections::HashMap;
use std::hash::Hash;

use pnm_decoder::Color;

/// A value to count histogram
///
/// Keys are unique and only present with a non-zero count.
///
/// # Example
/// ```
/// use pnm_stats::Histogram;
/// let histo: Histogram<u8> = [3, 3, 3, 5, 5].into_iter().collect();
///
/// assert_eq!(histo.distinct(), 2);
/// assert_eq!(histo.mode(), Some((3, 3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram<K: Eq + Hash> {
    counts: HashMap<K, usize>
}

impl<K: Eq + Hash> Default for Histogram<K> {
    fn default() -> Self {
        Histogram {
            counts: HashMap::new()
        }
    }
}

impl<K: Copy + Eq + Hash + Ord> Histogram<K> {
    /// Create an empty histogram
    #[must_use]
    pub fn new() -> Histogram<K> {
        Histogram::default()
    }
    /// Count one more occurrence of `key`
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }
    /// Count `count` more occurrences of `key`
    pub fn add_count(&mut self, key: K, count: usize) {
        if count != 0 {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }
    /// Occurrences of `key`, zero if it was never added
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
    /// Number of distinct keys
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
    /// Total number of occurrences
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// The most frequent key and its count
    ///
    /// A key replaces the current best only with a strictly greater
    /// count. Equal counts resolve to the smaller key, so the result
    /// does not depend on map iteration order.
    ///
    /// Returns `None` for an empty histogram.
    #[must_use]
    pub fn mode(&self) -> Option<(K, usize)> {
        let mut best: Option<(K, usize)> = None;

        for (&key, &count) in &self.counts {
            best = match best {
                Some((best_key, best_count))
                    if count < best_count || (count == best_count && key > best_key) =>
                {
                    Some((best_key, best_count))
                }
                _ => Some((key, count))
            };
        }
        best
    }
    /// Return `(key, count)` pairs sorted by key
    #[must_use]
    pub fn sorted(&self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.counts.iter().map(|(k, c)| (*k, *c)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

impl<K: Copy + Eq + Hash + Ord> FromIterator<K> for Histogram<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut histo = Histogram::new();
        for key in iter {
            histo.add(key);
        }
        histo
    }
}

impl Histogram<u8> {
    /// Count gray samples with the 256 bin counter
    #[must_use]
    pub fn from_gray(data: &[u8]) -> Histogram<u8> {
        let bins = histogram(data);
        let mut histo = Histogram::new();

        for (value, count) in (0..=u8::MAX).zip(bins) {
            histo.add_count(value, count);
        }
        histo
    }
}

impl Histogram<Color> {
    /// Count colors in one pass
    #[must_use]
    pub fn from_colors(data: &[Color]) -> Histogram<Color> {
        let mut histo = Histogram {
            counts: HashMap::with_capacity(data.len().min(1 << 16))
        };
        for color in data {
            histo.add(*color);
        }
        histo
    }
}

/// Count every byte value in `data`
#[must_use]
pub fn histogram(data: &[u8]) -> [usize; 256] {
    // From https://fastcompression.blogspot.com/2014/09/counting-bytes-fast-little-trick-from.html

    // contains our count values
    let mut start1 = [0_usize; 256];
    // three more tables so that neighbouring bytes rarely hit the same counter
    let mut counts = [0_usize; 256 * 3];
    let (start2, counts) = counts.split_at_mut(256);
    let (start3, start4) = counts.split_at_mut(256);
    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();

    for i in chunks {
        let mut tmp = [0; 8];
        tmp.copy_from_slice(i);
        let tmp1 = u64::from_le_bytes(tmp);

        start1[((tmp1 >> 56) & 255) as usize] += 1;
        start2[((tmp1 >> 48) & 255) as usize] += 1;
        start3[((tmp1 >> 40) & 255) as usize] += 1;
        start4[((tmp1 >> 32) & 255) as usize] += 1;
        start1[((tmp1 >> 24) & 255) as usize] += 1;
        start2[((tmp1 >> 16) & 255) as usize] += 1;
        start3[((tmp1 >> 8) & 255) as usize] += 1;
        start4[(tmp1 & 255) as usize] += 1;
    }

    for i in remainder {
        start1[usize::from(*i)] += 1;
    }
    // add them together
    for (((b, c), d), e) in start1
        .iter_mut()
        .zip(start2.iter())
        .zip(start3.iter())
        .zip(start4.iter())
    {
        *b += c + d + e;
    }

    start1
}

#[test]
fn test_histogram_u8() {
    use nanorand::Rng;

    let (w, h) = (400, 400);

    // randomize inputs
    let mut pixels = vec![0_u8; w * h];
    nanorand::WyRand::new().fill(&mut pixels);

    let bins = histogram(&pixels);
    assert_eq!(bins.iter().sum::<usize>(), pixels.len());

    for value in [0_u8, 17, 255] {
        let expected = pixels.iter().filter(|x| **x == value).count();
        assert_eq!(bins[usize::from(value)], expected);
    }
}

#[test]
fn test_from_gray_drops_empty_bins() {
    let histo = Histogram::from_gray(&[0, 0, 9, 255, 9, 9, 1, 2, 3, 4]);

    assert_eq!(histo.distinct(), 7);
    assert_eq!(histo.count(&9), 3);
    assert_eq!(histo.count(&200), 0);
    assert_eq!(histo.total(), 10);
}

#[test]
fn test_mode_ties_take_lowest_key() {
    let histo: Histogram<u8> = [9, 2, 9, 2, 7].into_iter().collect();
    assert_eq!(histo.mode(), Some((2, 2)));

    let histo = Histogram::from_colors(&[
        Color::new(5, 0, 0),
        Color::new(0, 9, 9),
        Color::new(0, 9, 1),
        Color::new(5, 0, 0),
        Color::new(0, 9, 1),
        Color::new(0, 9, 9)
    ]);
    assert_eq!(histo.mode(), Some((Color::new(0, 9, 1), 2)));
}

#[test]
fn test_mode_prefers_larger_count() {
    let histo: Histogram<u8> = [0, 200, 200].into_iter().collect();
    assert_eq!(histo.mode(), Some((200, 2)));
}

#[test]
fn test_empty_histogram() {
    let histo = Histogram::<Color>::new();
    assert!(histo.is_empty());
    assert_eq!(histo.mode(), None);
    assert_eq!(histo.distinct(), 0);
}

#[test]
fn test_sorted() {
    let histo: Histogram<u8> = [4, 1, 4].into_iter().collect();
    assert_eq!(histo.sorted(), vec![(1, 1), (4, 2)]);
}
