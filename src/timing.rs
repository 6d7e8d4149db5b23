// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-pixel evaluation times for one render pass.

use crate::planes::Pixel;

/// Nanoseconds spent on each pixel, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingArray {
    width: usize,
    height: usize,
    nanos: Vec<u64>,
}

impl TimingArray {
    /// A zeroed array for a `width` by `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        TimingArray {
            width,
            height,
            nanos: vec![0; width * height],
        }
    }

    /// Wraps an existing row-major buffer.  Returns `None` when the
    /// buffer doesn't match the grid.
    pub fn from_vec(width: usize, height: usize, nanos: Vec<u64>) -> Option<Self> {
        if nanos.len() == width * height {
            Some(TimingArray {
                width,
                height,
                nanos,
            })
        } else {
            None
        }
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Time recorded for a pixel.
    pub fn get(&self, pixel: Pixel) -> u64 {
        self.nanos[pixel.row * self.width + pixel.column]
    }

    /// Records the time for a pixel, replacing whatever was there.
    pub fn set(&mut self, pixel: Pixel, nanos: u64) {
        self.nanos[pixel.row * self.width + pixel.column] = nanos;
    }

    /// The fastest and slowest pixel, or `None` for an empty grid.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        let min = *self.nanos.iter().min()?;
        let max = *self.nanos.iter().max()?;
        Some((min, max))
    }

    /// Sum over the whole grid.
    pub fn total(&self) -> u64 {
        self.nanos.iter().sum()
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[u64] {
        &self.nanos
    }
}
