// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a timing array into a picture of where the time went.

use image::{Rgb, RgbImage};
use num::clamp;

use crate::planes::Pixel;
use crate::timing::TimingArray;

/// Normalized times are stretched ten times past the channel range so
/// the fast majority of pixels stays visible.
pub const VISIBILITY: f64 = 255.0 * 10.0;

/// Channel value for one timing, given the fastest time and the spread
/// between fastest and slowest.
///
/// The value is first clamped to the stretched range and then to the
/// channel range, so everything at or above a tenth of the spread comes
/// out at full red.  A zero spread leaves the pixel black.
pub fn intensity(nanos: u64, min: u64, spread: u64) -> u8 {
    if spread == 0 {
        return 0;
    }
    let stretched = (nanos.saturating_sub(min) as f64) * VISIBILITY / (spread as f64);
    let stretched = clamp(stretched, 0.0, VISIBILITY);
    clamp(stretched, 0.0, 255.0) as u8
}

/// Heatmap of `timings`: the red channel carries the normalized time,
/// green and blue stay dark.
pub fn heatmap(timings: &TimingArray) -> RgbImage {
    let (min, max) = timings.bounds().unwrap_or((0, 0));
    let spread = max - min;
    RgbImage::from_fn(timings.width() as u32, timings.height() as u32, |x, y| {
        let nanos = timings.get(Pixel::new(y as usize, x as usize));
        Rgb([intensity(nanos, min, spread), 0, 0])
    })
}
