// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator and the palette that turns its counts
//! into pixels.

use image::Rgb;
use num::Complex;

/// Counts the iterations of `z = z * z + c` before `z` leaves the
/// radius-2 disk, stopping at `limit`.
///
/// The orbit starts at `c` itself rather than at zero, which shifts
/// every count by one step relative to the textbook Mandelbrot
/// iteration.  Anything with `|c| >= 2` is reported as escaping after
/// zero iterations.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z = c;
    let mut i = 0;
    while i != limit && z.norm_sqr() < 4.0 {
        z = z * z + c;
        i += 1;
    }
    i
}

/// Points that escape are shaded red, ten steps of brightness per
/// iteration, saturating at full red.  Points that reach the limit are
/// presumed inside the set and drawn black.
pub fn to_color(count: usize, limit: usize) -> Rgb<u8> {
    if count < limit {
        Rgb([num::clamp(10 * count, 0, 255) as u8, 0, 0])
    } else {
        Rgb([0, 0, 0])
    }
}
