// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fixed parameters of a benchmark run.  There is no command line;
//! the binary always runs `Config::default()`, and the tests build
//! smaller ones by hand.

use num::Complex;
use std::path::PathBuf;

/// The grain sizes swept by a default run, in the order they are
/// rendered and logged.
pub const GRAIN_SIZES: [usize; 14] = [1, 2, 3, 4, 5, 10, 20, 40, 70, 100, 200, 400, 600, 1000];

/// Iteration cap for the escape-time evaluator.
pub const MAX_ITERATIONS: usize = 256;

/// Parameters of a run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Width of the output images, in pixels.
    pub width: usize,
    /// Height of the output images, in pixels.
    pub height: usize,
    /// The complex point drawn at pixel (0, 0).
    pub top_left: Complex<f64>,
    /// The complex point at the far corner of the grid.
    pub bottom_right: Complex<f64>,
    /// Iteration cap.
    pub limit: usize,
    /// Grain sizes to sweep, in order.
    pub grain_sizes: Vec<usize>,
    /// Where the images and `output.txt` are written.
    pub output_dir: PathBuf,
    /// Number of worker threads per pass.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 1000,
            height: 1000,
            top_left: Complex::new(-2.2, 1.5),
            bottom_right: Complex::new(0.8, -1.5),
            limit: MAX_ITERATIONS,
            grain_sizes: GRAIN_SIZES.to_vec(),
            output_dir: PathBuf::from("output"),
            threads: num_cpus::get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_benchmark_setup() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (1000, 1000));
        assert_eq!(config.top_left, Complex::new(-2.2, 1.5));
        assert_eq!(config.bottom_right, Complex::new(0.8, -1.5));
        assert_eq!(config.limit, 256);
        assert_eq!(config.grain_sizes.len(), 14);
        assert_eq!(config.grain_sizes.first(), Some(&1));
        assert_eq!(config.grain_sizes.last(), Some(&1000));
        assert!(config.threads >= 1);
    }
}
