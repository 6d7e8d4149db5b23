// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between the pixel grid of the output image, with its origin at the
//! top-left corner, and a rectangle on the complex plane given by its
//! top-left and bottom-right corners.

use crate::errors::{Error, Result};
use num::Complex;

/// Describes the width and height of the pixel grid.  The origin is
/// always 0,0, so it isn't stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the top-left and bottom-right corners of the complex
/// plane, treating the real part as x and the imaginary part as y.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// A location on the pixel grid.  Rows grow downward from the top of
/// the image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl Pixel {
    /// Constructor, row first.
    pub fn new(row: usize, column: usize) -> Self {
        Pixel { row, column }
    }
}

/// Maps pixels onto the complex plane.  Every pixel is assigned the
/// complex point at its top-left corner, so the last row and column
/// stop one step short of the bottom-right corner.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the pixel grid.
    pub integral_plane: IntegralPlane,
    /// The two corners of the complex rectangle.
    pub complex_plane: ComplexPlane,
    // Complex distance covered by one column and one row.
    deltas: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the pixel grid and the two corners of the
    /// complex rectangle.  The rectangle may run in any direction (the
    /// usual picture has the imaginary axis decreasing downward) but
    /// it may not be flat.
    pub fn new(
        width: usize,
        height: usize,
        top_left: Complex<f64>,
        bottom_right: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(Error::Plane(format!(
                "The pixel grid {}x{} is empty.",
                width, height
            )));
        }

        let diff = bottom_right - top_left;
        if !diff.re.is_finite() || !diff.im.is_finite() {
            return Err(Error::Plane("The corners must be finite.".to_string()));
        }
        if diff.re == 0.0 || diff.im == 0.0 {
            return Err(Error::Plane(
                "The corners do not span a rectangle.".to_string(),
            ));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(top_left, bottom_right),
            deltas: (diff.re / (width as f64), diff.im / (height as f64)),
        })
    }

    /// Width of the pixel grid.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the pixel grid.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Never true for a mapper built by `new`, but clippy wants it.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Complex distance between horizontally and vertically adjacent
    /// pixels.
    pub fn deltas(&self) -> (f64, f64) {
        self.deltas
    }

    /// Given a pixel on the grid, return the complex point it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        self.complex_plane.0
            + Complex::new(
                self.deltas.0 * (pixel.column as f64),
                self.deltas.1 * (pixel.row as f64),
            )
    }

    /// Row-major offset of a pixel in a flat buffer covering the grid.
    pub fn offset(&self, pixel: &Pixel) -> usize {
        pixel.row * self.integral_plane.0 + pixel.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark_plane() -> PlaneMapper {
        PlaneMapper::new(
            1000,
            1000,
            Complex::new(-2.2, 1.5),
            Complex::new(0.8, -1.5),
        )
        .unwrap()
    }

    #[test]
    fn planemapper_fails_on_empty_grid() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_flat_rectangle() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_infinite_corner() {
        let pm = PlaneMapper::new(
            4,
            4,
            Complex::new(-1.0, 1.0),
            Complex::new(std::f64::INFINITY, -1.0),
        );
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_accepts_downward_imaginary_axis() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn origin_pixel_is_the_top_left_corner() {
        let pm = benchmark_plane();
        assert_eq!(pm.pixel_to_point(&Pixel::new(0, 0)), Complex::new(-2.2, 1.5));
    }

    #[test]
    fn last_pixel_is_within_a_step_of_the_bottom_right_corner() {
        let pm = benchmark_plane();
        let (dx, dy) = pm.deltas();
        let point = pm.pixel_to_point(&Pixel::new(999, 999));
        assert!((point.re - 0.8).abs() <= dx.abs() + 1e-12);
        assert!((point.im - -1.5).abs() <= dy.abs() + 1e-12);
    }

    #[test]
    fn rows_move_along_the_imaginary_axis() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, 2.0), Complex::new(2.0, -2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel::new(2, 0)), Complex::new(-2.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel::new(0, 2)), Complex::new(0.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel::new(3, 1)), Complex::new(-1.0, -1.0));
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = PlaneMapper::new(5, 3, Complex::new(0.0, 0.0), Complex::new(5.0, 3.0)).unwrap();
        assert_eq!(pm.len(), 15);
        assert_eq!(pm.offset(&Pixel::new(0, 4)), 4);
        assert_eq!(pm.offset(&Pixel::new(1, 0)), 5);
        assert_eq!(pm.offset(&Pixel::new(2, 4)), 14);
    }
}
