// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by the renderer, the partitioner and the
//! report writer.

use std::io;

/// Everything that can go wrong while benchmarking a render.  Only
/// the first three are ever fatal; I/O and image errors are logged
/// by the report writer and the run carries on.
#[derive(Debug, Fail)]
pub enum Error {
    /// The integral plane or the complex rectangle can't be mapped.
    #[fail(display = "Invalid plane: {}", _0)]
    Plane(String),

    /// Blocks must be at least one pixel on a side.
    #[fail(display = "Grain size must be positive, got {}", _0)]
    GrainSize(usize),

    /// A render thread panicked before handing back its tiles.
    #[fail(display = "A render worker panicked")]
    Worker,

    /// Creating the output directory or writing the log failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// The image library couldn't encode or save a picture.
    #[fail(display = "Image error: {}", _0)]
    Image(#[cause] image::ImageError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
