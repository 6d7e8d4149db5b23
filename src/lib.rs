#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot grain-size benchmark
//!
//! Every pixel of the Mandelbrot set can be computed on its own, which
//! makes it the classic embarrassingly parallel workload.  The open
//! question is how finely to cut the picture before handing it to the
//! workers: one pixel per task drowns in scheduling overhead, one task
//! per picture leaves all but one core idle.
//!
//! This crate renders the same picture over and over, cutting it into
//! square blocks of a different "grain size" each time.  Each pass
//! writes the rendered set, a heatmap of how long every pixel took,
//! and a line with the wall-clock time of the whole pass.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod bench;
pub mod config;
pub mod errors;
pub mod escape;
pub mod heatmap;
pub mod partition;
pub mod planes;
pub mod render;
pub mod report;
pub mod timing;

pub use bench::run;
pub use config::Config;
pub use errors::{Error, Result};
pub use render::{Frame, Renderer};
pub use report::{Report, Summary};
