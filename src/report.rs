// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes what a run produced: two images per grain size and one line
//! per grain size in `output.txt`.  Nothing here is allowed to stop the
//! run; failures are logged and skipped.

use image::RgbImage;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::Result;
use crate::render::Frame;

/// Name of the append-only log inside the output directory.
pub const LOG_FILE: &str = "output.txt";

/// The timing result of one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Block side length used for the pass.
    pub grain_size: usize,
    /// Wall-clock time of the pass.
    pub elapsed: Duration,
    /// Number of blocks dispatched.
    pub blocks: usize,
}

impl Summary {
    /// Summarizes `frame`, rendered at `grain_size`.
    pub fn new(grain_size: usize, frame: &Frame) -> Self {
        Summary {
            grain_size,
            elapsed: frame.elapsed,
            blocks: frame.blocks,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Time: {} ns Grain size: {}",
            self.elapsed.as_nanos(),
            self.grain_size
        )
    }
}

/// The output directory and the log opened in it.
pub struct Report {
    dir: PathBuf,
    log: Option<File>,
}

fn open_log(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    Ok(file)
}

fn write_image(path: &Path, image: &RgbImage) -> Result<()> {
    image.save(path)?;
    Ok(())
}

impl Report {
    /// Creates `dir` if needed and opens its log for appending.  If
    /// either fails the report still works, it just doesn't log.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let log = match open_log(&dir) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Not logging to {}: {}", dir.join(LOG_FILE).display(), e);
                None
            }
        };
        Report { dir, log }
    }

    /// True when log lines are actually being written.
    pub fn is_logging(&self) -> bool {
        self.log.is_some()
    }

    /// Where the rendered set for `grain_size` goes.
    pub fn mandelbrot_path(&self, grain_size: usize) -> PathBuf {
        self.dir.join(format!("mandelbrot{}.png", grain_size))
    }

    /// Where the timing heatmap for `grain_size` goes.
    pub fn heatmap_path(&self, grain_size: usize) -> PathBuf {
        self.dir.join(format!("time_by_element{}.png", grain_size))
    }

    /// Prints the summary line and appends it to the log.
    pub fn record(&mut self, summary: &Summary) {
        println!("{}", summary);
        if let Some(log) = self.log.as_mut() {
            if let Err(e) = writeln!(log, "{}", summary) {
                warn!("Could not append to {}: {}", LOG_FILE, e);
            }
        }
    }

    /// Saves the rendered set and its heatmap under names carrying the
    /// grain size.
    pub fn save_frame(&self, frame: &Frame, heatmap: &RgbImage, grain_size: usize) {
        for (path, image) in &[
            (self.mandelbrot_path(grain_size), &frame.image),
            (self.heatmap_path(grain_size), heatmap),
        ] {
            match write_image(path, image) {
                Ok(()) => debug!("Wrote {}", path.display()),
                Err(e) => warn!("Could not write {}: {}", path.display(), e),
            }
        }
    }
}
