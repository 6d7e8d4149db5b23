// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid renderer.  Every pixel is evaluated once per pass, and the
//! time spent on it is recorded next to its color.

use image::{Rgb, RgbImage};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::errors::Result;
use crate::escape::{escape_time, to_color};
use crate::partition::{self, Block};
use crate::planes::PlaneMapper;
use crate::timing::TimingArray;

/// What a worker computed for one block: colors and timings in the
/// block's own row-major order.
#[derive(Debug)]
pub struct Tile {
    /// The block these values belong to.
    pub block: Block,
    /// One color per pixel.
    pub colors: Vec<Rgb<u8>>,
    /// One duration, in nanoseconds, per pixel.
    pub timings: Vec<u64>,
}

/// The outcome of one full pass over the grid.
#[derive(Debug)]
pub struct Frame {
    /// The rendered set.
    pub image: RgbImage,
    /// Per-pixel evaluation times.
    pub timings: TimingArray,
    /// Wall-clock time of the whole pass, from dispatch to join.
    pub elapsed: Duration,
    /// How many blocks the grid was cut into.
    pub blocks: usize,
}

/// Holds the plane and the iteration cap.  Once built it is shared
/// read-only by every worker.
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
    threads: usize,
}

impl Renderer {
    /// Builds a renderer from the grid size, corners, limit and thread
    /// count of `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let plane = PlaneMapper::new(
            config.width,
            config.height,
            config.top_left,
            config.bottom_right,
        )?;
        Ok(Renderer {
            plane,
            limit: config.limit,
            threads: config.threads,
        })
    }

    /// The pixel to complex mapping in use.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Evaluates every pixel in `block`, timing each one separately.
    pub fn render_block(&self, block: Block) -> Tile {
        let mut colors = Vec::with_capacity(block.len());
        let mut timings = Vec::with_capacity(block.len());
        for pixel in block.pixels() {
            let start = Instant::now();
            let count = escape_time(self.plane.pixel_to_point(&pixel), self.limit);
            colors.push(to_color(count, self.limit));
            timings.push(start.elapsed().as_nanos() as u64);
        }
        Tile {
            block,
            colors,
            timings,
        }
    }

    /// Renders the whole grid cut into `grain_size` blocks, spread over
    /// the worker pool.
    pub fn render(&self, grain_size: usize) -> Result<Frame> {
        let blocks = partition::blocks(self.plane.height(), self.plane.width(), grain_size)?;
        let count = blocks.len();

        let start = Instant::now();
        let tiles = partition::dispatch(blocks, self.threads, |block| self.render_block(block))?;
        let elapsed = start.elapsed();

        Ok(self.assemble(tiles, elapsed, count))
    }

    /// Renders the whole grid as one block on the calling thread.
    pub fn render_sequential(&self) -> Frame {
        let block = Block::whole(self.plane.height(), self.plane.width());
        let start = Instant::now();
        let tile = self.render_block(block);
        let elapsed = start.elapsed();
        self.assemble(vec![tile], elapsed, 1)
    }

    fn assemble(&self, tiles: Vec<Tile>, elapsed: Duration, blocks: usize) -> Frame {
        let mut image = RgbImage::new(self.plane.width() as u32, self.plane.height() as u32);
        let mut timings = TimingArray::new(self.plane.width(), self.plane.height());
        for tile in tiles {
            let values = tile.colors.into_iter().zip(tile.timings);
            for (pixel, (color, nanos)) in tile.block.pixels().zip(values) {
                image.put_pixel(pixel.column as u32, pixel.row as u32, color);
                timings.set(pixel, nanos);
            }
        }
        Frame {
            image,
            timings,
            elapsed,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRAIN_SIZES;
    use crate::planes::Pixel;

    fn small_config() -> Config {
        Config {
            width: 61,
            height: 47,
            threads: 4,
            ..Config::default()
        }
    }

    #[test]
    fn partitioned_passes_match_the_sequential_pass() {
        let renderer = Renderer::new(&small_config()).unwrap();
        let reference = renderer.render_sequential();
        for &grain in GRAIN_SIZES.iter() {
            let frame = renderer.render(grain).unwrap();
            assert!(
                frame.image == reference.image,
                "grain {} changed the picture",
                grain
            );
        }
    }

    #[test]
    fn block_counts_follow_the_grain() {
        let renderer = Renderer::new(&small_config()).unwrap();
        assert_eq!(renderer.render(1).unwrap().blocks, 61 * 47);
        assert_eq!(renderer.render(10).unwrap().blocks, 7 * 5);
        assert_eq!(renderer.render(1000).unwrap().blocks, 1);
    }

    #[test]
    fn frame_covers_the_grid() {
        let renderer = Renderer::new(&small_config()).unwrap();
        let frame = renderer.render(7).unwrap();
        assert_eq!(frame.image.dimensions(), (61, 47));
        assert_eq!(frame.timings.width(), 61);
        assert_eq!(frame.timings.height(), 47);
        assert_eq!(frame.timings.as_slice().len(), 61 * 47);
    }

    #[test]
    fn tile_values_follow_block_order() {
        let renderer = Renderer::new(&small_config()).unwrap();
        let block = Block {
            top: 10,
            left: 20,
            height: 3,
            width: 4,
        };
        let tile = renderer.render_block(block);
        assert_eq!(tile.colors.len(), 12);
        assert_eq!(tile.timings.len(), 12);

        let plane = renderer.plane();
        let expected = to_color(escape_time(plane.pixel_to_point(&Pixel::new(11, 21)), 256), 256);
        assert_eq!(tile.colors[5], expected);
    }

    #[test]
    fn corner_pixel_escapes_immediately() {
        // (-2.2, 1.5) lies outside the radius-2 disk.
        let renderer = Renderer::new(&small_config()).unwrap();
        let frame = renderer.render(5).unwrap();
        assert_eq!(*frame.image.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn zero_grain_is_an_error() {
        let renderer = Renderer::new(&small_config()).unwrap();
        assert!(renderer.render(0).is_err());
    }
}
