// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cuts the pixel grid into square blocks and hands them out to a
//! pool of scoped worker threads.
//!
//! Blocks never overlap, so workers don't share anything they write:
//! each one returns whatever it computed for the blocks it pulled off
//! the queue, and the caller puts the pieces together once every
//! worker has been joined.

use crossbeam::channel;
use crossbeam::thread::ScopedJoinHandle;
use itertools::iproduct;

use crate::errors::{Error, Result};
use crate::planes::Pixel;

/// A rectangle of the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// First row covered.
    pub top: usize,
    /// First column covered.
    pub left: usize,
    /// Number of rows covered.
    pub height: usize,
    /// Number of columns covered.
    pub width: usize,
}

impl Block {
    /// A single block covering the whole grid.
    pub fn whole(height: usize, width: usize) -> Self {
        Block {
            top: 0,
            left: 0,
            height,
            width,
        }
    }

    /// Number of pixels in the block.
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// True for a block with no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pixels of the block, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(
            self.top..self.top + self.height,
            self.left..self.left + self.width
        )
        .map(|(row, column)| Pixel { row, column })
    }
}

/// Tiles a `height` by `width` grid with `grain` by `grain` blocks,
/// in row-major order.  Blocks along the bottom and right edges are
/// cut short when the grain doesn't divide the grid.
pub fn blocks(height: usize, width: usize, grain: usize) -> Result<Vec<Block>> {
    if grain == 0 {
        return Err(Error::GrainSize(grain));
    }

    Ok(
        iproduct!((0..height).step_by(grain), (0..width).step_by(grain))
            .map(|(top, left)| Block {
                top,
                left,
                height: grain.min(height - top),
                width: grain.min(width - left),
            })
            .collect(),
    )
}

/// Runs `work` over every block on up to `threads` workers and returns
/// the results in no particular order.  Does not return until every
/// block is done.
pub fn dispatch<T, F>(blocks: Vec<Block>, threads: usize, work: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(Block) -> T + Sync,
{
    let threads = threads.max(1).min(blocks.len().max(1));
    debug!("Dispatching {} blocks to {} workers", blocks.len(), threads);

    let (sender, receiver) = channel::unbounded();
    blocks
        .into_iter()
        .try_for_each(|block| sender.send(block))
        .map_err(|_| Error::Worker)?;
    drop(sender);

    let work = &work;
    let per_worker = crossbeam::scope(|spawner| {
        let handles: Vec<ScopedJoinHandle<Vec<T>>> = (0..threads)
            .map(|id| {
                let receiver = receiver.clone();
                spawner.spawn(move |_| {
                    let results: Vec<T> = receiver.iter().map(work).collect();
                    trace!("Worker {} finished {} blocks", id, results.len());
                    results
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| Error::Worker))
            .collect::<Result<Vec<Vec<T>>>>()
    })
    .map_err(|_| Error::Worker)??;

    Ok(per_worker.into_iter().flatten().collect())
}
