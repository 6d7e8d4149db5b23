// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grain-size sweep.

use crate::config::Config;
use crate::errors::Result;
use crate::heatmap::heatmap;
use crate::render::Renderer;
use crate::report::{Report, Summary};

/// Renders the whole grid once per grain size in `config`, in order.
/// Each pass finishes before its images and log line are written.
/// Returns one summary per grain size.
pub fn run(config: &Config) -> Result<Vec<Summary>> {
    let renderer = Renderer::new(config)?;
    let mut report = Report::open(&config.output_dir);

    info!(
        "Rendering {}x{} at {} grain sizes on {} threads",
        config.width,
        config.height,
        config.grain_sizes.len(),
        config.threads
    );

    let mut summaries = Vec::with_capacity(config.grain_sizes.len());
    for &grain_size in &config.grain_sizes {
        let frame = renderer.render(grain_size)?;
        info!(
            "Grain size {}: {} blocks, {} ns summed over pixels",
            grain_size,
            frame.blocks,
            frame.timings.total()
        );

        let summary = Summary::new(grain_size, &frame);
        report.record(&summary);
        report.save_frame(&frame, &heatmap(&frame.timings), grain_size);
        summaries.push(summary);
    }
    Ok(summaries)
}
