use rayon::prelude::*;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

use crate::core::actions::render_chunk::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_chunk::render_chunk::{RenderChunkError, render_chunk};
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::render_params::{RenderParams, RowRange};
use crate::core::data::viewport::Viewport;
use crate::core::data::world_rect::{WorldRect, WorldRectError};
use crate::core::fractals::errors::FractalAlgorithmError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::available_workers::available_workers;
use crate::core::util::partition_rows::partition_rows;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderPassError {
    #[error("viewport does not describe a usable world rectangle: {0}")]
    World(#[from] WorldRectError),
    #[error(transparent)]
    Buffer(#[from] PixelBufferError),
    #[error(transparent)]
    Chunk(#[from] RenderChunkError),
    #[error(transparent)]
    Algorithm(#[from] FractalAlgorithmError),
}

/// What one completed pass did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub bands: usize,
    pub duration: Duration,
}

/// Splits a frame into row bands and renders them in parallel on the rayon pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderScheduler {
    workers: usize,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderScheduler {
    /// One band per hardware thread.
    #[must_use]
    pub fn new() -> Self {
        Self::with_workers(available_workers())
    }

    /// A fixed band count. `0` renders the frame as a single band.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self { workers }
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Renders the whole of `buffer` for the given snapshots.
    ///
    /// Returns once every band has been written. Bands are disjoint slices of
    /// the buffer, so no cell is written twice and no lock is taken.
    pub fn render(
        &self,
        viewport: Viewport,
        config: RenderConfig,
        buffer: &mut PixelBuffer,
    ) -> Result<RenderStats, RenderPassError> {
        let started = Instant::now();
        let frame = buffer.frame();
        let world = viewport.world_rect(frame)?;
        let ranges = partition_rows(frame.height(), self.workers);

        match config.fractal {
            FractalKind::Mandelbrot => {
                let algorithm = MandelbrotAlgorithm::new(config.max_iterations())?;
                render_bands(world, frame, &algorithm, config.colour_mode, &ranges, buffer)?;
            }
            FractalKind::Julia { c } => {
                let algorithm = JuliaAlgorithm::new(c, config.max_iterations())?;
                render_bands(world, frame, &algorithm, config.colour_mode, &ranges, buffer)?;
            }
        }

        let stats = RenderStats {
            bands: ranges.len(),
            duration: started.elapsed(),
        };

        debug!(
            width = frame.width(),
            height = frame.height(),
            bands = stats.bands,
            max_iterations = config.max_iterations(),
            elapsed_ms = stats.duration.as_secs_f64() * 1000.0,
            "render pass complete"
        );

        Ok(stats)
    }
}

fn render_bands<Alg: FractalAlgorithm>(
    world: WorldRect,
    frame: FrameSize,
    algorithm: &Alg,
    colour_mode: ColourMode,
    ranges: &[RowRange],
    buffer: &mut PixelBuffer,
) -> Result<(), RenderPassError> {
    let bands = buffer.bands_mut(ranges)?;

    bands
        .into_par_iter()
        .map(|band| {
            let params = RenderParams {
                world,
                rows: band.rows(),
            };

            render_chunk(&params, frame, algorithm, colour_mode, band)
        })
        .collect::<Result<(), RenderChunkError>>()?;

    Ok(())
}
