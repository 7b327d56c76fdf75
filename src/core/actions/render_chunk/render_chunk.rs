use crate::core::actions::render_chunk::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colour_mapping::colourize::colourize;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBand;
use crate::core::data::render_params::{RenderParams, RowRange};
use crate::core::util::map_range::map_range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderChunkError {
    #[error(
        "band holds rows {}..{} but the params assign rows {}..{}",
        .band.start, .band.end, .assigned.start, .assigned.end
    )]
    RowsMismatch { band: RowRange, assigned: RowRange },
    #[error("band width {band_width} does not match frame width {frame_width}")]
    WidthMismatch { band_width: u32, frame_width: u32 },
}

/// Renders the rows assigned by `params` into `band`.
///
/// Every pixel is mapped into `params.world` (column `0..=width` spans
/// left to right, row `0..=height` spans top to bottom), evaluated with
/// `algorithm` and coloured with `colour_mode`. Writes never leave the band.
pub fn render_chunk<Alg: FractalAlgorithm>(
    params: &RenderParams,
    frame: FrameSize,
    algorithm: &Alg,
    colour_mode: ColourMode,
    mut band: PixelBand<'_>,
) -> Result<(), RenderChunkError> {
    if band.rows() != params.rows {
        return Err(RenderChunkError::RowsMismatch {
            band: band.rows(),
            assigned: params.rows,
        });
    }

    if band.width() != frame.width() {
        return Err(RenderChunkError::WidthMismatch {
            band_width: band.width(),
            frame_width: frame.width(),
        });
    }

    let world = params.world;
    let width = f64::from(frame.width());
    let height = f64::from(frame.height());
    let max_iterations = algorithm.max_iterations();

    for (row, pixels) in band.rows_mut() {
        let imag = map_range(f64::from(row), 0.0, height, world.top(), world.bottom());

        for (col, pixel) in pixels.iter_mut().enumerate() {
            let real = map_range(col as f64, 0.0, width, world.left(), world.right());
            let iterations = algorithm.escape_count(Complex::new(real, imag));

            *pixel = colourize(iterations, max_iterations, colour_mode);
        }
    }

    Ok(())
}
