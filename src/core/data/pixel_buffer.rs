use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::render_params::RowRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("rows {}..{} fall outside a frame of height {height}", .rows.start, .rows.end)]
    RowsOutOfBounds { rows: RowRange, height: u32 },
    #[error("rows {}..{} overlap or precede the previous band ending at {previous_end}", .rows.start, .rows.end)]
    RowsOverlap { rows: RowRange, previous_end: u32 },
}

/// Row-major frame of colours, `width × height` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    frame: FrameSize,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(frame: FrameSize) -> Self {
        Self {
            frame,
            pixels: vec![Colour::BLACK; frame.pixel_count()],
        }
    }

    #[must_use]
    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, row: u32, col: u32) -> Option<Colour> {
        if row >= self.frame.height() || col >= self.frame.width() {
            return None;
        }

        let index = row as usize * self.frame.width() as usize + col as usize;
        self.pixels.get(index).copied()
    }

    /// Reallocates the buffer for a new frame size. Contents are reset to black.
    pub fn resize(&mut self, frame: FrameSize) {
        if frame == self.frame {
            return;
        }

        self.frame = frame;
        self.pixels.clear();
        self.pixels.resize(frame.pixel_count(), Colour::BLACK);
    }

    /// Splits the buffer into one mutable band per row range.
    ///
    /// Ranges must be ascending and must not overlap, so each cell ends up
    /// owned by at most one band. Rows not covered by any range are left
    /// untouched.
    pub fn bands_mut(&mut self, ranges: &[RowRange]) -> Result<Vec<PixelBand<'_>>, PixelBufferError> {
        let width = self.frame.width();
        let height = self.frame.height();
        let row_len = width as usize;

        let mut rest: &mut [Colour] = &mut self.pixels;
        let mut previous_end = 0;
        let mut bands = Vec::with_capacity(ranges.len());

        for &rows in ranges {
            if rows.start > rows.end || rows.end > height {
                return Err(PixelBufferError::RowsOutOfBounds { rows, height });
            }
            if rows.start < previous_end {
                return Err(PixelBufferError::RowsOverlap { rows, previous_end });
            }

            let skipped = (rows.start - previous_end) as usize * row_len;
            let taken = rows.len() as usize * row_len;

            let (_, tail) = std::mem::take(&mut rest).split_at_mut(skipped);
            let (pixels, tail) = tail.split_at_mut(taken);

            bands.push(PixelBand {
                rows,
                width,
                pixels,
            });

            rest = tail;
            previous_end = rows.end;
        }

        Ok(bands)
    }
}

/// Exclusive view of a contiguous band of rows inside a [`PixelBuffer`].
#[derive(Debug)]
pub struct PixelBand<'a> {
    rows: RowRange,
    width: u32,
    pixels: &'a mut [Colour],
}

impl PixelBand<'_> {
    #[must_use]
    pub fn rows(&self) -> RowRange {
        self.rows
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Yields `(absolute_row, row_pixels)` for every row in the band.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [Colour])> {
        self.rows
            .rows()
            .zip(self.pixels.chunks_exact_mut(self.width as usize))
    }
}
