use crate::core::data::world_rect::WorldRect;

/// Half-open range of image rows `[start, end)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "row range {start}..{end} is reversed");
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }
}

/// The work unit handed to one chunk render: the world rectangle of the
/// whole frame plus the band of rows this invocation owns.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub world: WorldRect,
    pub rows: RowRange,
}
