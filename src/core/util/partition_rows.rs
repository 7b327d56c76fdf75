use crate::core::data::render_params::RowRange;

/// Splits `[0, height)` into contiguous bands, one per worker.
///
/// Zero workers falls back to a single band, and there are never more bands
/// than rows. The last band absorbs the remainder so every row is covered
/// exactly once.
#[must_use]
pub fn partition_rows(height: u32, workers: usize) -> Vec<RowRange> {
    let workers = u32::try_from(workers).unwrap_or(u32::MAX);
    let bands = workers.clamp(1, height.max(1));
    let band_height = height / bands;

    (0..bands)
        .map(|band| {
            let start = band * band_height;
            let end = if band == bands - 1 {
                height
            } else {
                (band + 1) * band_height
            };

            RowRange::new(start, end)
        })
        .collect()
}
