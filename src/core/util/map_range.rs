/// Linearly maps `value` from `[pixel_min, pixel_max]` onto `[world_min, world_max]`.
///
/// `pixel_max` must differ from `pixel_min`; the mapping is affine, so values
/// outside the source range extrapolate rather than clamp.
#[inline]
#[must_use]
pub fn map_range(value: f64, pixel_min: f64, pixel_max: f64, world_min: f64, world_max: f64) -> f64 {
    world_min + (value - pixel_min) * (world_max - world_min) / (pixel_max - pixel_min)
}
