use crate::core::data::complex::Complex;

/// Escape-time recurrence evaluated for one point of the complex plane.
pub trait FractalAlgorithm: Sync {
    fn max_iterations(&self) -> u32;

    /// Steps taken before the orbit of `point` escaped, in `[0, max_iterations]`.
    fn escape_count(&self, point: Complex) -> u32;
}
