use crate::core::data::complex::Complex;

/// Squared escape radius. An orbit has escaped once `|z|²` exceeds it;
/// landing exactly on the bound does not count as escaping.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z0` and returns how many steps were taken
/// before `|z|²` exceeded [`ESCAPE_RADIUS_SQUARED`].
///
/// The bound is checked before every step, so a starting point that is
/// already outside returns `0`. A result equal to `max_iterations` means the
/// orbit never escaped.
#[inline]
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut zx = z0.real;
    let mut zy = z0.imag;
    let mut zx2 = zx * zx;
    let mut zy2 = zy * zy;
    let mut iteration = 0;

    while iteration < max_iterations && zx2 + zy2 <= ESCAPE_RADIUS_SQUARED {
        zy = 2.0 * zx * zy + c.imag;
        zx = zx2 - zy2 + c.real;
        zx2 = zx * zx;
        zy2 = zy * zy;
        iteration += 1;
    }

    iteration
}
