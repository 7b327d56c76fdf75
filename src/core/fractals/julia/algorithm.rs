use crate::core::actions::render_chunk::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalAlgorithmError;
use crate::core::fractals::escape_time::escape_time;

pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.7, 0.27015);

/// `c` is fixed, the starting point `z0` varies per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    fn escape_count(&self, point: Complex) -> u32 {
        escape_time(point, self.c, self.max_iterations)
    }
}

impl JuliaAlgorithm {
    pub fn new(c: Complex, max_iterations: u32) -> Result<Self, FractalAlgorithmError> {
        if max_iterations == 0 {
            return Err(FractalAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { c, max_iterations })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}
