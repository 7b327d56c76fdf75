use crate::core::actions::render_chunk::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalAlgorithmError;
use crate::core::fractals::escape_time::escape_time;

/// `z0 = 0`, `c` varies per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    fn escape_count(&self, point: Complex) -> u32 {
        escape_time(Complex::ZERO, point, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalAlgorithmError> {
        if max_iterations == 0 {
            return Err(FractalAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
