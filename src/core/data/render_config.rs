use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::fractals::fractal_kinds::FractalKind;
use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Everything besides the viewport that decides what a render pass draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    max_iterations: u32,
    pub colour_mode: ColourMode,
    pub fractal: FractalKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_mode: ColourMode::default(),
            fractal: FractalKind::default(),
        }
    }
}

impl RenderConfig {
    pub fn new(
        max_iterations: u32,
        colour_mode: ColourMode,
        fractal: FractalKind,
    ) -> Result<Self, RenderConfigError> {
        if max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            colour_mode,
            fractal,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), RenderConfigError> {
        if max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }
}
