use std::time::Duration;

use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::render_config::{DEFAULT_MAX_ITERATIONS, RenderConfig, RenderConfigError};
use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_FPS: u32 = 60;

/// Session configuration fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartupSettings {
    pub colour_mode: ColourMode,
    pub max_iterations: u32,
    pub hud_visible: bool,
    pub fps: u32,
    pub fractal: FractalKind,
    /// Re-render at the new size when the window changes. When off, the image
    /// is stretched to fit and the render resolution stays fixed.
    pub resize_aware: bool,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            colour_mode: ColourMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            hud_visible: true,
            fps: DEFAULT_FPS,
            fractal: FractalKind::default(),
            resize_aware: true,
        }
    }
}

impl StartupSettings {
    pub fn render_config(&self) -> Result<RenderConfig, RenderConfigError> {
        RenderConfig::new(self.max_iterations, self.colour_mode, self.fractal)
    }

    /// Target time between ticks. A zero rate falls back to the default.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        let fps = if self.fps == 0 { DEFAULT_FPS } else { self.fps };

        Duration::from_secs(1) / fps
    }
}
