use std::time::Duration;

use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const KEY_HELP: &[&str] = &[
    "W/A/S/D - move",
    "Wheel - zoom",
    "R - reset view",
    "C - cycle colors",
    "H - toggle hud",
    "I - increase iter by one",
    "U - decrease iter by one",
];

/// Read-only scalars the overlay draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStatus {
    pub zoom: f32,
    pub magnification: f32,
    pub max_iterations: u32,
    pub colour_mode: ColourMode,
    pub fractal: FractalKind,
    pub last_render: Option<Duration>,
}

impl HudStatus {
    #[must_use]
    pub fn zoom_line(&self) -> String {
        format!("Zoom: {:.1}", self.magnification)
    }

    #[must_use]
    pub fn iterations_line(&self) -> String {
        format!("Iter: {}", self.max_iterations)
    }

    #[must_use]
    pub fn render_time_line(&self) -> Option<String> {
        self.last_render
            .map(|duration| format!("Render: {:.1} ms", duration.as_secs_f64() * 1000.0))
    }

    /// Every line the overlay shows, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.zoom_line(),
            self.iterations_line(),
            format!("Colors: {}", self.colour_mode),
            format!("Set: {}", self.fractal),
        ];
        lines.extend(self.render_time_line());
        lines.extend(KEY_HELP.iter().map(|line| (*line).to_owned()));

        lines
    }
}
