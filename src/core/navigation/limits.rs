#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Pan distance per tick in screen pixels; converted to world units by
    /// dividing by the zoom.
    pub base_speed: f64,
    /// Fractional zoom change per wheel notch.
    pub zoom_step: f32,
    /// Lower bound on the zoom factor of one tick, so a fast zoom-out still
    /// shrinks the zoom instead of flipping its sign.
    pub min_zoom_factor: f32,
    pub min_iterations: u32,
}

impl NavigationLimits {
    /// World units moved per pan tick at `zoom`.
    #[must_use]
    pub fn pan_step(&self, zoom: f32) -> f64 {
        self.base_speed * (-f64::from(zoom).log2()).exp2()
    }

    /// Zoom multiplier for `wheel` notches.
    #[must_use]
    pub fn zoom_factor(&self, wheel: f32) -> f32 {
        (1.0 + wheel * self.zoom_step).max(self.min_zoom_factor)
    }
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            zoom_step: 0.1,
            min_zoom_factor: 0.1,
            min_iterations: 1,
        }
    }
}
