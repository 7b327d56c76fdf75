use tracing::{debug, info, warn};

use crate::core::data::frame_size::FrameSize;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::controls::ControlsSnapshot;
use crate::core::navigation::limits::NavigationLimits;

/// Owns the view state and turns input snapshots into view changes.
///
/// Every mutation of the viewport or render config goes through here, which
/// keeps the viewport resolvable for the current frame (positive finite zoom,
/// distinct points for neighbouring pixels) and `max_iterations` at or above
/// the configured floor.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    default_viewport: Viewport,
    frame: FrameSize,
    config: RenderConfig,
    hud_visible: bool,
    limits: NavigationLimits,
}

impl ViewportController {
    /// Starts on the default fit for `frame`.
    #[must_use]
    pub fn new(frame: FrameSize, config: RenderConfig, hud_visible: bool) -> Self {
        Self::with_limits(frame, config, hud_visible, NavigationLimits::default())
    }

    #[must_use]
    pub fn with_limits(
        frame: FrameSize,
        config: RenderConfig,
        hud_visible: bool,
        limits: NavigationLimits,
    ) -> Self {
        let default_viewport = Viewport::fit(frame);

        Self {
            viewport: default_viewport,
            default_viewport,
            frame,
            config,
            hud_visible,
            limits,
        }
    }

    /// Applies one tick of input. Returns `true` when the image needs to be
    /// rendered again.
    pub fn apply(&mut self, controls: &ControlsSnapshot) -> bool {
        let mut dirty = false;

        if controls.is_panning() {
            dirty |= self.pan(controls);
        }

        if controls.wheel != 0.0 {
            dirty |= self.zoom_by_wheel(controls.wheel);
        }

        if controls.reset {
            self.viewport = self.default_viewport;
            debug!("viewport reset");
            dirty = true;
        }

        if controls.iterations_up || controls.iterations_down {
            self.adjust_iterations(controls.iterations_up, controls.iterations_down);
            dirty = true;
        }

        if controls.cycle_colour {
            self.config.colour_mode = self.config.colour_mode.next();
            debug!(colour_mode = %self.config.colour_mode, "colour mode changed");
            dirty = true;
        }

        if controls.toggle_hud {
            self.hud_visible = !self.hud_visible;
        }

        dirty
    }

    /// Adopts a new window size. Zero dimensions are ignored.
    ///
    /// The current centre and zoom are kept; only the view that reset returns
    /// to is refitted. Returns `true` when the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let Ok(frame) = FrameSize::new(width, height) else {
            debug!(width, height, "ignoring resize to an empty frame");
            return false;
        };

        if frame == self.frame {
            return false;
        }

        self.frame = frame;
        self.default_viewport = Viewport::fit(frame);
        info!(width, height, "frame resized");

        true
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn default_viewport(&self) -> Viewport {
        self.default_viewport
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame
    }

    #[must_use]
    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    #[must_use]
    pub fn limits(&self) -> &NavigationLimits {
        &self.limits
    }

    /// Zoom relative to the default fit for the current frame.
    #[must_use]
    pub fn magnification(&self) -> f32 {
        self.viewport.zoom / self.default_viewport.zoom
    }

    #[cfg(test)]
    pub(crate) fn set_viewport_unchecked(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn pan(&mut self, controls: &ControlsSnapshot) -> bool {
        let step = self.limits.pan_step(self.viewport.zoom);
        let mut moved = self.viewport;

        if controls.up {
            moved.center_y -= step;
        }
        if controls.down {
            moved.center_y += step;
        }
        if controls.left {
            moved.center_x -= step;
        }
        if controls.right {
            moved.center_x += step;
        }

        if !moved.is_resolvable(self.frame) {
            debug!(
                center_x = moved.center_x,
                center_y = moved.center_y,
                zoom = moved.zoom,
                "ignoring pan past the representable range"
            );
            return false;
        }

        self.viewport = moved;
        true
    }

    fn zoom_by_wheel(&mut self, wheel: f32) -> bool {
        if !wheel.is_finite() {
            warn!(wheel, "ignoring non-finite wheel input");
            return false;
        }

        let zoomed = Viewport {
            zoom: self.viewport.zoom * self.limits.zoom_factor(wheel),
            ..self.viewport
        };

        if !(zoomed.zoom > 0.0) || !zoomed.is_resolvable(self.frame) {
            warn!(
                wheel,
                current = self.viewport.zoom,
                rejected = zoomed.zoom,
                "ignoring zoom that would leave the valid range"
            );
            return false;
        }

        self.viewport = zoomed;
        true
    }

    fn adjust_iterations(&mut self, up: bool, down: bool) {
        let floor = self.limits.min_iterations.max(1);
        let mut max_iterations = self.config.max_iterations();

        if up {
            max_iterations = max_iterations.saturating_add(1);
        }
        if down {
            max_iterations = max_iterations.saturating_sub(1).max(floor);
        }

        if let Err(err) = self.config.set_max_iterations(max_iterations) {
            warn!(max_iterations, %err, "ignoring iteration change");
            return;
        }

        debug!(max_iterations, "iteration limit changed");
    }
}
