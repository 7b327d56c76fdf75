use crate::core::data::frame_size::FrameSize;
use crate::core::data::world_rect::{WorldRect, WorldRectError};

/// World-space extent that the startup view fits into the window.
pub const SET_WIDTH: f64 = 3.0;
pub const SET_HEIGHT: f64 = 3.0;
pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;

/// Smallest distance between neighbouring pixels, in units in the last place
/// of the largest visible coordinate.
pub const MIN_PIXEL_PITCH_ULPS: f64 = 4.0;

/// Visible window into the complex plane: a center point and a zoom factor
/// in pixels per world unit.
///
/// `zoom` is kept strictly positive by the code that mutates it
/// (see [`ViewportController`](crate::core::navigation::ViewportController)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f32,
}

impl Viewport {
    /// The startup view: the whole set fitted into `frame`, centred on the
    /// main cardioid.
    #[must_use]
    pub fn fit(frame: FrameSize) -> Self {
        let zoom_x = f64::from(frame.width()) / SET_WIDTH;
        let zoom_y = f64::from(frame.height()) / SET_HEIGHT;

        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            zoom: zoom_x.min(zoom_y) as f32,
        }
    }

    pub fn world_rect(&self, frame: FrameSize) -> Result<WorldRect, WorldRectError> {
        let zoom = f64::from(self.zoom);
        let half_width = f64::from(frame.width()) / (2.0 * zoom);
        let half_height = f64::from(frame.height()) / (2.0 * zoom);

        WorldRect::new(
            self.center_x - half_width,
            self.center_x + half_width,
            self.center_y - half_height,
            self.center_y + half_height,
        )
    }

    /// Whether `frame` can be rendered from this view with every pixel
    /// mapping to a distinct point of the plane.
    #[must_use]
    pub fn is_resolvable(&self, frame: FrameSize) -> bool {
        let Ok(rect) = self.world_rect(frame) else {
            return false;
        };

        let extent = rect
            .left()
            .abs()
            .max(rect.right().abs())
            .max(rect.top().abs())
            .max(rect.bottom().abs());
        let pitch = rect.width() / f64::from(frame.width());

        pitch > extent * f64::EPSILON * MIN_PIXEL_PITCH_ULPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_smaller_axis_zoom() {
        let viewport = Viewport::fit(FrameSize::new(800, 600).unwrap());

        assert_eq!(viewport.center_x, -0.5);
        assert_eq!(viewport.center_y, 0.0);
        assert_eq!(viewport.zoom, 200.0);
    }

    #[test]
    fn test_fit_covers_whole_set() {
        let frame = FrameSize::new(300, 900).unwrap();
        let rect = Viewport::fit(frame).world_rect(frame).unwrap();

        assert!(rect.width() >= SET_WIDTH - 1e-9);
        assert!(rect.height() >= SET_HEIGHT - 1e-9);
    }

    #[test]
    fn test_world_rect_is_centred_on_viewport() {
        let frame = FrameSize::new(800, 600).unwrap();
        let viewport = Viewport {
            center_x: 1.0,
            center_y: -2.0,
            zoom: 100.0,
        };

        let rect = viewport.world_rect(frame).unwrap();

        assert_eq!(rect.left(), -3.0);
        assert_eq!(rect.right(), 5.0);
        assert_eq!(rect.top(), -5.0);
        assert_eq!(rect.bottom(), 1.0);
    }

    #[test]
    fn test_world_rect_fails_for_degenerate_zoom() {
        let frame = FrameSize::new(10, 10).unwrap();
        let viewport = Viewport {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 0.0,
        };

        assert!(viewport.world_rect(frame).is_err());
        assert!(!viewport.is_resolvable(frame));
    }

    #[test]
    fn test_default_fit_is_resolvable() {
        let frame = FrameSize::new(800, 600).unwrap();

        assert!(Viewport::fit(frame).is_resolvable(frame));
    }

    #[test]
    fn test_pixels_collapsing_onto_one_point_are_unresolvable() {
        let frame = FrameSize::new(8, 6).unwrap();
        let deep = Viewport {
            center_x: -0.5,
            center_y: 0.0,
            zoom: 1.0e17,
        };
        let far = Viewport {
            center_x: 1.0e12,
            center_y: 0.0,
            zoom: 1.0e5,
        };

        assert!(!deep.is_resolvable(frame));
        assert!(!far.is_resolvable(frame));
        assert!(Viewport { zoom: 1.0e12, ..deep }.is_resolvable(frame));
    }

    #[test]
    fn test_non_finite_centre_is_unresolvable() {
        let frame = FrameSize::new(8, 6).unwrap();
        let viewport = Viewport {
            center_x: f64::INFINITY,
            center_y: 0.0,
            zoom: 1.0,
        };

        assert!(!viewport.is_resolvable(frame));
    }
}
