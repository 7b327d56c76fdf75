use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum WorldRectError {
    #[error("world rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Region of the complex plane covered by a frame.
///
/// `top` is the imaginary coordinate of pixel row 0; rows grow towards `bottom`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldRect {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl WorldRect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, WorldRectError> {
        let width = right - left;
        let height = bottom - top;

        // Negated comparison so that NaN extents are rejected too.
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(WorldRectError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
