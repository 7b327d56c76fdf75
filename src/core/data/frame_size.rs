use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FrameSizeError {
    #[error("frame size must be at least 1x1: {width}x{height}")]
    Empty { width: u32, height: u32 },
}

/// Pixel dimensions of the rendered frame. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::Empty { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_new_valid() {
        let size = FrameSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_single_pixel_frame_is_valid() {
        assert!(FrameSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_frame_size_dimensions_must_be_non_zero() {
        assert_eq!(
            FrameSize::new(0, 10),
            Err(FrameSizeError::Empty { width: 0, height: 10 })
        );
        assert_eq!(
            FrameSize::new(10, 0),
            Err(FrameSizeError::Empty { width: 10, height: 0 })
        );
        assert_eq!(
            FrameSize::new(0, 0),
            Err(FrameSizeError::Empty { width: 0, height: 0 })
        );
    }
}
