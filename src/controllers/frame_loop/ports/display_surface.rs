use crate::controllers::frame_loop::data::hud_status::HudStatus;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Where finished frames go.
///
/// `upload` is only called after a render pass; `present` is called on every
/// tick so the overlay stays live while the image is reused.
pub trait DisplaySurface {
    type Error: std::error::Error + 'static;

    fn upload(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error>;

    fn present(&mut self, hud: Option<&HudStatus>) -> Result<(), Self::Error>;
}
