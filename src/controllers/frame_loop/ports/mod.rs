pub mod display_surface;
pub mod input_source;

pub use display_surface::DisplaySurface;
pub use input_source::InputSource;
