pub mod surface;

pub use surface::{PixelsSurface, SurfaceError};
