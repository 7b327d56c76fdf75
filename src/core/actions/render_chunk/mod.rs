pub mod ports;
pub mod render_chunk;

pub use ports::fractal_algorithm::FractalAlgorithm;
pub use render_chunk::{RenderChunkError, render_chunk};
