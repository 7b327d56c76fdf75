pub mod colour;
pub mod complex;
pub mod frame_size;
pub mod pixel_buffer;
pub mod render_config;
pub mod render_params;
pub mod viewport;
pub mod world_rect;
