pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::frame_loop::{
    DisplaySurface, FrameLoop, FrameLoopError, HudStatus, InputSource, StartupSettings, TickOutcome,
};
pub use crate::core::actions::render_pass::{RenderPassError, RenderScheduler, RenderStats};
pub use crate::core::colour_mapping::ColourMode;
pub use crate::core::data::frame_size::FrameSize;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::navigation::{ControlsSnapshot, ViewportController};
pub use crate::input::cli::parse_settings;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
