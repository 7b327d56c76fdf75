//! Windowed front end.
//!
//! winit for the window and input, pixels for the framebuffer and egui for
//! the HUD overlay.

pub mod app;
pub mod hud;
pub mod keyboard;

pub use app::{GuiError, run_gui};
