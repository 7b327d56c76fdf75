pub mod data;
pub mod errors;
pub mod frame_loop;
pub mod ports;

pub use data::hud_status::HudStatus;
pub use data::startup_settings::StartupSettings;
pub use errors::FrameLoopError;
pub use frame_loop::{FrameLoop, TickOutcome};
pub use ports::{DisplaySurface, InputSource};
