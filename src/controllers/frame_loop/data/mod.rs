pub mod hud_status;
pub mod startup_settings;
