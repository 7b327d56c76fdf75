pub mod controls;
pub mod limits;
pub mod viewport_controller;

pub use controls::ControlsSnapshot;
pub use limits::NavigationLimits;
pub use viewport_controller::ViewportController;
