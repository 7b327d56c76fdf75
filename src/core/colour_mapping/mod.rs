pub mod colourize;
pub mod hsv;
pub mod kinds;

pub use colourize::{COLOUR_CYCLE_HUE_SPAN, colourize};
pub use kinds::{ColourMode, ParseColourModeError};
