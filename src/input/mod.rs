//! Input adapters for the explorer.
//!
//! These receive input from the command line and the window system and
//! translate it into startup settings and per-tick control snapshots.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
