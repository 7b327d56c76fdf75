pub mod args;

pub use args::{CliArgs, parse_settings};
