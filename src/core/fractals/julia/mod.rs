pub mod algorithm;

pub use algorithm::{DEFAULT_JULIA_C, JuliaAlgorithm};
