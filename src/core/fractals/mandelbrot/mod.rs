pub mod algorithm;

pub use algorithm::MandelbrotAlgorithm;
