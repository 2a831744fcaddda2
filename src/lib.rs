pub mod phones;
pub mod dictionary;
pub mod chart;
pub mod scoring;
pub mod levels;
pub mod puzzle;
pub mod errors;
