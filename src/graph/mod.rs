pub mod config;
pub mod fileio;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod preprocess;
pub mod quartiles;
pub mod summarize;
