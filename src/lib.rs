pub mod charts;
pub mod description;
pub mod errors;
pub mod graph;
pub mod render;
pub mod report;

pub use graph::quartiles::GroupSummary;
pub use graph::summarize::{summarize, GroupedSummaries};
