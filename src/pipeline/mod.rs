// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod extract;
pub mod progress;

pub use extract::{ExtractPipeline, ExtractReport};
pub use progress::{ProgressTracker, RunStats};
