// file: src/batch/mod.rs
// description: concurrent evaluation of many queries against one index snapshot
// reference: internal module structure

mod progress;
mod runner;

pub use progress::{BatchProgress, BatchStats};
pub use runner::BatchRunner;
