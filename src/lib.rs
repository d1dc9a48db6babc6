// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod batch;
pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod models;
pub mod utils;

pub use batch::{BatchProgress, BatchRunner, BatchStats};
pub use config::{Config, DatasetConfig, IndexerConfig, MatcherConfig};
pub use corpus::{
    CorpusIndex, CorpusIndexer, DatasetLoader, LoadedDataset, SparseVector, TfidfOptions,
    TfidfVectorizer, Tokenizer,
};
pub use error::{AdvisorError, Result};
pub use matcher::{Advisor, AdvisorState, QueryMatcher};
pub use models::{ChatRequest, ChatResponse, MatchOutcome, MatchResult, Record};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, PerformanceMetrics};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _matcher = QueryMatcher::default();
        let _index = CorpusIndex::empty();
    }
}
