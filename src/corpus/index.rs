// file: src/corpus/index.rs
// description: immutable similarity index built once from the dataset
// reference: internal data structures

use crate::config::{IndexerConfig, MAX_QUESTION_WEIGHT};
use crate::corpus::loader::DatasetLoader;
use crate::corpus::sparse::SparseVector;
use crate::corpus::vectorizer::{TfidfOptions, TfidfVectorizer};
use crate::models::Record;
use crate::utils::OperationTimer;
use std::path::Path;
use tracing::{error, info, warn};

/// Records, their composite documents and document vectors, index aligned.
/// An index without a term model is the degraded "unavailable" state.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    records: Vec<Record>,
    documents: Vec<String>,
    vectors: Vec<SparseVector>,
    vectorizer: Option<TfidfVectorizer>,
    content_hash: Option<String>,
    skipped: usize,
}

impl CorpusIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.vectorizer.is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn vectorizer(&self) -> Option<&TfidfVectorizer> {
        self.vectorizer.as_ref()
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(|r| r.answer.as_str())
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(|r| r.question.as_str())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer
            .as_ref()
            .map(TfidfVectorizer::vocabulary_size)
            .unwrap_or(0)
    }

    pub fn content_hash(&self) -> Option<&str> {
        self.content_hash.as_deref()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

pub struct CorpusIndexer {
    config: IndexerConfig,
}

impl CorpusIndexer {
    pub fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    /// Loads and indexes the dataset at `path`. Never fails: a missing or
    /// malformed dataset is logged and yields an empty index.
    pub fn index_path(&self, path: &Path) -> CorpusIndex {
        match DatasetLoader::load(path) {
            Ok(dataset) => {
                let mut index = self.build(dataset.records);
                index.content_hash = Some(dataset.content_hash);
                index.skipped = dataset.skipped;
                index
            }
            Err(e) => {
                error!("{}", e);
                CorpusIndex::empty()
            }
        }
    }

    pub fn build(&self, records: Vec<Record>) -> CorpusIndex {
        if records.is_empty() {
            warn!("Dataset is empty, matcher will be unavailable");
            return CorpusIndex::empty();
        }

        let timer = OperationTimer::new("corpus indexing");

        let question_weight = self.question_weight();
        let documents: Vec<String> = records
            .iter()
            .map(|record| record.composite_text(question_weight))
            .collect();

        let vectorizer = match TfidfVectorizer::fit(&documents, TfidfOptions::from(&self.config)) {
            Ok(vectorizer) => vectorizer,
            Err(e) => {
                error!("Failed to fit term model: {}", e);
                return CorpusIndex::empty();
            }
        };

        let vectors = vectorizer.transform_all(&documents);

        info!(
            "Indexed {} records with {} vocabulary terms",
            records.len(),
            vectorizer.vocabulary_size()
        );
        timer.finish_with_count(records.len());

        CorpusIndex {
            records,
            documents,
            vectors,
            vectorizer: Some(vectorizer),
            content_hash: None,
            skipped: 0,
        }
    }
}

impl CorpusIndexer {
    // Configs built in code skip `Config::validate`, so clamp here as well.
    fn question_weight(&self) -> usize {
        let weight = self.config.question_weight;
        let clamped = weight.clamp(1, MAX_QUESTION_WEIGHT);
        if clamped != weight {
            warn!("question_weight {} out of range, using {}", weight, clamped);
        }
        clamped
    }
}

impl Default for CorpusIndexer {
    fn default() -> Self {
        Self::new(IndexerConfig::default())
    }
}
