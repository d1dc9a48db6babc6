// file: src/corpus/vectorizer.rs
// description: term-frequency / inverse-document-frequency model over word n-grams
// reference: smoothed idf with l2-normalised rows

use crate::config::IndexerConfig;
use crate::corpus::sparse::SparseVector;
use crate::corpus::tokenizer::Tokenizer;
use crate::error::{AdvisorError, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfOptions {
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub lowercase: bool,
}

impl Default for TfidfOptions {
    fn default() -> Self {
        Self {
            ngram_min: 1,
            ngram_max: 3,
            lowercase: true,
        }
    }
}

impl From<&IndexerConfig> for TfidfOptions {
    fn from(config: &IndexerConfig) -> Self {
        Self {
            ngram_min: config.ngram_min,
            ngram_max: config.ngram_max,
            lowercase: config.lowercase,
        }
    }
}

/// Fitted model. Immutable once built; refit from scratch to change it.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    options: TfidfOptions,
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S], options: TfidfOptions) -> Result<Self> {
        let tokenizer = Tokenizer::new(options.lowercase);
        let n_docs = documents.len();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let terms: HashSet<String> = tokenizer
                .analyze(document.as_ref(), options.ngram_min, options.ngram_max)
                .into_iter()
                .collect();
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(AdvisorError::Validation(
                "empty vocabulary; documents contain no word tokens".to_string(),
            ));
        }

        // BTreeMap iteration is sorted, so column order is deterministic.
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(Self::smooth_idf(n_docs, df));
            vocabulary.insert(term, column);
        }

        debug!(
            "Fitted tf-idf model: {} documents, {} terms",
            n_docs,
            vocabulary.len()
        );

        Ok(Self {
            options,
            tokenizer,
            vocabulary,
            idf,
        })
    }

    fn smooth_idf(n_docs: usize, df: usize) -> f32 {
        (((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0) as f32
    }

    /// Terms outside the fitted vocabulary are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in self
            .tokenizer
            .analyze(text, self.options.ngram_min, self.options.ngram_max)
        {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let weighted = counts
            .into_iter()
            .map(|(column, tf)| (column, tf * self.idf[column]))
            .collect();

        SparseVector::from_unsorted(weighted).normalized()
    }

    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents
            .iter()
            .map(|document| self.transform(document.as_ref()))
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.column(term).map(|column| self.idf[column])
    }

    pub fn options(&self) -> TfidfOptions {
        self.options
    }
}
