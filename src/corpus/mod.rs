// file: src/corpus/mod.rs
// description: corpus loading, tokenization and tf-idf indexing
// reference: internal module structure

pub mod index;
pub mod loader;
pub mod sparse;
pub mod tokenizer;
pub mod vectorizer;

pub use index::{CorpusIndex, CorpusIndexer};
pub use loader::{DatasetLoader, LoadedDataset};
pub use sparse::SparseVector;
pub use tokenizer::Tokenizer;
pub use vectorizer::{TfidfOptions, TfidfVectorizer};
