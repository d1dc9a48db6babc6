// file: src/matcher/mod.rs
// description: query matching against the fitted corpus index
// reference: internal module structure

pub mod advisor;
pub mod engine;
pub mod similarity;

pub use advisor::{Advisor, AdvisorState};
pub use engine::QueryMatcher;
pub use similarity::{cosine_similarity, score_all, select_best};
