// file: src/matcher/similarity.rs
// description: cosine similarity scoring and best-match selection

use crate::corpus::SparseVector;

/// Returns 0.0 when either vector is all-zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

pub fn score_all(query: &SparseVector, documents: &[SparseVector]) -> Vec<f32> {
    documents
        .iter()
        .map(|document| cosine_similarity(query, document))
        .collect()
}

/// Argmax over `scores`; the first occurrence wins on ties.
pub fn select_best(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((index, score)),
        })
}
