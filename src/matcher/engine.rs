// file: src/matcher/engine.rs
// description: single-query evaluation with thresholding and fallback
// reference: cosine similarity ranking over tf-idf vectors

use crate::config::MatcherConfig;
use crate::corpus::CorpusIndex;
use crate::matcher::similarity::{score_all, select_best};
use crate::models::{MatchOutcome, MatchResult};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct QueryMatcher {
    config: MatcherConfig,
}

impl QueryMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Strictly greater than the threshold.
    pub fn accepts(&self, score: f32) -> bool {
        score > self.config.threshold
    }

    pub fn respond(&self, index: &CorpusIndex, query: &str) -> String {
        self.evaluate(index, query).response
    }

    pub fn evaluate(&self, index: &CorpusIndex, query: &str) -> MatchResult {
        let Some(vectorizer) = index.vectorizer() else {
            warn!("Query received while term model is unavailable");
            return MatchResult::unavailable(
                query.to_string(),
                self.config.unavailable_message.clone(),
            );
        };

        let cleaned = query.trim();
        let query_vector = vectorizer.transform(cleaned);
        let scores = score_all(&query_vector, index.vectors());

        self.resolve(index, cleaned, &scores)
    }

    /// Picks the answer for precomputed `scores`, one per indexed record.
    pub fn resolve(&self, index: &CorpusIndex, query: &str, scores: &[f32]) -> MatchResult {
        let best = select_best(scores);
        let matched_question = best
            .and_then(|(i, _)| index.question(i))
            .map(str::to_string);
        let confidence = best.map(|(_, score)| score).unwrap_or(0.0);

        debug!(
            query = %query,
            matched = matched_question.as_deref().unwrap_or("-"),
            confidence,
            "Best match"
        );

        let answer = match best {
            Some((i, score)) if self.accepts(score) => index.answer(i),
            _ => None,
        };

        let (outcome, response) = match answer {
            Some(answer) => (MatchOutcome::Matched, answer.to_string()),
            None => (MatchOutcome::Fallback, self.config.fallback_message.clone()),
        };

        MatchResult {
            query: query.to_string(),
            outcome,
            best_index: best.map(|(i, _)| i),
            matched_question,
            confidence,
            response,
        }
    }
}

impl Default for QueryMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
