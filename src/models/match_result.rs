// file: src/models/match_result.rs
// description: outcome of matching a single query against the index
// reference: Used for query diagnostics

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Best score cleared the threshold; the stored answer is returned.
    Matched,
    /// Best score did not clear the threshold.
    Fallback,
    /// No term model is loaded.
    Unavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub query: String,
    pub outcome: MatchOutcome,

    /// Index of the best scoring record, if any record was scored
    pub best_index: Option<usize>,

    /// Question text of the best scoring record
    pub matched_question: Option<String>,

    /// Cosine similarity of the best scoring record (0.0 when unavailable)
    pub confidence: f32,

    pub response: String,
}

impl MatchResult {
    pub fn unavailable(query: String, response: String) -> Self {
        Self {
            query,
            outcome: MatchOutcome::Unavailable,
            best_index: None,
            matched_question: None,
            confidence: 0.0,
            response,
        }
    }

    pub fn is_match(&self) -> bool {
        self.outcome == MatchOutcome::Matched
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Query: '{}'\nBest Match Key: '{}'\nConfidence: {:.2}\nOutcome: {:?}",
            self.query,
            self.matched_question.as_deref().unwrap_or("-"),
            self.confidence,
            self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_result() {
        let result = MatchResult::unavailable("hi".to_string(), "offline".to_string());
        assert!(!result.is_match());
        assert_eq!(result.best_index, None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_format_summary() {
        let result = MatchResult {
            query: "tulsi".to_string(),
            outcome: MatchOutcome::Matched,
            best_index: Some(0),
            matched_question: Some("What is Tulsi?".to_string()),
            confidence: 0.8734,
            response: "A herb.".to_string(),
        };

        let summary = result.format_summary();
        assert!(summary.contains("What is Tulsi?"));
        assert!(summary.contains("0.87"));
        assert!(summary.contains("Matched"));
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&MatchOutcome::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
    }
}
