// file: src/models/record.rs
// description: knowledge base question/answer record
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Question text repeated `question_weight` times, then the answer,
    /// joined by single spaces.
    pub fn composite_text(&self, question_weight: usize) -> String {
        let mut parts = Vec::with_capacity(question_weight + 1);
        parts.extend(std::iter::repeat_n(self.question.as_str(), question_weight));
        parts.push(self.answer.as_str());
        parts.join(" ")
    }
}
