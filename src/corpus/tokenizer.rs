// file: src/corpus/tokenizer.rs
// description: unicode-aware word tokenizer with n-gram expansion
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode `\w` covers combining marks, so Devanagari words stay whole.
    pub static ref WORD_TOKEN: Regex = Regex::new(r"\b\w+\b").expect("WORD_TOKEN regex is valid");
}

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    lowercase: bool,
}

impl Tokenizer {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if self.lowercase {
            let lowered = text.to_lowercase();
            Self::split_words(&lowered)
        } else {
            Self::split_words(text)
        }
    }

    fn split_words(text: &str) -> Vec<String> {
        WORD_TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Expands tokens into every n-gram with `min_n <= n <= max_n`,
    /// shorter grams first, each group in text order.
    pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
        let min_n = min_n.max(1);
        let max_n = max_n.min(tokens.len());
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }

        terms
    }

    pub fn analyze(&self, text: &str, min_n: usize, max_n: usize) -> Vec<String> {
        Self::ngrams(&self.tokenize(text), min_n, max_n)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokenizer = Tokenizer::new(false);
        assert_eq!(
            tokenizer.tokenize("What is Tulsi good for? (Answer in English)"),
            vec!["What", "is", "Tulsi", "good", "for", "Answer", "in", "English"]
        );
    }

    #[test]
    fn test_tokenize_devanagari() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("तुलसी के फायदे? (Answer in Hindi)"),
            vec!["तुलसी", "के", "फायदे", "answer", "in", "hindi"]
        );
    }

    #[test]
    fn test_lowercase_option() {
        assert_eq!(Tokenizer::new(true).tokenize("Yoga"), vec!["yoga"]);
        assert_eq!(Tokenizer::new(false).tokenize("Yoga"), vec!["Yoga"]);
    }

    #[test]
    fn test_ngrams_order() {
        let tokens: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            Tokenizer::ngrams(&tokens, 1, 3),
            vec!["a", "b", "c", "a b", "b c", "a b c"]
        );
    }

    #[test]
    fn test_ngrams_longer_than_input() {
        let tokens = vec!["solo".to_string()];
        assert_eq!(Tokenizer::ngrams(&tokens, 1, 3), vec!["solo"]);
        assert!(Tokenizer::ngrams(&[], 1, 3).is_empty());
    }
}
