// file: src/batch/progress.rs
// description: progress tracking and outcome counts for batch evaluation
// reference: uses indicatif for progress bars

use crate::models::{MatchOutcome, MatchResult};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub matched: usize,
    pub fallback: usize,
    pub unavailable: usize,
    pub duration_secs: f64,
}

impl BatchStats {
    pub fn total(&self) -> usize {
        self.matched + self.fallback + self.unavailable
    }

    pub fn match_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.matched as f64 / total as f64) * 100.0
    }

    pub fn queries_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.total() as f64 / self.duration_secs
    }
}

pub struct BatchProgress {
    bar: ProgressBar,
    matched: AtomicUsize,
    fallback: AtomicUsize,
    unavailable: AtomicUsize,
    start_time: Instant,
}

impl BatchProgress {
    pub fn new(total_queries: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_queries as u64);
        bar.set_style(create_style(colored));
        Self::with_bar(bar)
    }

    pub fn hidden(total_queries: usize) -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(total_queries as u64),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            matched: AtomicUsize::new(0),
            fallback: AtomicUsize::new(0),
            unavailable: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, result: &MatchResult) {
        let counter = match result.outcome {
            MatchOutcome::Matched => &self.matched,
            MatchOutcome::Fallback => &self.fallback,
            MatchOutcome::Unavailable => &self.unavailable,
        };
        counter.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
        self.bar.set_message(format!(
            "matched: {} | fallback: {}",
            self.matched.load(Ordering::SeqCst),
            self.fallback.load(Ordering::SeqCst)
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> BatchStats {
        BatchStats {
            matched: self.matched.load(Ordering::SeqCst),
            fallback: self.fallback.load(Ordering::SeqCst),
            unavailable: self.unavailable.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_style(colored: bool) -> ProgressStyle {
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: MatchOutcome) -> MatchResult {
        MatchResult {
            query: "q".to_string(),
            outcome,
            best_index: None,
            matched_question: None,
            confidence: 0.0,
            response: "r".to_string(),
        }
    }

    #[test]
    fn test_batch_stats_calculations() {
        let stats = BatchStats {
            matched: 9,
            fallback: 1,
            unavailable: 0,
            duration_secs: 2.0,
        };
        assert_eq!(stats.total(), 10);
        assert_eq!(stats.match_rate(), 90.0);
        assert_eq!(stats.queries_per_second(), 5.0);
    }

    #[test]
    fn test_batch_stats_empty() {
        let stats = BatchStats::default();
        assert_eq!(stats.match_rate(), 0.0);
        assert_eq!(stats.queries_per_second(), 0.0);
    }

    #[test]
    fn test_progress_counts_outcomes() {
        let progress = BatchProgress::hidden(3);
        progress.record(&result(MatchOutcome::Matched));
        progress.record(&result(MatchOutcome::Fallback));
        progress.record(&result(MatchOutcome::Matched));

        let stats = progress.get_stats();
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.fallback, 1);
        assert_eq!(stats.unavailable, 0);
    }
}
