// file: src/batch/runner.rs
// description: evaluates queries in parallel on blocking worker threads
// reference: https://docs.rs/futures

use crate::batch::progress::BatchProgress;
use crate::matcher::Advisor;
use crate::models::MatchResult;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::error;

pub struct BatchRunner {
    advisor: Arc<Advisor>,
    parallel: usize,
}

impl BatchRunner {
    pub fn new(advisor: Arc<Advisor>, parallel: usize) -> Self {
        Self {
            advisor,
            parallel: parallel.max(1),
        }
    }

    /// Results come back in the same order as `queries`.
    pub async fn run(&self, queries: Vec<String>, progress: &BatchProgress) -> Vec<MatchResult> {
        let mut results = stream::iter(queries.into_iter().enumerate().map(|(position, query)| {
            let advisor = Arc::clone(&self.advisor);
            async move {
                let worker_query = query.clone();
                let worker_advisor = Arc::clone(&advisor);
                let result = match tokio::task::spawn_blocking(move || {
                    worker_advisor.evaluate(&worker_query)
                })
                .await
                {
                    Ok(result) => result,
                    Err(e) => {
                        error!("Query worker failed for '{}': {}", query, e);
                        MatchResult::unavailable(
                            query,
                            advisor.config().matcher.unavailable_message.clone(),
                        )
                    }
                };
                progress.record(&result);
                (position, result)
            }
        }))
        .buffer_unordered(self.parallel)
        .collect::<Vec<_>>()
        .await;

        results.sort_by_key(|(position, _)| *position);
        results.into_iter().map(|(_, result)| result).collect()
    }
}
