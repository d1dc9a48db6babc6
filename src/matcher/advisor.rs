// file: src/matcher/advisor.rs
// description: shared, atomically reloadable handle over the corpus index
// reference: read-mostly shared state behind Arc

use crate::config::Config;
use crate::corpus::{CorpusIndex, CorpusIndexer};
use crate::matcher::engine::QueryMatcher;
use crate::models::{ChatRequest, ChatResponse, MatchResult, Record};
use crate::utils::{HealthCheck, HealthReport};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisorState {
    Uninitialized,
    Ready,
    Unavailable,
}

/// Answers queries against an immutable index snapshot. Reloading builds a
/// new snapshot off to the side and swaps it in; queries already running
/// keep the snapshot they started with.
pub struct Advisor {
    config: Config,
    indexer: CorpusIndexer,
    matcher: QueryMatcher,
    snapshot: RwLock<Option<Arc<CorpusIndex>>>,
    reload_lock: Mutex<()>,
}

impl Advisor {
    pub fn new(config: Config) -> Self {
        Self {
            indexer: CorpusIndexer::new(config.indexer.clone()),
            matcher: QueryMatcher::new(config.matcher.clone()),
            config,
            snapshot: RwLock::new(None),
            reload_lock: Mutex::new(()),
        }
    }

    /// Creates an advisor and indexes the configured dataset.
    pub fn load(config: Config) -> Self {
        let advisor = Self::new(config);
        advisor.reload();
        advisor
    }

    pub fn from_records(config: Config, records: Vec<Record>) -> Self {
        let advisor = Self::new(config);
        advisor.reload_from_records(records);
        advisor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reload(&self) -> AdvisorState {
        let _writer = self.reload_lock.lock().unwrap_or_else(|e| e.into_inner());
        info!("Indexing dataset {}", self.config.dataset.path.display());
        let index = self.indexer.index_path(&self.config.dataset.path);
        self.install(index)
    }

    pub fn reload_from_records(&self, records: Vec<Record>) -> AdvisorState {
        let _writer = self.reload_lock.lock().unwrap_or_else(|e| e.into_inner());
        let index = self.indexer.build(records);
        self.install(index)
    }

    fn install(&self, index: CorpusIndex) -> AdvisorState {
        let state = Self::state_of(Some(&index));
        if state == AdvisorState::Unavailable {
            warn!("Advisor is unavailable: no usable records were indexed");
        } else {
            info!("Advisor ready with {} records", index.len());
        }

        let mut slot = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::new(index));
        state
    }

    /// Current index snapshot; `None` before the first load.
    pub fn snapshot(&self) -> Option<Arc<CorpusIndex>> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn state(&self) -> AdvisorState {
        Self::state_of(self.snapshot().as_deref())
    }

    fn state_of(index: Option<&CorpusIndex>) -> AdvisorState {
        match index {
            None => AdvisorState::Uninitialized,
            Some(index) if index.is_available() => AdvisorState::Ready,
            Some(_) => AdvisorState::Unavailable,
        }
    }

    pub fn evaluate(&self, query: &str) -> MatchResult {
        match self.snapshot() {
            Some(index) => self.matcher.evaluate(&index, query),
            None => self.matcher.evaluate(&CorpusIndex::empty(), query),
        }
    }

    /// Always returns a non-empty string: a stored answer, the
    /// low-confidence fallback, or the unavailable message.
    pub fn get_response(&self, query: &str) -> String {
        self.evaluate(query).response
    }

    pub fn handle_chat(&self, request: &ChatRequest) -> ChatResponse {
        ChatResponse {
            response: self.get_response(&request.message),
        }
    }

    /// Decodes one json request line. Every line gets exactly one response;
    /// undecodable requests receive the offline message.
    pub fn handle_chat_line(&self, line: &str) -> ChatResponse {
        match serde_json::from_str::<ChatRequest>(line) {
            Ok(request) => self.handle_chat(&request),
            Err(e) => {
                warn!("Invalid chat request: {}", e);
                ChatResponse {
                    response: self.config.matcher.offline_message.clone(),
                }
            }
        }
    }

    /// Checks the dataset, the term model, and that every stored question
    /// resolves back to its own answer.
    pub fn health_report(&self) -> HealthReport {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let start = Instant::now();

        let Some(index) = self.snapshot() else {
            let check = HealthCheck::unhealthy(
                "dataset",
                "index has not been loaded".to_string(),
                start.elapsed(),
            );
            return HealthReport::new(vec![check], version);
        };

        let mut checks = Vec::new();

        checks.push(if index.is_empty() {
            HealthCheck::unhealthy(
                "dataset",
                format!("no usable records in {}", self.config.dataset.path.display()),
                start.elapsed(),
            )
        } else if index.skipped() > 0 {
            HealthCheck::degraded(
                "dataset",
                format!("{} malformed entries skipped", index.skipped()),
                start.elapsed(),
            )
        } else {
            HealthCheck::healthy("dataset", start.elapsed())
        });

        if !index.is_available() {
            checks.push(HealthCheck::unhealthy(
                "term_model",
                "term model is not fitted".to_string(),
                start.elapsed(),
            ));
            return HealthReport::new(checks, version);
        }
        checks.push(HealthCheck::healthy("term_model", start.elapsed()));

        let check_start = Instant::now();
        let unresolved = index
            .records()
            .iter()
            .filter(|record| {
                let result = self.matcher.evaluate(&index, &record.question);
                !result.is_match() || result.response != record.answer
            })
            .count();

        checks.push(if unresolved == 0 {
            HealthCheck::healthy("self_match", check_start.elapsed())
        } else {
            HealthCheck::degraded(
                "self_match",
                format!(
                    "{} of {} questions did not resolve to their own answer",
                    unresolved,
                    index.len()
                ),
                check_start.elapsed(),
            )
        });

        HealthReport::new(checks, version)
    }
}
