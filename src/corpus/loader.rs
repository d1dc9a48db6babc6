// file: src/corpus/loader.rs
// description: reads the question/answer dataset and validates each entry
// reference: https://docs.rs/serde_json

use crate::error::{AdvisorError, Result};
use crate::models::Record;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<Record>,
    pub skipped: usize,
    pub content_hash: String,
}

pub struct DatasetLoader;

impl DatasetLoader {
    pub fn load(path: &Path) -> Result<LoadedDataset> {
        let content = fs::read_to_string(path).map_err(|e| {
            AdvisorError::data_source(path, format!("failed to read dataset: {}", e))
        })?;

        let dataset = Self::parse_from(path, &content)?;
        info!(
            "Loaded {} records from {} ({} skipped)",
            dataset.records.len(),
            path.display(),
            dataset.skipped
        );
        Ok(dataset)
    }

    pub fn parse(content: &str) -> Result<LoadedDataset> {
        Self::parse_from(Path::new("<memory>"), content)
    }

    fn parse_from(path: &Path, content: &str) -> Result<LoadedDataset> {
        let value: Value = serde_json::from_str(content).map_err(|e| {
            AdvisorError::data_source(path, format!("invalid JSON format: {}", e))
        })?;

        let Value::Array(entries) = value else {
            return Err(AdvisorError::data_source(
                path,
                "expected a JSON array of {question, answer} objects",
            ));
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for (position, entry) in entries.iter().enumerate() {
            match Self::record_from_value(entry) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    skipped += 1;
                    warn!("Skipping dataset entry {}: {}", position, reason);
                }
            }
        }

        debug!("Parsed {} dataset entries", entries.len());

        Ok(LoadedDataset {
            records,
            skipped,
            content_hash: Self::compute_hash(content),
        })
    }

    fn record_from_value(entry: &Value) -> std::result::Result<Record, String> {
        let object = entry
            .as_object()
            .ok_or_else(|| "entry is not an object".to_string())?;

        let field = |name: &str| -> std::result::Result<&str, String> {
            match object.get(name) {
                Some(Value::String(s)) => Ok(s.as_str()),
                Some(_) => Err(format!("field '{}' is not a string", name)),
                None => Err(format!("missing field '{}'", name)),
            }
        };

        let question = field("question")?;
        let answer = field("answer")?;

        if question.trim().is_empty() {
            return Err("question is blank".to_string());
        }

        Ok(Record::new(question, answer))
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
