// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AdvisorError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_UNAVAILABLE_MESSAGE: &str =
    "System Error: Brain not loaded. Please check ayurveda_data.json.";

pub const DEFAULT_OFFLINE_MESSAGE: &str = "My brain is offline temporarily.";

pub const MAX_QUESTION_WEIGHT: usize = 16;

pub const DEFAULT_FALLBACK_MESSAGE: &str = "I am not entirely sure about that yet. 🧘\u{200d}♂\u{fe0f}<br>\
Please check if you selected the correct language or try asking about specific topics like:<br>\
<b>'Tulsi'</b>, <b>'Acidity'</b>, <b>'Hair Fall'</b>, or <b>'Yoga'</b>.";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub indexer: IndexerConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// How many times the question is repeated in each composite document.
    pub question_weight: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub lowercase: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            question_weight: 3,
            ngram_min: 1,
            ngram_max: 3,
            lowercase: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// A match is accepted only when its score is strictly greater than this.
    pub threshold: f32,
    pub fallback_message: String,
    pub unavailable_message: String,
    /// Reply to chat requests that cannot be decoded.
    pub offline_message: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            unavailable_message: DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
            offline_message: DEFAULT_OFFLINE_MESSAGE.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("AYURVEDA_QA")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AdvisorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AdvisorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            dataset: DatasetConfig {
                path: PathBuf::from("data/ayurveda_data.json"),
            },
            indexer: IndexerConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_QUESTION_WEIGHT).contains(&self.indexer.question_weight) {
            return Err(AdvisorError::Config(format!(
                "question_weight must be between 1 and {}, got {}",
                MAX_QUESTION_WEIGHT, self.indexer.question_weight
            )));
        }

        if self.indexer.ngram_min == 0 || self.indexer.ngram_min > self.indexer.ngram_max {
            return Err(AdvisorError::Config(format!(
                "invalid ngram range ({}, {})",
                self.indexer.ngram_min, self.indexer.ngram_max
            )));
        }

        let threshold = self.matcher.threshold;
        if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
            return Err(AdvisorError::Config(format!(
                "threshold must be in [0, 1), got {}",
                threshold
            )));
        }

        if self.matcher.fallback_message.trim().is_empty()
            || self.matcher.unavailable_message.trim().is_empty()
            || self.matcher.offline_message.trim().is_empty()
        {
            return Err(AdvisorError::Config(
                "matcher messages must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
