use std::env;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::matching::MatchingConfig;
use self::pipeline::PipelineConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod history;
pub mod matching;
pub mod pipeline;
pub mod translator;

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "es".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be in (0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub matching: MatchingConfig,
    pub dictionary: DictionaryConfig,
    pub history: HistoryConfig,

    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            matching: MatchingConfig::default(),
            dictionary: DictionaryConfig::default(),
            history: HistoryConfig::default(),
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = env::var("YATRA_API_KEY") {
            self.translator.api_key = key;
        }

        if let Ok(url) = env::var("YATRA_API_URL") {
            self.translator.api_url = url;
        }

        if let Ok(model) = env::var("YATRA_MODEL") {
            self.translator.model = model;
        }

        if let Some(timeout_ms) = env::var("YATRA_REMOTE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.translator.timeout_ms = timeout_ms;
        }

        if let Some(enabled) = env::var("YATRA_AI_ENHANCEMENT")
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.translator.enabled = enabled;
        }

        if let Ok(path) = env::var("YATRA_HISTORY_PATH") {
            self.history.path = Some(path);
        }
    }

    /// Settings for one pipeline run
    pub fn pipeline(&self) -> Result<PipelineConfig, ConfigError> {
        PipelineConfig::new(
            self.translator.enabled,
            Duration::from_millis(self.translator.timeout_ms),
            self.matching,
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
