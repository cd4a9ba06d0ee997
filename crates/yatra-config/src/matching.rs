use serde::{Deserialize, Serialize};

fn default_single_phrase_threshold() -> f64 {
    0.7
}

fn default_composite_threshold() -> f64 {
    0.5
}

/// Coverage thresholds for the phrase-overlap matcher
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Longest phrase alone answers when it covers more than this share of the input
    #[serde(default = "default_single_phrase_threshold")]
    pub single_phrase_threshold: f64,
    /// All matched phrases are joined when together they cover more than this share
    #[serde(default = "default_composite_threshold")]
    pub composite_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            single_phrase_threshold: default_single_phrase_threshold(),
            composite_threshold: default_composite_threshold(),
        }
    }
}
