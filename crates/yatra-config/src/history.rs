use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_capacity() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// JSON-lines file to append to. In-memory history when unset.
    pub path: Option<String>,
    /// Records kept by the in-memory store
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
            capacity: default_capacity(),
        }
    }
}
