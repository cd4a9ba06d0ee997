use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Which phrase tables are loaded at start-up
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Travel tables compiled into the binary (en-es, en-fr, ...)
    #[serde(default = "default_true")]
    pub embedded_tables: bool,
    /// en-hi / hi-en tables
    #[serde(default = "default_true")]
    pub hindi_tables: bool,
    /// Extra JSON tables, merged last so they override the built-in ones
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            embedded_tables: default_true(),
            hindi_tables: default_true(),
            additional_paths: Vec::new(),
        }
    }
}
