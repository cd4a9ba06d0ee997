use std::collections::HashMap;
use std::path::Path;

use crate::types::{PairKey, PairTable, PhraseDictionary};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid pair key: {0}")]
    InvalidPairKey(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// { "en-es": [["hello", "Hola"], ...], ... }
// Arrays keep the authoring order, which decides "first phrase wins" lookups.
type TablesJson = HashMap<String, Vec<(String, String)>>;

/// Parse phrase tables from JSON
pub fn parse_tables(json_str: &str) -> Result<PhraseDictionary, LoadError> {
    let data: TablesJson = serde_json::from_str(json_str)?;
    let mut dictionary = PhraseDictionary::new();

    for (raw_key, pairs) in data {
        let key = PairKey::parse(&raw_key).ok_or_else(|| LoadError::InvalidPairKey(raw_key.clone()))?;

        let mut table = PairTable::new();
        for (phrase, translation) in pairs {
            if !table.insert(&phrase, translation) {
                tracing::warn!("Skipping empty phrase in table {}", key);
            }
        }
        dictionary.insert_table(key, table);
    }

    Ok(dictionary)
}

/// Load the embedded travel phrase tables
pub fn load_embedded() -> Result<PhraseDictionary, LoadError> {
    let json = include_str!("../../data/travel_phrases.json");
    tracing::info!("Loading embedded travel phrase tables...");
    let dictionary = parse_tables(json)?;
    tracing::info!(
        "Loaded {} phrases across {} language pairs",
        dictionary.entry_count(),
        dictionary.pair_keys().len()
    );
    Ok(dictionary)
}

/// Load phrase tables from a JSON file
pub fn load_from_file(path: &Path) -> Result<PhraseDictionary, LoadError> {
    tracing::info!("Loading phrase tables from file: {}", path.display());
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let json = std::fs::read_to_string(path)?;
    let dictionary = parse_tables(&json)?;
    tracing::info!("Loaded {} phrases from file", dictionary.entry_count());
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_authoring_order() {
        let json = r#"{ "en-es": [["Where is", "Dónde está"], ["hello", "Hola"], ["where", "dónde"]] }"#;
        let dictionary = parse_tables(json).unwrap();
        let table = dictionary.table(&PairKey::new("en", "es")).unwrap();

        let phrases: Vec<&str> = table.entries().iter().map(|e| e.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["where is", "hello", "where"]);
    }

    #[test]
    fn test_parse_rejects_bad_pair_key() {
        let json = r#"{ "english": [["hello", "Hola"]] }"#;
        match parse_tables(json) {
            Err(LoadError::InvalidPairKey(key)) => assert_eq!(key, "english"),
            other => panic!("Expected InvalidPairKey, got {:?}", other.map(|d| d.entry_count())),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_tables(r#"{ "en-es": {"hello": "Hola"} }"#),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn test_embedded_tables_load() {
        let dictionary = load_embedded().unwrap();
        let table = dictionary.table(&PairKey::new("en", "es")).unwrap();

        assert_eq!(table.get("hello"), Some("Hola"));
        assert_eq!(table.get("thank you"), Some("Gracias"));
        assert!(dictionary.has_pair(&PairKey::new("en", "fr")));
        assert!(dictionary.has_pair(&PairKey::new("en", "ja")));
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
