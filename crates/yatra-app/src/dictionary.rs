use std::path::Path;

use yatra_config::dictionary::DictionaryConfig;
use yatra_dictionary::PhraseDictionary;
use yatra_lang_hindi::HindiPhrasesLoader;

/// Embedded travel tables, then the Hindi tables, then any extra files.
/// Later sources override earlier ones; a source that fails to load is skipped.
pub fn build_dictionary(config: &DictionaryConfig) -> PhraseDictionary {
    let mut dictionary = PhraseDictionary::new();

    if config.embedded_tables {
        match yatra_dictionary::load_embedded() {
            Ok(travel) => dictionary = dictionary.merge(travel),
            Err(e) => tracing::warn!("Failed to load embedded phrase tables: {}", e),
        }
    }

    if config.hindi_tables {
        match HindiPhrasesLoader::load_embedded() {
            Ok(hindi) => dictionary = dictionary.merge(hindi),
            Err(e) => tracing::warn!("Failed to load Hindi phrase tables: {}", e),
        }
    }

    for path in &config.additional_paths {
        match yatra_dictionary::load_from_file(Path::new(path)) {
            Ok(extra) => {
                tracing::info!("Loaded {} phrases from {}", extra.entry_count(), path);
                dictionary = dictionary.merge(extra);
            }
            Err(e) => tracing::warn!("Skipping phrase file {}: {}", path, e),
        }
    }

    tracing::info!(
        "Dictionary ready: {} pairs, {} phrases",
        dictionary.pair_keys().len(),
        dictionary.entry_count()
    );
    dictionary
}

#[cfg(test)]
mod tests {
    use std::fs;

    use yatra_dictionary::PairKey;

    use super::*;

    #[test]
    fn test_builtin_tables() {
        let dictionary = build_dictionary(&DictionaryConfig::default());
        assert!(dictionary.has_pair(&PairKey::new("en", "es")));
        assert!(dictionary.has_pair(&PairKey::new("hi", "en")));
    }

    #[test]
    fn test_extra_file_overrides_and_bad_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        fs::write(&path, r#"{ "en-es": [["hello", "¡Hola!"]], "en-sw": [["hello", "Jambo"]] }"#).unwrap();

        let config = DictionaryConfig {
            hindi_tables: false,
            additional_paths: vec![
                dir.path().join("missing.json").to_string_lossy().into_owned(),
                path.to_string_lossy().into_owned(),
            ],
            ..DictionaryConfig::default()
        };
        let dictionary = build_dictionary(&config);

        let en_es = dictionary.table(&PairKey::new("en", "es")).unwrap();
        assert_eq!(en_es.get("hello"), Some("¡Hola!"));
        assert_eq!(en_es.entries()[0].phrase, "hello");
        assert_eq!(dictionary.table(&PairKey::new("en", "sw")).unwrap().get("hello"), Some("Jambo"));
        assert!(!dictionary.has_pair(&PairKey::new("en", "hi")));
    }
}
