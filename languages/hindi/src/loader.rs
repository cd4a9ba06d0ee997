use yatra_dictionary::{LoadError, PairKey, PhraseDictionary};
use yatra_types::{ENGLISH, HINDI};

pub struct HindiPhrasesLoader;

impl HindiPhrasesLoader {
    /// Load the embedded en-hi and hi-en tables
    pub fn load_embedded() -> Result<PhraseDictionary, LoadError> {
        let json = include_str!("../data/hindi_phrases.json");
        tracing::info!("Loading embedded Hindi phrase tables...");
        let dict = yatra_dictionary::parse_tables(json)?;
        tracing::info!("Loaded {} Hindi phrases", dict.entry_count());
        Ok(dict)
    }

    /// The two pairs this crate ships tables for
    pub fn pair_keys() -> [PairKey; 2] {
        [PairKey::new(ENGLISH, HINDI), PairKey::new(HINDI, ENGLISH)]
    }
}
