use std::collections::HashMap;
use std::fmt;

use yatra_types::LanguagePair;

/// Case-fold a phrase or input for matching. Tables are authored with natural
/// casing on the translation side; keys and inputs are compared folded.
pub fn fold_case(text: &str) -> String {
    text.trim().to_lowercase()
}

/// "{source}-{target}", e.g. "en-es"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(String);

impl PairKey {
    pub fn new(source: &str, target: &str) -> Self {
        Self(format!(
            "{}-{}",
            source.to_ascii_lowercase(),
            target.to_ascii_lowercase()
        ))
    }

    /// Parse "en-es". Both halves must be non-empty ASCII letters.
    pub fn parse(key: &str) -> Option<Self> {
        let (source, target) = key.split_once('-')?;
        let valid = |code: &str| !code.is_empty() && code.chars().all(|c| c.is_ascii_alphabetic());
        if valid(source) && valid(target) {
            Some(Self::new(source, target))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&LanguagePair> for PairKey {
    fn from(pair: &LanguagePair) -> Self {
        PairKey::new(&pair.source, &pair.target)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Case-folded key
    pub phrase: String,
    /// Stored verbatim, natural casing
    pub translation: String,
}

impl PhraseEntry {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.phrase.split_whitespace()
    }
}

/// One language pair's phrases, in authoring order, with a folded-key index.
///
/// Phrase keys are unique; inserting an existing key replaces its translation
/// and keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    entries: Vec<PhraseEntry>,
    index: HashMap<String, usize>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the folded phrase is empty and nothing was stored
    pub fn insert(&mut self, phrase: &str, translation: impl Into<String>) -> bool {
        let key = fold_case(phrase);
        if key.is_empty() {
            return false;
        }

        let translation = translation.into();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].translation = translation,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(PhraseEntry {
                    phrase: key,
                    translation,
                });
            }
        }
        true
    }

    /// Lookup by an already folded key
    pub fn get(&self, folded: &str) -> Option<&str> {
        self.index
            .get(folded)
            .and_then(|&idx| self.entries.get(idx))
            .map(|e| e.translation.as_str())
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another table; its entries override ours for the same phrase
    pub fn merge(&mut self, other: PairTable) {
        for entry in other.entries {
            self.insert(&entry.phrase, entry.translation);
        }
    }
}

/// All phrase tables, keyed by language pair. Built once at start-up and
/// shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    tables: HashMap<PairKey, PairTable>,
}

impl PhraseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &PairKey, phrase: &str, translation: impl Into<String>) -> bool {
        self.tables
            .entry(key.clone())
            .or_default()
            .insert(phrase, translation)
    }

    pub fn insert_table(&mut self, key: PairKey, table: PairTable) {
        self.tables.entry(key).or_default().merge(table);
    }

    pub fn table(&self, key: &PairKey) -> Option<&PairTable> {
        self.tables.get(key)
    }

    pub fn has_pair(&self, key: &PairKey) -> bool {
        self.tables.get(key).is_some_and(|t| !t.is_empty())
    }

    /// Pair keys in sorted order
    pub fn pair_keys(&self) -> Vec<&PairKey> {
        let mut keys: Vec<&PairKey> = self.tables.keys().collect();
        keys.sort();
        keys
    }

    pub fn entry_count(&self) -> usize {
        self.tables.values().map(PairTable::len).sum()
    }

    /// Merge another dictionary into this one.
    /// Entries from `other` with the same phrase override existing ones.
    pub fn merge(mut self, other: PhraseDictionary) -> Self {
        for (key, table) in other.tables {
            self.insert_table(key, table);
        }
        self
    }
}
