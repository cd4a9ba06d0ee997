use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower-case ISO 639-1 style code ("en", "hi", "es")
pub type LanguageCode = String;

pub const ENGLISH: &str = "en";
/// Hindi is only reachable through English in either direction
pub const HINDI: &str = "hi";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: impl Into<LanguageCode>, target: impl Into<LanguageCode>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Which pipeline stage produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMethod {
    Exact,
    PhraseOverlap,
    WordDecomposition,
    Remote,
    Synthetic,
}

impl ResolutionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMethod::Exact => "exact",
            ResolutionMethod::PhraseOverlap => "phrase-overlap",
            ResolutionMethod::WordDecomposition => "word-decomposition",
            ResolutionMethod::Remote => "remote",
            ResolutionMethod::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one pipeline run. Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub translation: String,
    pub method: ResolutionMethod,
    /// False when the text is a synthetic placeholder
    pub succeeded: bool,
    pub routed_via_english: bool,
    /// Effective pair of the final hop
    pub pair: LanguagePair,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    #[default]
    Manual,
    Speech,
    Ocr,
    Conversation,
}

/// Finished translation handed to the history store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub source_text: String,
    pub translated_text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    pub source: TextSource,
    pub method: ResolutionMethod,
    pub created_at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    A,
    B,
}

impl Speaker {
    pub fn other(&self) -> Self {
        match self {
            Speaker::A => Speaker::B,
            Speaker::B => Speaker::A,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput {
        text: String,
        source: TextSource,
    },
    ConversationTurn {
        speaker: Speaker,
        text: String,
    },
    SwapLanguages,
    SetAiEnhancement(bool),
    ShowTranslation {
        original: String,
        result: ResolutionResult,
    },
    ShowTurn {
        speaker: Speaker,
        original: String,
        translated: String,
    },
    StatusUpdate(String),
    Shutdown,
}
