use yatra_types::LanguageCode;

use crate::language::canonical_code;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Nothing to translate")]
    EmptyText,

    #[error("Invalid language code: {0:?}")]
    InvalidLanguage(String),
}

/// One user action's worth of text. Text is preprocessed and non-empty,
/// codes are canonical lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
}

impl TranslationRequest {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Result<Self, RequestError> {
        let text = DefaultPreprocessor.process(text);
        if text.is_empty() {
            return Err(RequestError::EmptyText);
        }

        Ok(Self {
            text,
            source_language: validated_code(source_language)?,
            target_language: validated_code(target_language)?,
        })
    }
}

fn validated_code(code: &str) -> Result<LanguageCode, RequestError> {
    let canonical = canonical_code(code);
    if canonical.is_empty() || !canonical.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RequestError::InvalidLanguage(code.to_string()));
    }
    Ok(canonical)
}
