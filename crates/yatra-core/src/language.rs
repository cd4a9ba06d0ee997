pub use yatra_types::{ENGLISH, HINDI};
use yatra_types::LanguagePair;

/// Codes the app offers, with display names used in remote prompts
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("ro", "Romanian"),
    ("cs", "Czech"),
    ("bg", "Bulgarian"),
    ("he", "Hebrew"),
    ("fa", "Persian"),
];

/// Display name for a code, or the code itself when unknown
pub fn language_name(code: &str) -> String {
    let code = canonical_code(code);
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or(code)
}

pub fn is_known(code: &str) -> bool {
    let code = canonical_code(code);
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

pub fn supported_languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES.iter().copied()
}

/// Strip region/script subtags and lower-case: "en-US" -> "en", "zh_Hans" -> "zh"
pub fn canonical_code(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Effective pair after applying the Hindi-via-English rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPair {
    pub pair: LanguagePair,
    /// hi -> X (X not en/hi): resolve hi -> en, then en -> X
    pub routed_via_english: bool,
}

/// Derive the effective pair from the requested one.
///
/// Rules, in order:
/// 1. target `hi` with a non-English source: the source is treated as English.
/// 2. source `hi` with a target other than `en`/`hi`: routed via English.
/// 3. anything else passes through.
pub fn normalize(source: &str, target: &str) -> NormalizedPair {
    let source = canonical_code(source);
    let target = canonical_code(target);

    if target == HINDI && source != ENGLISH {
        tracing::debug!("{source} -> hi is only supported from English, using en -> hi");
        return NormalizedPair {
            pair: LanguagePair::new(ENGLISH, HINDI),
            routed_via_english: false,
        };
    }

    if source == HINDI && target != ENGLISH && target != HINDI {
        tracing::debug!("hi -> {target} routed via English");
        return NormalizedPair {
            pair: LanguagePair::new(HINDI, target),
            routed_via_english: true,
        };
    }

    NormalizedPair {
        pair: LanguagePair::new(source, target),
        routed_via_english: false,
    }
}
