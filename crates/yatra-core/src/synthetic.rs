//! Deterministic placeholder translations.
//!
//! Last pipeline stage. Same (text, target) always gives the same output, and
//! the output is never empty.

type WordTransform = fn(&str) -> String;

fn romance(word: &str) -> String {
    format!("{word}o")
}

fn slavic(word: &str) -> String {
    let stripped: String = word.chars().filter(|c| !"aeiou".contains(*c)).collect();
    format!("{stripped}ski")
}

fn nordic(word: &str) -> String {
    format!("{word}ø")
}

fn truncated(word: &str) -> String {
    let keep = word.chars().count().saturating_sub(2).max(2);
    word.chars().take(keep).collect()
}

fn semitic(word: &str) -> String {
    let head: String = word.chars().take(2).collect();
    format!("{word}al{head}")
}

fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

/// Word shape per language family. ja and zh reverse each word; codes with
/// no family get the bracketed form.
fn word_transform(target: &str) -> Option<WordTransform> {
    match target {
        "pt" | "ro" => Some(romance),
        "ru" | "pl" | "cs" | "bg" => Some(slavic),
        "sv" | "no" | "da" | "fi" => Some(nordic),
        "ko" | "th" | "vi" => Some(truncated),
        "ar" | "he" | "fa" => Some(semitic),
        "ja" | "zh" => Some(reversed),
        _ => None,
    }
}

/// Placeholder translation of `text` into `target`
pub fn synthesize(text: &str, target: &str) -> String {
    let code = target.trim().to_ascii_lowercase();
    let generic = || format!("[{}] {}", code.to_ascii_uppercase(), text);

    let Some(transform) = word_transform(&code) else {
        return generic();
    };

    let output = text.split(' ').map(transform).collect::<Vec<_>>().join(" ");
    if output.trim().is_empty() {
        generic()
    } else {
        output
    }
}
