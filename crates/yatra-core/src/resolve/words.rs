use yatra_dictionary::{PairKey, PairTable, PhraseDictionary, fold_case};

use super::{Miss, Resolution};

/// Resolve each whitespace-separated token on its own.
///
/// A token is resolved by an exact key, else by the first phrase (table order)
/// whose own tokens include it, else it passes through unchanged. Partial
/// output is accepted: only a run that resolved no token at all is a miss.
pub fn try_word_by_word(dictionary: &PhraseDictionary, text: &str, key: &PairKey) -> Resolution {
    let table = dictionary.table(key).ok_or(Miss)?;
    let folded = fold_case(text);

    let mut resolved = 0usize;
    let mut words = Vec::new();

    for token in folded.split_whitespace() {
        match resolve_token(table, token) {
            Some(translation) => {
                resolved += 1;
                words.push(translation);
            }
            None => words.push(token),
        }
    }

    if resolved == 0 {
        return Err(Miss);
    }

    tracing::debug!("Word-by-word resolved {}/{} tokens", resolved, words.len());
    Ok(words.join(" "))
}

fn resolve_token<'a>(table: &'a PairTable, token: &str) -> Option<&'a str> {
    table.get(token).or_else(|| {
        table
            .entries()
            .iter()
            .find(|entry| entry.tokens().any(|t| t == token))
            .map(|entry| entry.translation.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> PhraseDictionary {
        let key = PairKey::new("en", "hi");
        let mut dict = PhraseDictionary::new();
        dict.insert(&key, "where is", "कहाँ है");
        dict.insert(&key, "hotel", "होटल");
        dict.insert(&key, "is it far", "क्या दूर है");
        dict
    }

    #[test]
    fn test_exact_tokens_and_pass_through() {
        let result = try_word_by_word(&dictionary(), "Hotel Taj", &PairKey::new("en", "hi"));
        assert_eq!(result, Ok("होटल taj".to_string()));
    }

    #[test]
    fn test_first_containing_phrase_wins() {
        // "is" appears in "where is" before "is it far"
        let result = try_word_by_word(&dictionary(), "is", &PairKey::new("en", "hi"));
        assert_eq!(result, Ok("कहाँ है".to_string()));
    }

    #[test]
    fn test_order_preserved() {
        let result = try_word_by_word(&dictionary(), "the hotel where", &PairKey::new("en", "hi"));
        assert_eq!(result, Ok("the होटल कहाँ है".to_string()));
    }

    #[test]
    fn test_nothing_resolved_misses() {
        let result = try_word_by_word(&dictionary(), "bonjour madame", &PairKey::new("en", "hi"));
        assert_eq!(result, Err(Miss));
    }
}
