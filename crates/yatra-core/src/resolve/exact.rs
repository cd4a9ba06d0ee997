use yatra_dictionary::{PairKey, PhraseDictionary, fold_case};

use super::{Miss, Resolution};

/// Whole-input lookup, case-insensitive. The stored translation is returned verbatim.
pub fn try_exact(dictionary: &PhraseDictionary, text: &str, key: &PairKey) -> Resolution {
    let table = dictionary.table(key).ok_or(Miss)?;
    table.get(&fold_case(text)).map(str::to_string).ok_or(Miss)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> PhraseDictionary {
        let mut dict = PhraseDictionary::new();
        dict.insert(&PairKey::new("en", "es"), "hello", "Hola");
        dict.insert(&PairKey::new("en", "es"), "Where is the bathroom?", "¿Dónde está el baño?");
        dict
    }

    #[test]
    fn test_case_insensitive_hit() {
        let key = PairKey::new("en", "es");
        assert_eq!(try_exact(&dictionary(), "Hello", &key), Ok("Hola".to_string()));
        assert_eq!(
            try_exact(&dictionary(), "WHERE IS THE BATHROOM?", &key),
            Ok("¿Dónde está el baño?".to_string())
        );
    }

    #[test]
    fn test_partial_input_misses() {
        let key = PairKey::new("en", "es");
        assert_eq!(try_exact(&dictionary(), "hello there", &key), Err(Miss));
    }

    #[test]
    fn test_unknown_pair_misses() {
        assert_eq!(
            try_exact(&dictionary(), "hello", &PairKey::new("en", "fr")),
            Err(Miss)
        );
    }
}
