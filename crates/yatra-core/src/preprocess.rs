use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default travel-text preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC): folds full-width OCR output
        let text: String = text.nfkc().collect();

        // Line breaks are kept, sign texts are keyed with them
        text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_keeps_newlines() {
        let text = DefaultPreprocessor.process("  Emergency Exit\r\nDo not use elevator \n");
        assert_eq!(text, "Emergency Exit\nDo not use elevator");
    }

    #[test]
    fn test_folds_full_width() {
        assert_eq!(DefaultPreprocessor.process("Ｈｅｌｌｏ"), "Hello");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(DefaultPreprocessor.process(" \n\t "), "");
    }
}
