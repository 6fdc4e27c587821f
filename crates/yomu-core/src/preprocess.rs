use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical composition only: NFKC would fold fullwidth forms the search distinguishes
        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}
