pub mod request;
pub mod validation;

pub use request::*;
pub use validation::*;

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::{Result, TranslateError};

lazy_static! {
    /// Short language codes accepted from callers -> Youdao language codes
    static ref LANGUAGE_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("zh", "zh-CHS"),
        ("en", "en"),
        ("ja", "ja"),
        ("ko", "ko"),
        ("fr", "fr"),
    ]);
}

/// Maps a caller-supplied target language to the provider's code
pub fn resolve_language(code: &str) -> Result<&'static str> {
    let normalized = code.trim().to_lowercase();
    LANGUAGE_CODES
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| TranslateError::UnsupportedLanguage(code.to_string()))
}

/// Short codes the proxy can translate into
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<_> = LANGUAGE_CODES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_mapping() {
        assert_eq!(resolve_language("zh").unwrap(), "zh-CHS");
        assert_eq!(resolve_language("en").unwrap(), "en");
        assert_eq!(resolve_language("ja").unwrap(), "ja");
        assert_eq!(resolve_language("ko").unwrap(), "ko");
        assert_eq!(resolve_language("fr").unwrap(), "fr");
    }

    #[test]
    fn test_language_mapping_normalizes_input() {
        assert_eq!(resolve_language(" ZH ").unwrap(), "zh-CHS");
    }

    #[test]
    fn test_unknown_language_fails() {
        match resolve_language("xx") {
            Err(TranslateError::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
        assert!(resolve_language("").is_err());
    }

    #[test]
    fn test_supported_languages_sorted() {
        assert_eq!(supported_languages(), vec!["en", "fr", "ja", "ko", "zh"]);
    }
}
