use crate::error::Result;
use crate::selector::Selection;
use crate::taxonomy::OptionBundle;

use super::resolve_language;

/// Source language sent to the provider; Youdao detects it
pub const SOURCE_LANG_AUTO: &str = "auto";

/// Form fields every request carries unless a category overrides them
const DEFAULT_FIELDS: &[(&str, &str)] = &[
    ("handleOption", "1"), // professional translation model
    ("expandOption", "0"),
];

/// Immutable, fully-resolved translation request
///
/// Built once per translation; a retry builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    source_text: String,
    source_lang: &'static str,
    target_lang: &'static str,
    options: OptionBundle,
    prompt: String,
}

impl RequestConfig {
    /// Resolve the target language and combine it with the selected hints.
    ///
    /// Fails with `UnsupportedLanguage` before any network activity.
    pub fn build(source_text: &str, target_lang: &str, selection: Selection) -> Result<Self> {
        let resolved = resolve_language(target_lang)?;

        tracing::debug!(
            target_lang = resolved,
            options = ?selection.options,
            prompt_len = selection.prompt.len(),
            "Built translation request"
        );

        Ok(Self {
            source_text: source_text.to_string(),
            source_lang: SOURCE_LANG_AUTO,
            target_lang: resolved,
            options: selection.options,
            prompt: selection.prompt,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn source_lang(&self) -> &str {
        self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        self.target_lang
    }

    pub fn options(&self) -> &OptionBundle {
        &self.options
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Provider form payload, without authentication fields
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("q".to_string(), self.source_text.clone()),
            ("from".to_string(), self.source_lang.to_string()),
            ("to".to_string(), self.target_lang.to_string()),
            ("i".to_string(), self.source_text.clone()),
        ];

        let mut extra: OptionBundle = DEFAULT_FIELDS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        extra.extend(self.options.clone());
        fields.extend(extra);

        if !self.prompt.is_empty() {
            fields.push(("prompt".to_string(), self.prompt.clone()));
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;
    use crate::taxonomy::POLISH_OPTION;

    fn field<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn selection(polish: &str, prompt: &str) -> Selection {
        let mut options = OptionBundle::new();
        options.insert(POLISH_OPTION.to_string(), polish.to_string());
        Selection {
            options,
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn test_build_resolves_language() {
        let config = RequestConfig::build("hello", "zh", Selection::default()).unwrap();
        assert_eq!(config.target_lang(), "zh-CHS");
        assert_eq!(config.source_lang(), "auto");
        assert_eq!(config.source_text(), "hello");
    }

    #[test]
    fn test_build_rejects_unknown_language() {
        let err = RequestConfig::build("hello", "xx", Selection::default()).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguage(ref code) if code == "xx"));
    }

    #[test]
    fn test_form_fields_with_selection() {
        let config =
            RequestConfig::build("the patient", "en", selection("11", "Use medical terms."))
                .unwrap();
        let fields = config.form_fields();

        assert_eq!(field(&fields, "q"), Some("the patient"));
        assert_eq!(field(&fields, "i"), Some("the patient"));
        assert_eq!(field(&fields, "from"), Some("auto"));
        assert_eq!(field(&fields, "to"), Some("en"));
        assert_eq!(field(&fields, "handleOption"), Some("1"));
        assert_eq!(field(&fields, "expandOption"), Some("0"));
        assert_eq!(field(&fields, POLISH_OPTION), Some("11"));
        assert_eq!(field(&fields, "prompt"), Some("Use medical terms."));
    }

    #[test]
    fn test_form_fields_without_augmentation() {
        let config = RequestConfig::build("plain", "ko", Selection::default()).unwrap();
        let fields = config.form_fields();

        assert_eq!(field(&fields, "prompt"), None);
        assert_eq!(field(&fields, POLISH_OPTION), None);
        assert_eq!(field(&fields, "handleOption"), Some("1"));
    }

    #[test]
    fn test_category_options_override_defaults() {
        let mut options = OptionBundle::new();
        options.insert("expandOption".to_string(), "1".to_string());
        let config = RequestConfig::build(
            "text",
            "fr",
            Selection {
                options,
                prompt: String::new(),
            },
        )
        .unwrap();
        let fields = config.form_fields();

        assert_eq!(field(&fields, "expandOption"), Some("1"));
        assert_eq!(fields.iter().filter(|(k, _)| k == "expandOption").count(), 1);
    }
}
