use crate::classifier::Classification;
use crate::taxonomy::OptionBundle;

/// Separator between the domain and style prompt fragments
pub const PROMPT_SEPARATOR: &str = "\n";

/// Provider options and prompt augmentation derived from a classification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub options: OptionBundle,
    /// Empty means no prompt augmentation
    pub prompt: String,
}

/// Merge the winning domain and style hints. Style overrides domain on key collision.
pub fn select(classification: &Classification<'_>) -> Selection {
    let mut options = OptionBundle::new();
    let mut fragments = Vec::with_capacity(2);

    for category in [classification.domain, classification.style]
        .into_iter()
        .flatten()
    {
        options.extend(
            category
                .options
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        if !category.prompt.is_empty() {
            fragments.push(category.prompt.as_str());
        }
    }

    Selection {
        options,
        prompt: fragments.join(PROMPT_SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::taxonomy::{Category, POLISH_OPTION, Taxonomy};

    fn bundle(pairs: &[(&str, &str)]) -> OptionBundle {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(
            vec![Category::new(
                "medical",
                ["patient"],
                bundle(&[(POLISH_OPTION, "11"), ("terminology", "medical")]),
                "Use medical terms.",
            )],
            vec![Category::new(
                "casual",
                ["hey"],
                bundle(&[(POLISH_OPTION, "3"), ("tone", "casual")]),
                "Keep it casual.",
            )],
        )
    }

    #[test]
    fn test_style_overrides_domain() {
        let taxonomy = taxonomy();
        let selection = select(&classify(&taxonomy, "hey, the patient is fine"));

        assert_eq!(selection.options.get(POLISH_OPTION).unwrap(), "3");
        assert_eq!(selection.options.get("terminology").unwrap(), "medical");
        assert_eq!(selection.options.get("tone").unwrap(), "casual");
        assert_eq!(selection.prompt, "Use medical terms.\nKeep it casual.");
    }

    #[test]
    fn test_domain_only() {
        let taxonomy = taxonomy();
        let selection = select(&classify(&taxonomy, "the patient is fine"));

        assert_eq!(selection.options.get(POLISH_OPTION).unwrap(), "11");
        assert!(!selection.options.contains_key("tone"));
        assert_eq!(selection.prompt, "Use medical terms.");
    }

    #[test]
    fn test_style_only() {
        let taxonomy = taxonomy();
        let selection = select(&classify(&taxonomy, "hey there"));

        assert_eq!(selection.options.get(POLISH_OPTION).unwrap(), "3");
        assert_eq!(selection.prompt, "Keep it casual.");
    }

    #[test]
    fn test_no_match_means_no_augmentation() {
        let taxonomy = taxonomy();
        let selection = select(&classify(&taxonomy, "nothing relevant"));
        assert_eq!(selection, Selection::default());
        assert!(selection.prompt.is_empty());
    }
}
