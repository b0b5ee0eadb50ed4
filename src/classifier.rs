use crate::taxonomy::{Category, Taxonomy};

/// Score of one category for a given input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub name: String,
    pub score: usize,
}

/// Winning domain and style for one input text, plus every score considered
///
/// `None` on an axis means nothing matched and provider defaults apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub domain: Option<&'a Category>,
    pub style: Option<&'a Category>,
    pub domain_scores: Vec<CategoryScore>,
    pub style_scores: Vec<CategoryScore>,
}

impl Classification<'_> {
    pub fn domain_name(&self) -> Option<&str> {
        self.domain.map(|c| c.name.as_str())
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style.map(|c| c.name.as_str())
    }
}

/// Classify text against the taxonomy, domain and style independently
pub fn classify<'a>(taxonomy: &'a Taxonomy, text: &str) -> Classification<'a> {
    let folded = text.to_lowercase();

    let (domain, domain_scores) = best_match(&taxonomy.domains, &folded);
    let (style, style_scores) = best_match(&taxonomy.styles, &folded);

    let classification = Classification {
        domain,
        style,
        domain_scores,
        style_scores,
    };

    tracing::debug!(
        domain = classification.domain_name().unwrap_or("none"),
        style = classification.style_name().unwrap_or("none"),
        text_len = text.len(),
        "Classified input text"
    );

    classification
}

/// Highest nonzero score wins; the earliest declared category wins ties
fn best_match<'a>(
    categories: &'a [Category],
    folded_text: &str,
) -> (Option<&'a Category>, Vec<CategoryScore>) {
    let mut best: Option<(&Category, usize)> = None;
    let mut scores = Vec::with_capacity(categories.len());

    for category in categories {
        let score = category.score(folded_text);
        scores.push(CategoryScore {
            name: category.name.clone(),
            score,
        });

        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((category, score));
        }
    }

    (best.map(|(category, _)| category), scores)
}
