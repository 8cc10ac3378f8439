//! Result labels with matched text wrapped in highlight spans.

use crate::search::QueryPatterns;
use crate::search::pattern::compile;
use crate::types::{Candidate, Category};
use regex::Regex;
use std::borrow::Cow;

/// Replacement wrapping each match.
const HIGHLIGHT: &str = r#"<span class="result-highlight">${0}</span>"#;

/// Escapes angle brackets; labels are otherwise trusted index content.
pub fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Highlights labels using the patterns a search produced.
#[derive(Debug, Clone)]
pub struct Highlighter {
    primary: Option<Regex>,
    fallback: Option<Regex>,
}

impl Highlighter {
    /// Builds highlight matchers for `patterns`.
    ///
    /// The primary pattern is matched against escaped labels, so its own angle
    /// brackets are escaped the same way. A pattern that fails to compile simply
    /// highlights nothing.
    pub fn new(patterns: &QueryPatterns) -> Self {
        let primary = compile(
            &escape_html(patterns.primary()),
            !patterns.is_case_sensitive(),
        );
        let fallback = compile(patterns.fallback(), true);
        Self {
            primary: primary
                .inspect_err(|e| tracing::debug!("Highlighting disabled: {}", e))
                .ok(),
            fallback: fallback
                .inspect_err(|e| tracing::debug!("Fallback highlighting disabled: {}", e))
                .ok(),
        }
    }

    /// Escapes `text` and wraps every match of the primary pattern, or of the
    /// fallback pattern if the primary matches nothing.
    pub fn highlight(&self, text: &str) -> String {
        let escaped = escape_html(text);
        for matcher in [&self.primary, &self.fallback].into_iter().flatten() {
            if let Cow::Owned(highlighted) = matcher.replace_all(&escaped, HIGHLIGHT) {
                return highlighted;
            }
        }
        escaped
    }
}

/// Text shown for a result before highlighting.
pub fn label_text(category: Category, candidate: &Candidate) -> Cow<'_, str> {
    match category {
        Category::Module | Category::Package | Category::SearchTag => {
            Cow::Borrowed(&candidate.name)
        }
        Category::Type => match candidate.named_package() {
            Some(package) => Cow::Owned(format!("{}.{}", package, candidate.name)),
            None => Cow::Borrowed(&candidate.name),
        },
        Category::Member => {
            let class = candidate.class.as_deref().unwrap_or_default();
            match candidate.named_package() {
                Some(package) => {
                    Cow::Owned(format!("{}.{}.{}", package, class, candidate.name))
                }
                None => Cow::Owned(format!("{}.{}", class, candidate.name)),
            }
        }
    }
}

/// Full HTML for a result item: highlighted label plus module or tag holder details.
pub fn item_html(category: Category, candidate: &Candidate, highlighter: &Highlighter) -> String {
    let label = highlighter.highlight(&label_text(category, candidate));

    if category == Category::SearchTag
        && let Some(holder) = &candidate.holder
    {
        let mut html = format!(
            "{}<span class=\"search-tag-holder-result\"> ({})</span>",
            label, holder
        );
        if let Some(description) = &candidate.description {
            html.push_str("<br><span class=\"search-tag-desc-result\">");
            html.push_str(description);
            html.push_str("</span><br>");
        }
        return html;
    }

    match &candidate.module {
        Some(module) => format!("{}/{}", module, label),
        None => label,
    }
}
