//! Query-to-regex translation with camel-case and delimiter-aware segmentation.
//!
//! A query such as `ArrIOOB` becomes
//! `Arr([a-z0-9_$<>\[\]]*?)I(...)O(...)O(...)B(...)`: every segment starting at an
//! uppercase letter or a delimiter is matched literally, and every segment that
//! ends in a word character may be followed by skipped lowercase characters.
//! The lazy groups are capturing so the ranker can measure what was skipped.

use crate::error::SearchError;
use regex::{Regex, RegexBuilder};

/// Lazy wildcard appended after each segment ending in a word character.
const WILDCARD: &str = r"([a-z0-9_$<>\[\]]*?)";

/// Separator between word groups when both sides are identifiers.
const REQUIRED_SPACE: &str = r"\s+";

/// Separator between word groups when either side is punctuation.
const OPTIONAL_SPACE: &str = r"\s*";

pub(crate) const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that start a new segment within a word group.
const fn is_segment_start(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, ',' | '.' | '(' | ')' | '<' | '>' | '[' | '/')
}

/// Rewrites every comma and the whitespace following it to `", "`.
fn normalize_commas(query: &str) -> String {
    let mut normalized = String::with_capacity(query.len() + 4);
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        normalized.push(c);
        if c == ',' {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            normalized.push(' ');
        }
    }
    normalized
}

/// Splits a word group before each segment-start character (never at offset 0).
fn split_segments(word: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if i > 0 && is_segment_start(c) {
            segments.push(&word[start..i]);
            start = i;
        }
    }
    segments.push(&word[start..]);
    segments
}

/// Builds the regex source for a query.
///
/// Returns an empty string when the query contains nothing but whitespace,
/// which callers treat as "no search".
pub fn build_pattern(query: &str) -> String {
    let normalized = normalize_commas(query);
    let mut pattern = String::new();
    let mut is_word_token = false;

    for (index, word) in normalized.split_whitespace().enumerate() {
        if index > 0 {
            // whitespace between identifiers is significant
            let starts_with_word = word.chars().next().is_some_and(is_word_char);
            pattern.push_str(if is_word_token && starts_with_word {
                REQUIRED_SPACE
            } else {
                OPTIONAL_SPACE
            });
        }

        for segment in split_segments(word) {
            if segment.is_empty() {
                continue;
            }
            pattern.push_str(&regex::escape(segment));
            is_word_token = segment.chars().next_back().is_some_and(is_word_char);
            if is_word_token {
                pattern.push_str(WILDCARD);
            }
        }
    }

    pattern
}

/// A pattern is matched case-sensitively only when the user typed uppercase.
pub fn is_case_sensitive(pattern: &str) -> bool {
    pattern.chars().any(|c| c.is_ascii_uppercase())
}

/// Compiles a pattern source with an explicit case rule.
pub(crate) fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex, SearchError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| SearchError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// The primary and fallback pattern sources derived from one query.
///
/// These travel with the search results so that highlighting uses exactly the
/// patterns the results were matched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPatterns {
    query: String,
    primary: String,
    fallback: String,
}

impl QueryPatterns {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            primary: build_pattern(query),
            fallback: build_pattern(&query.to_lowercase()),
        }
    }

    /// The raw query the patterns were built from.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Whether the primary matcher distinguishes case.
    pub fn is_case_sensitive(&self) -> bool {
        is_case_sensitive(&self.primary)
    }

    /// Compiles both matchers.
    pub fn matchers(&self) -> Result<Matchers, SearchError> {
        Ok(Matchers {
            primary: compile(&self.primary, !self.is_case_sensitive())?,
            fallback: compile(&self.fallback, true)?,
        })
    }
}

/// Compiled matchers for one query.
#[derive(Debug, Clone)]
pub struct Matchers {
    pub primary: Regex,
    pub fallback: Regex,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    const W: &str = r"([a-z0-9_$<>\[\]]*?)";

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n ")]
    fn test_blank_query_yields_empty_pattern(#[case] query: &str) {
        check!(build_pattern(query).is_empty());
    }

    #[rstest]
    #[case("map", format!("map{W}"))]
    #[case("ArrIOOB", format!("Arr{W}I{W}O{W}O{W}B{W}"))]
    #[case("java.lang.String", format!(r"java{W}\.lang{W}\.String{W}"))]
    #[case("put(Object", format!(r"put{W}\(Object{W}"))]
    #[case("List<String>", format!("List{W}<String{W}>"))]
    #[case("a/b", format!("a{W}/b{W}"))]
    fn test_segmentation(#[case] query: &str, #[case] expected: String) {
        check!(build_pattern(query) == expected);
    }

    #[rstest]
    #[case("java lang", format!(r"java{W}\s+lang{W}"))]
    #[case("java .lang", format!(r"java{W}\s*\.lang{W}"))]
    #[case("foo( bar", format!(r"foo{W}\(\s*bar{W}"))]
    fn test_group_separators(#[case] query: &str, #[case] expected: String) {
        check!(build_pattern(query) == expected);
    }

    #[rstest]
    #[case("put(K,V)", "put(K, V)")]
    #[case("put(K,   V)", "put(K, V)")]
    #[case("a,\tb", "a, b")]
    fn test_comma_normalization(#[case] input: &str, #[case] expected: &str) {
        check!(normalize_commas(input) == expected);
    }

    #[test]
    fn test_comma_groups_join_optionally() {
        // "," ends in a non-word char, so the following group joins with \s*
        let pattern = build_pattern("put(K,V)");
        check!(pattern == format!(r"put{W}\(K{W},\s*V{W}\)"));
    }

    #[rstest]
    #[case("ArrIOOB", "ArrayIndexOutOfBoundsException")]
    #[case("HM", "HashMap")]
    #[case("java.lang.String", "java.lang.String")]
    #[case("put(Object", "put(Object, Object)")]
    fn test_camel_case_abbreviation_matches(#[case] query: &str, #[case] name: &str) {
        let matchers = QueryPatterns::new(query).matchers().unwrap();
        check!(matchers.primary.is_match(name));
    }

    #[rstest]
    #[case("java.util.List", "java.util.List")]
    #[case("java.util.List", "JAVA.UTIL.LISTS")]
    #[case("getName", "getname")]
    #[case("StringBuilder", "stringbuilder")]
    fn test_lowercase_pattern_matches_same_text(#[case] query: &str, #[case] name: &str) {
        let primary = compile(&build_pattern(query), true).unwrap();
        let lowered = compile(&build_pattern(&query.to_lowercase()), true).unwrap();
        let a = primary.find(name).map(|m| m.as_str());
        let b = lowered.find(name).map(|m| m.as_str());
        check!(a.is_some());
        check!(a == b);
    }

    #[rstest]
    #[case("foo", false)]
    #[case("Foo", true)]
    #[case("java.lang", false)]
    fn test_case_rule(#[case] query: &str, #[case] expected: bool) {
        check!(QueryPatterns::new(query).is_case_sensitive() == expected);
    }

    #[test]
    fn test_fallback_is_lowercase() {
        let patterns = QueryPatterns::new("HashMap");
        check!(patterns.fallback() == format!("hashmap{W}"));
        check!(patterns.query() == "HashMap");
    }

    #[test]
    fn test_primary_case_rule_applied() {
        let matchers = QueryPatterns::new("map").matchers().unwrap();
        check!(matchers.primary.is_match("HashMap"));

        let matchers = QueryPatterns::new("Map").matchers().unwrap();
        check!(!matchers.primary.is_match("heatmap"));
        check!(matchers.fallback.is_match("heatmap"));
    }
}
