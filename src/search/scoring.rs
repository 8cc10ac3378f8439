//! Search relevance and ranking.
//!
//! Scores are "lower is better". The integral part comes from where the match is
//! anchored and whether it falls inside a qualifier; the fractional part (delta
//! divided by 200) only breaks ties between otherwise equal matches.

use super::pattern::is_word_char;
use crate::types::Category;
use regex::{Captures, Match, Regex};

/// Score of a candidate the pattern did not match.
pub const NO_MATCH: f64 = 65535.0;

/// Divisor that keeps the completeness delta below the boundary scores.
const DELTA_SCALE: f64 = 200.0;

/// Added for a type whose other camel-case words went unmatched.
const CAMEL_CASE_PENALTY: usize = 5;

/// Added for a match inside a qualifier rather than the name itself.
const PERIPHERAL_PENALTY: u8 = 2;

/// A successful match of a query pattern against a candidate's search name.
#[derive(Debug)]
pub struct NameMatch<'h> {
    haystack: &'h str,
    captures: Captures<'h>,
}

impl<'h> NameMatch<'h> {
    /// Runs `matcher` against `haystack`, returning the leftmost match.
    pub fn find(matcher: &Regex, haystack: &'h str) -> Option<Self> {
        matcher
            .captures(haystack)
            .map(|captures| Self { haystack, captures })
    }

    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The overall match.
    pub fn whole(&self) -> Match<'h> {
        self.captures.get_match()
    }

    /// Total characters skipped by the wildcard groups.
    fn skipped_chars(&self) -> usize {
        self.captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().chars().count())
            .sum()
    }
}

/// `^[A-Z0-9_$]+$`: constant-style names, where uppercase carries no word boundary.
fn is_constant_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '$')
}

/// 0 at a true word boundary, 1 at an underscore or camel-case hump, 2 mid-word.
pub(crate) fn left_boundary_score(input: &str, index: usize) -> u8 {
    let previous = input[..index].chars().next_back();
    let first = input[index..].chars().next();

    if index == 0 || previous.is_some_and(|c| !is_word_char(c)) || first == Some('_') {
        0
    } else if previous == Some('_')
        || (first.is_some_and(|c| !c.is_lowercase()) && !is_constant_name(input))
    {
        1
    } else {
        2
    }
}

/// Ranks a match for the given category. Lower is better; `None` yields [`NO_MATCH`].
pub fn rank_match(name_match: Option<&NameMatch<'_>>, category: Category) -> f64 {
    let Some(name_match) = name_match else {
        return NO_MATCH;
    };

    let input = name_match.haystack();
    let whole = name_match.whole();
    let index = whole.start();
    let match_end = whole.end();

    let left_boundary = left_boundary_score(input, index);

    let left_paren = input.find('(');
    let end_of_name = left_paren.unwrap_or(input.len());

    // exclude peripheral matches
    let mut peripheral = 0;
    if !matches!(category, Category::Module | Category::SearchTag) {
        let delimiter = category.qualifier_delimiter();
        if left_paren.is_some_and(|paren| paren < index) {
            peripheral += PERIPHERAL_PENALTY;
        } else if input[..end_of_name]
            .rfind(delimiter)
            .is_some_and(|last| last >= match_end)
        {
            peripheral += PERIPHERAL_PENALTY;
        }
    }

    let mut delta = usize::from(whole.len() != end_of_name);
    delta += name_match.skipped_chars();

    if category == Category::Type {
        if input[match_end..].bytes().any(|b| b.is_ascii_uppercase()) {
            delta += CAMEL_CASE_PENALTY;
        }
        if input[..index].bytes().any(|b| b.is_ascii_uppercase()) {
            delta += CAMEL_CASE_PENALTY;
        }
    }

    f64::from(left_boundary + peripheral) + delta as f64 / DELTA_SCALE
}
