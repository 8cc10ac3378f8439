//! Pattern command handler: shows how a query is translated.

use crate::error::Result;
use crate::search::QueryPatterns;
use std::fmt::Write as _;

/// Describe the primary and fallback patterns for `query`.
pub fn handle_pattern(query: &str) -> Result<String> {
    let patterns = QueryPatterns::new(query);
    if patterns.is_empty() {
        return Ok("Empty query: nothing would be searched.\n".to_string());
    }
    // surface compile errors here rather than at search time
    patterns.matchers()?;

    let mut output = String::new();
    writeln!(output, "primary:  {}", patterns.primary())?;
    writeln!(
        output,
        "          ({})",
        if patterns.is_case_sensitive() {
            "case-sensitive"
        } else {
            "case-insensitive"
        }
    )?;
    writeln!(output, "fallback: {}", patterns.fallback())?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_pattern_output() {
        let output = handle_pattern("HM").unwrap();
        check!(output.contains(r"primary:  H([a-z0-9_$<>\[\]]*?)M"));
        check!(output.contains("(case-sensitive)"));
        check!(output.contains(r"fallback: hm([a-z0-9_$<>\[\]]*?)"));
    }

    #[test]
    fn test_blank_pattern() {
        check!(handle_pattern("   ").unwrap().starts_with("Empty query"));
    }
}
