//! Requirement text tokenizer.

use laundry_domain::common::{normalize_text, strip_leading_and};

/// A requirement string split into independently evaluated clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Empty text or the literal "none": nothing to check.
    Unrestricted,
    /// Clauses in source order.
    Clauses(Vec<String>),
}

/// Splits requirement text on commas.
///
/// Whitespace is collapsed, one leading "and" is stripped from each clause,
/// and empty clauses are dropped.
pub fn split_requirement(text: &str) -> Requirement {
    let normalized = normalize_text(text);
    if normalized.is_empty() || normalized.eq_ignore_ascii_case("none") {
        return Requirement::Unrestricted;
    }
    Requirement::Clauses(split_clauses(&normalized))
}

/// Comma split used both for whole requirements and for the trailing
/// fragments of a skill clause.
pub(crate) fn split_clauses(text: &str) -> Vec<String> {
    text.split(',')
        .map(strip_leading_and)
        .filter(|clause| !clause.is_empty())
        .collect()
}
