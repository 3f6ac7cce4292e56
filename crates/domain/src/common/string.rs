//! String normalisation utilities.
//!
//! Every comparison in the ruleset goes through [`normalize_text`] and
//! [`normalize_key`] so that whitespace and letter case never decide a match.

/// Collapses runs of whitespace into single spaces and trims both ends.
///
/// # Examples
///
/// ```
/// use laundry_domain::common::normalize_text;
///
/// assert_eq!(normalize_text("  Close \t Combat \n"), "Close Combat");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cased [`normalize_text`], used for every map key and set member.
///
/// # Examples
///
/// ```
/// use laundry_domain::common::normalize_key;
///
/// assert_eq!(normalize_key("  Fast   Talk "), "fast talk");
/// ```
pub fn normalize_key(value: &str) -> String {
    normalize_text(value).to_lowercase()
}

/// Normalises a clause and removes one leading `and` conjunction.
///
/// `"and Mind (2)"` becomes `"Mind (2)"`; a bare `"and"` is left alone.
pub fn strip_leading_and(value: &str) -> String {
    let normalized = normalize_text(value);
    match normalized.split_once(' ') {
        Some((head, rest)) if head.eq_ignore_ascii_case("and") => rest.trim().to_string(),
        _ => normalized,
    }
}

/// Removes duplicates by case-insensitive key, keeping first-seen order.
///
/// Blank entries are dropped.
pub fn dedupe_case_insensitive<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let value = value.into();
        let key = normalize_key(&value);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(value);
    }
    out
}
