//! Outcome fingerprints and search tags.
//!
//! A fingerprint identifies an applied table outcome so the same result is
//! not applied twice to one actor. Two outcomes with the same wording and the
//! same modifier changes (in any order) share a fingerprint.

use regex_lite::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use laundry_domain::common::{
    dedupe_case_insensitive, int_or_zero, normalize_key, normalize_text, string_or_empty,
};

/// Priority assumed for a modifier change that does not state one.
pub const DEFAULT_MODIFIER_PRIORITY: i64 = 20;

static TAG_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\- ]+").expect("valid regex"));

fn default_mode() -> String {
    "ADD".to_string()
}

fn default_priority() -> i64 {
    DEFAULT_MODIFIER_PRIORITY
}

/// One change an active effect makes to an actor field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModifierChange {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub key: String,
    #[serde(default = "default_mode", deserialize_with = "string_or_empty")]
    pub mode: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub value: String,
    #[serde(default = "default_priority", deserialize_with = "int_or_zero")]
    pub priority: i64,
}

impl ModifierChange {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mode: default_mode(),
            value: value.into(),
            priority: DEFAULT_MODIFIER_PRIORITY,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// `key|MODE|value|priority` with case kept; fingerprints order changes by it.
    fn sort_key(&self) -> String {
        let mode = normalize_text(&self.mode).to_uppercase();
        let mode = if mode.is_empty() { "ADD".to_string() } else { mode };
        format!(
            "{}|{}|{}|{}",
            normalize_text(&self.key),
            mode,
            normalize_text(&self.value),
            self.priority
        )
    }

    /// `key:mode:value:priority`, lower-cased. A blank mode reads as ADD.
    fn token(&self) -> String {
        let mode = normalize_key(&self.mode);
        let mode = if mode.is_empty() { "add".to_string() } else { mode };
        format!(
            "{}:{}:{}:{}",
            normalize_key(&self.key),
            mode,
            normalize_key(&self.value),
            self.priority
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutcomeDescriptor {
    #[serde(deserialize_with = "string_or_empty")]
    pub effect_type: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub effect_name: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub outcome_text: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub status_id: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub source_tag: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub table_name: String,
    pub modifier_changes: Vec<ModifierChange>,
}

/// Pipe-joined normalised fields followed by the sorted change tokens.
pub fn build_outcome_fingerprint(outcome: &OutcomeDescriptor) -> String {
    let mut ordered: Vec<&ModifierChange> = outcome.modifier_changes.iter().collect();
    ordered.sort_by_cached_key(|change| collation_key(&change.sort_key()));
    let changes: Vec<String> = ordered.into_iter().map(ModifierChange::token).collect();

    [
        normalize_key(&outcome.effect_type),
        normalize_key(&outcome.effect_name),
        normalize_key(&outcome.outcome_text),
        normalize_key(&outcome.status_id),
        normalize_key(&outcome.source_tag),
        normalize_key(&outcome.table_name),
        changes.join(","),
    ]
    .join("|")
}

/// Locale-style ordering: punctuation and symbols before digits before
/// letters, letters compared case-insensitively, lower case first on ties.
fn collation_key(text: &str) -> (Vec<(u8, char)>, Vec<bool>) {
    let primary = text
        .chars()
        .map(|c| {
            let class = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (class, c.to_lowercase().next().unwrap_or(c))
        })
        .collect();
    let tertiary = text.chars().map(char::is_uppercase).collect();
    (primary, tertiary)
}

/// Cleans tag text and merges `values` with `fallback`, first spelling wins.
///
/// Punctuation other than `-` and `_` is dropped and whitespace collapsed.
///
/// ```
/// use laundry_engine::automation::normalize_search_tags;
///
/// let tags = normalize_search_tags(["Injury!", "  head wound "], ["injury", "Table"]);
/// assert_eq!(tags, vec!["Injury", "head wound", "Table"]);
/// ```
pub fn normalize_search_tags<I, J, S, T>(values: I, fallback: J) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let values = values.into_iter().map(|value| clean_tag(value.as_ref()));
    let fallback = fallback.into_iter().map(|value| clean_tag(value.as_ref()));
    dedupe_case_insensitive(values.chain(fallback))
}

fn clean_tag(value: &str) -> String {
    normalize_text(&TAG_PUNCTUATION_RE.replace_all(&normalize_text(value), " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(changes: Vec<ModifierChange>) -> OutcomeDescriptor {
        OutcomeDescriptor {
            effect_type: "Injury".into(),
            effect_name: " Arm  Wound ".into(),
            outcome_text: "Difficulty +1 to Close Combat".into(),
            table_name: "Critical Injuries".into(),
            modifier_changes: changes,
            ..OutcomeDescriptor::default()
        }
    }

    #[test]
    fn fingerprint_layout() {
        let fingerprint = build_outcome_fingerprint(&outcome(vec![ModifierChange::new(
            "system.skills.closeCombat.dn",
            "1",
        )]));
        assert_eq!(
            fingerprint,
            "injury|arm wound|difficulty +1 to close combat|||critical injuries|system.skills.closecombat.dn:add:1:20"
        );
    }

    #[test]
    fn change_order_does_not_matter() {
        let a = ModifierChange::new("b.key", "2").with_mode("override");
        let b = ModifierChange::new("a.key", "1").with_priority(5);
        assert_eq!(
            build_outcome_fingerprint(&outcome(vec![a.clone(), b.clone()])),
            build_outcome_fingerprint(&outcome(vec![b, a]))
        );
    }

    #[test]
    fn changes_sort_symbols_before_letters() {
        let fingerprint = build_outcome_fingerprint(&OutcomeDescriptor {
            modifier_changes: vec![ModifierChange::new("ab", "1"), ModifierChange::new("a~", "1")],
            ..OutcomeDescriptor::default()
        });
        assert_eq!(fingerprint, "||||||a~:add:1:20,ab:add:1:20");
    }

    #[test]
    fn changes_sort_case_insensitively() {
        let fingerprint = build_outcome_fingerprint(&OutcomeDescriptor {
            modifier_changes: vec![
                ModifierChange::new("Beta", "1"),
                ModifierChange::new("alpha", "2"),
                ModifierChange::new("ALPHA", "1"),
            ],
            ..OutcomeDescriptor::default()
        });
        assert_eq!(fingerprint, "||||||alpha:add:1:20,alpha:add:2:20,beta:add:1:20");
    }

    #[test]
    fn change_defaults_when_deserialized() {
        let change: ModifierChange =
            serde_json::from_str(r#"{"key": "system.attributes.body.value", "value": -1}"#)
                .expect("change parses");
        assert_eq!(change.mode, "ADD");
        assert_eq!(change.priority, DEFAULT_MODIFIER_PRIORITY);
        assert_eq!(change.value, "-1");
    }

    #[test]
    fn tags_are_cleaned_and_deduplicated() {
        let tags = normalize_search_tags(
            vec!["  Mind-Burn!! ", "mind-burn", "", "k_7 (classified)"],
            Vec::<String>::new(),
        );
        assert_eq!(tags, vec!["Mind-Burn", "k_7 classified"]);
    }
}
