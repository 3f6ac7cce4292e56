//! Skill-target parser for training/focus clauses.
//!
//! `"either Academics or Bureaucracy skill, a ranged weapon"` resolves to
//! `Any [Academics, Bureaucracy]` with one extra clause `"a ranged weapon"`.

use regex_lite::Regex;
use std::sync::LazyLock;

use laundry_domain::common::{dedupe_case_insensitive, normalize_key, normalize_text};

use super::clauses::split_clauses;

static FILLER_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:either|skill)\b").expect("valid regex"));
static OR_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bor\b").expect("valid regex"));
static CONJUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:or|and)\s+").expect("valid regex"));

/// How multiple named skills combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Every named skill must qualify.
    All,
    /// Any one named skill qualifies.
    Any,
}

impl TargetMode {
    /// Joiner used when rendering the skill list in a label.
    pub fn joiner(&self) -> &'static str {
        match self {
            TargetMode::All => " and ",
            TargetMode::Any => " or ",
        }
    }

    /// Combines per-skill results.
    pub fn combine<F>(&self, skills: &[String], mut qualifies: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        match self {
            TargetMode::All => skills.iter().all(|skill| qualifies(skill)),
            TargetMode::Any => skills.iter().any(|skill| qualifies(skill)),
        }
    }
}

/// Parsed target list of a training/focus clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTargets {
    pub mode: TargetMode,
    /// Canonical skill names, deduplicated, in source order.
    pub skills: Vec<String>,
    /// Trailing comma-separated fragments, classified as separate clauses.
    pub extras: Vec<String>,
}

impl SkillTargets {
    pub fn label(&self) -> String {
        self.skills.join(self.mode.joiner())
    }
}

/// Resolves the target text after "in" against the known skill names.
///
/// Unresolvable tokens are dropped rather than guessed; callers treat an empty
/// skill list as an unparseable clause.
pub fn parse_targets(text: &str, skill_names: &[String]) -> SkillTargets {
    let cleaned = normalize_text(text);
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    let mut segments = split_clauses(cleaned).into_iter();

    let Some(first) = segments.next() else {
        return SkillTargets {
            mode: TargetMode::All,
            skills: Vec::new(),
            extras: Vec::new(),
        };
    };

    let main = FILLER_WORDS_RE.replace_all(&first, "");
    let main = main.trim();
    let mode = if OR_WORD_RE.is_match(main) {
        TargetMode::Any
    } else {
        TargetMode::All
    };

    let resolved = CONJUNCTION_RE
        .split(main)
        .filter_map(|token| canonical_skill_name(token, skill_names));

    SkillTargets {
        mode,
        skills: dedupe_case_insensitive(resolved),
        extras: segments.collect(),
    }
}

/// Maps free text to a catalogue skill name, case-insensitively.
pub fn canonical_skill_name(token: &str, skill_names: &[String]) -> Option<String> {
    let key = normalize_key(token);
    match key.as_str() {
        "" => None,
        "close combat" => Some("Close Combat".to_string()),
        "ranged" => Some("Ranged".to_string()),
        _ => skill_names
            .iter()
            .find(|skill| skill.to_lowercase() == key)
            .cloned(),
    }
}
