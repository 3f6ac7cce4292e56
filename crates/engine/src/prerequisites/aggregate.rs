//! Verdict aggregation and human-readable summaries.

use serde::Serialize;

use super::check::Check;
use crate::i18n::Localize;

pub const PREREQ_MET_KEY: &str = "LAUNDRY.PrereqMet";
pub const PREREQ_UNMET_LABEL_KEY: &str = "LAUNDRY.PrereqUnmetLabel";
pub const PREREQ_REVIEW_LABEL_KEY: &str = "LAUNDRY.PrereqReviewLabel";

/// Overall verdict for one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrerequisiteStatus {
    /// Every enforced check passed and nothing needs review.
    Met,
    /// At least one enforced check failed.
    Unmet,
    /// Enforced checks passed but a person has to look at something.
    Review,
}

impl PrerequisiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrerequisiteStatus::Met => "met",
            PrerequisiteStatus::Unmet => "unmet",
            PrerequisiteStatus::Review => "review",
        }
    }
}

impl std::fmt::Display for PrerequisiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating a talent's requirement text against an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Normalised requirement text, `"None"` when there was none.
    pub requirement_text: String,
    pub status: PrerequisiteStatus,
    /// True when no enforced check failed.
    pub enforce_met: bool,
    /// Labels of failed enforced checks, in clause order.
    pub unmet: Vec<String>,
    /// Labels of checks that need manual review, in clause order.
    pub manual: Vec<String>,
    pub checks: Vec<Check>,
}

impl EvaluationResult {
    /// Result for a talent without prerequisites.
    pub fn unrestricted(requirement_text: impl Into<String>) -> Self {
        Self {
            requirement_text: requirement_text.into(),
            status: PrerequisiteStatus::Met,
            enforce_met: true,
            unmet: Vec::new(),
            manual: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Derives the verdict from evaluated checks.
    pub fn from_checks(requirement_text: impl Into<String>, checks: Vec<Check>) -> Self {
        let unmet: Vec<String> = checks
            .iter()
            .filter(|check| check.enforce() && !check.passed())
            .map(|check| check.label.clone())
            .collect();
        let manual: Vec<String> = checks
            .iter()
            .filter(|check| check.is_manual())
            .map(|check| check.label.clone())
            .collect();

        let status = if !unmet.is_empty() {
            PrerequisiteStatus::Unmet
        } else if !manual.is_empty() {
            PrerequisiteStatus::Review
        } else {
            PrerequisiteStatus::Met
        };

        Self {
            requirement_text: requirement_text.into(),
            status,
            enforce_met: unmet.is_empty(),
            unmet,
            manual,
            checks,
        }
    }
}

/// One-line summary: `"Unmet: a; b | Needs review: c"`, or the met message
/// when both lists are empty.
pub fn describe_result(result: &EvaluationResult, i18n: Option<&dyn Localize>) -> String {
    let text = |key: &str, fallback: &str| {
        i18n.and_then(|i18n| i18n.localize(key))
            .unwrap_or_else(|| fallback.to_string())
    };

    if result.unmet.is_empty() && result.manual.is_empty() {
        return text(PREREQ_MET_KEY, "Prerequisites met");
    }

    let mut parts = Vec::with_capacity(2);
    if !result.unmet.is_empty() {
        parts.push(format!(
            "{}: {}",
            text(PREREQ_UNMET_LABEL_KEY, "Unmet"),
            result.unmet.join("; ")
        ));
    }
    if !result.manual.is_empty() {
        parts.push(format!(
            "{}: {}",
            text(PREREQ_REVIEW_LABEL_KEY, "Needs review"),
            result.manual.join("; ")
        ));
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prerequisites::check::ClauseKind;
    use std::collections::HashMap;

    #[test]
    fn status_precedence() {
        let result = EvaluationResult::from_checks(
            "x",
            vec![
                Check::manual("Military background", ClauseKind::ManualPhrase),
                Check::enforced("Mind 3+", ClauseKind::Attribute, false),
            ],
        );
        assert_eq!(result.status, PrerequisiteStatus::Unmet);
        assert!(!result.enforce_met);
        assert_eq!(result.unmet, vec!["Mind 3+".to_string()]);
        assert_eq!(result.manual, vec!["Military background".to_string()]);

        let review = EvaluationResult::from_checks(
            "x",
            vec![Check::manual("Odd clause", ClauseKind::Unrecognised)],
        );
        assert_eq!(review.status, PrerequisiteStatus::Review);
        assert!(review.enforce_met);
    }

    #[test]
    fn informational_checks_do_not_affect_status() {
        let result = EvaluationResult::from_checks(
            "Body (1), none",
            vec![
                Check::enforced("Body 1+", ClauseKind::Attribute, true),
                Check::informational("None", ClauseKind::NoRequirement),
            ],
        );
        assert_eq!(result.status, PrerequisiteStatus::Met);
        assert!(result.unmet.is_empty() && result.manual.is_empty());
    }

    #[test]
    fn describe_orders_unmet_before_review() {
        let result = EvaluationResult::from_checks(
            "x",
            vec![
                Check::manual("Military background", ClauseKind::ManualPhrase),
                Check::enforced("Mind 3+", ClauseKind::Attribute, false),
                Check::enforced("Licence Talent", ClauseKind::TalentDependency, false),
            ],
        );
        assert_eq!(
            describe_result(&result, None),
            "Unmet: Mind 3+; Licence Talent | Needs review: Military background"
        );
    }

    #[test]
    fn describe_met_and_localized() {
        let met = EvaluationResult::unrestricted("None");
        assert_eq!(describe_result(&met, None), "Prerequisites met");

        let table: HashMap<String, String> = [
            (PREREQ_MET_KEY, "Voraussetzungen erfüllt"),
            (PREREQ_UNMET_LABEL_KEY, "Nicht erfüllt"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(describe_result(&met, Some(&table)), "Voraussetzungen erfüllt");

        let review = EvaluationResult::from_checks(
            "x",
            vec![
                Check::enforced("Body 2+", ClauseKind::Attribute, false),
                Check::manual("Odd", ClauseKind::Unrecognised),
            ],
        );
        // Missing keys fall back to English.
        assert_eq!(
            describe_result(&review, Some(&table)),
            "Nicht erfüllt: Body 2+ | Needs review: Odd"
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(EvaluationResult::unrestricted("None"))
            .expect("result serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "requirementText": "None",
                "status": "met",
                "enforceMet": true,
                "unmet": [],
                "manual": [],
                "checks": []
            })
        );
    }
}
