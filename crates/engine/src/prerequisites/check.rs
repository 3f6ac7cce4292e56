//! Per-clause check results.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Which matcher produced a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    /// A clause reading "none" inside a longer requirement
    NoRequirement,
    Attribute,
    DualTrack,
    SingleTrack,
    Gear,
    TalentDependency,
    /// Known phrase that always needs a person's judgement
    ManualPhrase,
    /// Training/focus clause whose skills could not be resolved
    UnresolvedSkills,
    /// Nothing recognised the clause
    Unrecognised,
}

/// How a check bears on the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckOutcome {
    /// Hard prerequisite; blocks when not passed.
    Enforced { passed: bool },
    /// Informational note; never blocks.
    Informational,
    /// Could not be evaluated mechanically; needs a person.
    ManualReview,
}

/// The evaluated form of one clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Check {
    pub label: String,
    pub kind: ClauseKind,
    pub outcome: CheckOutcome,
}

impl Check {
    pub fn enforced(label: impl Into<String>, kind: ClauseKind, passed: bool) -> Self {
        Self {
            label: label.into(),
            kind,
            outcome: CheckOutcome::Enforced { passed },
        }
    }

    pub fn informational(label: impl Into<String>, kind: ClauseKind) -> Self {
        Self {
            label: label.into(),
            kind,
            outcome: CheckOutcome::Informational,
        }
    }

    pub fn manual(label: impl Into<String>, kind: ClauseKind) -> Self {
        Self {
            label: label.into(),
            kind,
            outcome: CheckOutcome::ManualReview,
        }
    }

    /// Whether failing this check blocks the action.
    pub fn enforce(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Enforced { .. })
    }

    pub fn is_manual(&self) -> bool {
        self.outcome == CheckOutcome::ManualReview
    }

    /// Non-enforced checks always read as passed.
    pub fn passed(&self) -> bool {
        match self.outcome {
            CheckOutcome::Enforced { passed } => passed,
            CheckOutcome::Informational | CheckOutcome::ManualReview => true,
        }
    }
}

/// Flattened to `{label, kind, enforce, manual, passed}` for UI consumers.
impl Serialize for Check {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Check", 5)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("enforce", &self.enforce())?;
        state.serialize_field("manual", &self.is_manual())?;
        state.serialize_field("passed", &self.passed())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_outcome() {
        let failed = Check::enforced("Mind 3+", ClauseKind::Attribute, false);
        assert!(failed.enforce() && !failed.passed() && !failed.is_manual());

        let note = Check::informational("None", ClauseKind::NoRequirement);
        assert!(!note.enforce() && note.passed() && !note.is_manual());

        let review = Check::manual("Military background", ClauseKind::ManualPhrase);
        assert!(!review.enforce() && review.passed() && review.is_manual());
    }

    #[test]
    fn serializes_flat_flags() {
        let json = serde_json::to_value(Check::enforced("Body 2+", ClauseKind::Attribute, true))
            .expect("check serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Body 2+",
                "kind": "attribute",
                "enforce": true,
                "manual": false,
                "passed": true
            })
        );
    }
}
