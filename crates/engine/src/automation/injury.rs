//! Injury and insanity track updates.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use laundry_domain::common::{normalize_key, normalize_text, string_or_empty};

static PSYCHOLOGICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:psychological|phobia|shocked|confused|existential dread|reality denial|traumatised|hallucinations|broken mind|mental|mind)\b",
    )
    .expect("valid regex")
});
static PHYSICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:physical|injury|wound|arm wound|leg wound|head wound|internal injury|brain injury|broken arm|broken leg|bleeding|stunned|incapacitated)\b",
    )
    .expect("valid regex")
});

/// Result of moving a track marker by `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryTrackUpdate {
    pub before: i64,
    pub after: i64,
    pub max: i64,
    pub changed: bool,
    pub at_cap: bool,
}

/// Moves a track marker, keeping it within `0..=max`.
///
/// A track with no boxes (`max <= 0`) is always at cap and never changes.
pub fn compute_injury_track_update(current: i64, max: i64, delta: i64) -> InjuryTrackUpdate {
    let max = max.max(0);
    if max == 0 {
        return InjuryTrackUpdate {
            before: 0,
            after: 0,
            max: 0,
            changed: false,
            at_cap: true,
        };
    }

    let before = current.clamp(0, max);
    let after = before.saturating_add(delta).clamp(0, max);
    InjuryTrackUpdate {
        before,
        after,
        max,
        changed: after != before,
        at_cap: after >= max,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryType {
    Physical,
    Psychological,
}

/// Text describing a critical-injury table result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriticalInjury {
    /// `"injury"`, `"mishap"`, ...
    #[serde(deserialize_with = "string_or_empty")]
    pub effect_type: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub outcome_text: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub status_id: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub table_name: String,
}

/// Mishaps are always psychological; otherwise the wording decides, with
/// psychological terms taking precedence. Defaults to physical.
pub fn classify_critical_injury_type(injury: &CriticalInjury) -> InjuryType {
    if normalize_key(&injury.effect_type) == "mishap" {
        return InjuryType::Psychological;
    }

    let combined = normalize_text(
        &[
            injury.name.as_str(),
            injury.outcome_text.as_str(),
            injury.status_id.as_str(),
            injury.table_name.as_str(),
        ]
        .join(" "),
    );
    if PSYCHOLOGICAL_RE.is_match(&combined) {
        InjuryType::Psychological
    } else {
        // Physical wording and no wording both land here.
        if !combined.is_empty() && !PHYSICAL_RE.is_match(&combined) {
            tracing::debug!(text = %combined, "No injury keywords; treating as physical");
        }
        InjuryType::Physical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_respects_cap() {
        let rising = compute_injury_track_update(2, 3, 1);
        assert_eq!((rising.before, rising.after), (2, 3));
        assert!(rising.at_cap && rising.changed);

        let capped = compute_injury_track_update(3, 3, 1);
        assert_eq!((capped.before, capped.after), (3, 3));
        assert!(!capped.changed);
    }

    #[test]
    fn track_clamps_out_of_range_values() {
        let healed = compute_injury_track_update(7, 4, -10);
        assert_eq!((healed.before, healed.after), (4, 0));
        assert!(!healed.at_cap);
    }

    #[test]
    fn empty_track_is_at_cap() {
        let update = compute_injury_track_update(2, 0, 1);
        assert_eq!(
            update,
            InjuryTrackUpdate {
                before: 0,
                after: 0,
                max: 0,
                changed: false,
                at_cap: true
            }
        );
    }

    #[test]
    fn mishap_is_psychological() {
        let injury = CriticalInjury {
            effect_type: " Mishap ".into(),
            name: "Leg Wound".into(),
            ..CriticalInjury::default()
        };
        assert_eq!(classify_critical_injury_type(&injury), InjuryType::Psychological);
    }

    #[test]
    fn wording_decides_type() {
        let phobia = CriticalInjury {
            name: "Phobia".into(),
            outcome_text: "Develops a fear of the dark".into(),
            ..CriticalInjury::default()
        };
        assert_eq!(classify_critical_injury_type(&phobia), InjuryType::Psychological);

        let wound = CriticalInjury {
            name: "Arm Wound".into(),
            table_name: "Critical Injuries".into(),
            ..CriticalInjury::default()
        };
        assert_eq!(classify_critical_injury_type(&wound), InjuryType::Physical);

        // "minded" is not the word "mind"
        let unrelated = CriticalInjury {
            outcome_text: "Bloody-minded".into(),
            ..CriticalInjury::default()
        };
        assert_eq!(classify_critical_injury_type(&unrelated), InjuryType::Physical);
        assert_eq!(
            classify_critical_injury_type(&CriticalInjury::default()),
            InjuryType::Physical
        );
    }
}
