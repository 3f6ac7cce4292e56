//! Clause classifier.
//!
//! Matchers run in a fixed order and the first one that recognises the
//! clause's structure decides its checks. The last arm never denies: anything
//! unrecognised becomes a manual-review check carrying the clause verbatim.

use regex_lite::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

use laundry_domain::common::{normalize_key, strip_leading_and};
use laundry_domain::Attribute;

use super::check::{Check, ClauseKind};
use super::context::{ActorContext, SkillLevels, WeaponRow};
use super::targets::{parse_targets, SkillTargets};

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(body|mind|spirit)\s*\((\d+)\)$").expect("valid regex")
});
static TRAINING_AND_FOCUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^training\s*\((\d+)\)\s+and\s+focus\s*\((\d+)\)\s+in\s+(.+)$")
        .expect("valid regex")
});
static FOCUS_AND_TRAINING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^focus\s*\((\d+)\)\s+and\s+training\s*\((\d+)\)\s+in\s+(.+)$")
        .expect("valid regex")
});
static TRAINING_OR_FOCUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^training\s*\((\d+)\)\s+or\s+focus\s*\((\d+)\)\s+in\s+(.+)$")
        .expect("valid regex")
});
static SINGLE_TRACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(training|focus)\s*\((\d+)\)\s+in\s+(.+)$").expect("valid regex")
});

// Gear patterns run against the lower-cased clause.
static RANGED_WEAPON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:a\s+)?ranged weapons?\.?$").expect("valid regex"));
static CRUSHING_WEAPON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:a\s+)?crushing weapons?\.?$").expect("valid regex"));
static SLASHING_WEAPON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:a\s+)?slashing weapons?\.?$").expect("valid regex"));
static DISGUISE_KIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:a\s+)?disguise kits?\.?$").expect("valid regex"));

const MANUAL_PHRASES: &[(&str, &str)] = &[
    ("military background", "Military background"),
    ("suitable tools and supplies", "Suitable tools and supplies"),
];

type Matcher = fn(&str, &ActorContext) -> Option<Vec<Check>>;

/// Matchers in priority order. Returning `Some(vec![])` claims the clause
/// without producing a check.
const MATCHERS: &[(&str, Matcher)] = &[
    ("attribute", match_attribute),
    ("training_and_focus", match_training_and_focus),
    ("focus_and_training", match_focus_and_training),
    ("training_or_focus", match_training_or_focus),
    ("single_track", match_single_track),
    ("gear", match_gear),
    ("talent_dependency", match_talent_dependency),
    ("manual_phrase", match_manual_phrase),
];

/// Evaluates one clause against the actor snapshot.
pub fn classify(raw_clause: &str, context: &ActorContext) -> Vec<Check> {
    let clause = strip_leading_and(raw_clause);
    if clause.is_empty() {
        return Vec::new();
    }
    if clause.eq_ignore_ascii_case("none") {
        return vec![Check::informational("None", ClauseKind::NoRequirement)];
    }

    for (name, matcher) in MATCHERS {
        if let Some(checks) = matcher(&clause, context) {
            tracing::trace!(clause = %clause, matcher = *name, checks = checks.len(), "Clause matched");
            return checks;
        }
    }

    tracing::debug!(clause = %clause, "Unrecognised prerequisite clause; needs review");
    vec![Check::manual(clause, ClauseKind::Unrecognised)]
}

fn threshold(caps: &Captures<'_>, group: usize) -> Option<i64> {
    caps.get(group)?.as_str().parse().ok()
}

fn match_attribute(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let caps = ATTRIBUTE_RE.captures(clause)?;
    let attribute = Attribute::from_str(caps.get(1)?.as_str()).ok()?;
    let min = threshold(&caps, 2)?;
    Some(vec![Check::enforced(
        format!("{} {}+", attribute.label(), min),
        ClauseKind::Attribute,
        context.attribute(attribute) >= min,
    )])
}

/// How the two tracks of a dual-track clause combine for one skill.
#[derive(Debug, Clone, Copy)]
enum TrackJoin {
    Both,
    Either,
}

impl TrackJoin {
    fn word(self) -> &'static str {
        match self {
            TrackJoin::Both => "and",
            TrackJoin::Either => "or",
        }
    }

    fn qualifies(self, levels: SkillLevels, training: i64, focus: i64) -> bool {
        match self {
            TrackJoin::Both => levels.training >= training && levels.focus >= focus,
            TrackJoin::Either => levels.training >= training || levels.focus >= focus,
        }
    }
}

fn match_training_and_focus(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let caps = TRAINING_AND_FOCUS_RE.captures(clause)?;
    let training = threshold(&caps, 1)?;
    let focus = threshold(&caps, 2)?;
    Some(dual_track(TrackJoin::Both, training, focus, caps.get(3)?.as_str(), context))
}

fn match_focus_and_training(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let caps = FOCUS_AND_TRAINING_RE.captures(clause)?;
    let focus = threshold(&caps, 1)?;
    let training = threshold(&caps, 2)?;
    Some(dual_track(TrackJoin::Both, training, focus, caps.get(3)?.as_str(), context))
}

fn match_training_or_focus(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let caps = TRAINING_OR_FOCUS_RE.captures(clause)?;
    let training = threshold(&caps, 1)?;
    let focus = threshold(&caps, 2)?;
    Some(dual_track(TrackJoin::Either, training, focus, caps.get(3)?.as_str(), context))
}

fn dual_track(
    join: TrackJoin,
    training: i64,
    focus: i64,
    target_text: &str,
    context: &ActorContext,
) -> Vec<Check> {
    let targets = parse_targets(target_text, context.skill_names());
    if targets.skills.is_empty() {
        return vec![unresolved(target_text)];
    }

    let passed = targets.mode.combine(&targets.skills, |skill| {
        join.qualifies(context.skill(skill), training, focus)
    });
    let label = format!(
        "Training {}+ {} Focus {}+ in {}",
        training,
        join.word(),
        focus,
        targets.label()
    );
    with_extras(
        Check::enforced(label, ClauseKind::DualTrack, passed),
        &targets,
        context,
    )
}

fn match_single_track(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let caps = SINGLE_TRACK_RE.captures(clause)?;
    let is_focus = caps.get(1)?.as_str().eq_ignore_ascii_case("focus");
    let min = threshold(&caps, 2)?;
    let target_text = caps.get(3)?.as_str();

    let targets = parse_targets(target_text, context.skill_names());
    if targets.skills.is_empty() {
        return Some(vec![unresolved(target_text)]);
    }

    let passed = targets.mode.combine(&targets.skills, |skill| {
        let levels = context.skill(skill);
        let value = if is_focus { levels.focus } else { levels.training };
        value >= min
    });
    let track = if is_focus { "Focus" } else { "Training" };
    let label = format!("{} {}+ in {}", track, min, targets.label());
    Some(with_extras(
        Check::enforced(label, ClauseKind::SingleTrack, passed),
        &targets,
        context,
    ))
}

fn unresolved(target_text: &str) -> Check {
    let label = strip_leading_and(target_text);
    tracing::debug!(targets = %label, "No known skill in training/focus clause");
    Check::manual(label, ClauseKind::UnresolvedSkills)
}

fn with_extras(head: Check, targets: &SkillTargets, context: &ActorContext) -> Vec<Check> {
    let mut checks = vec![head];
    for extra in &targets.extras {
        checks.extend(classify(extra, context));
    }
    checks
}

fn match_gear(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let lowered = clause.to_lowercase();
    let weapons = context.weapons();

    let (label, passed) = if RANGED_WEAPON_RE.is_match(&lowered) {
        ("Ranged weapon", weapons.iter().any(is_ranged))
    } else if CRUSHING_WEAPON_RE.is_match(&lowered) {
        ("Crushing weapon", has_trait(weapons, "crushing"))
    } else if SLASHING_WEAPON_RE.is_match(&lowered) {
        ("Slashing weapon", has_trait(weapons, "slashing"))
    } else if DISGUISE_KIT_RE.is_match(&lowered) {
        ("Disguise Kit", context.owns_gear("disguise kit"))
    } else {
        return None;
    };

    Some(vec![Check::enforced(label, ClauseKind::Gear, passed)])
}

fn is_ranged(weapon: &WeaponRow) -> bool {
    weapon.linked_skill == "ranged"
        || (!weapon.range_text.is_empty() && !weapon.range_text.contains("close"))
}

fn has_trait(weapons: &[WeaponRow], trait_name: &str) -> bool {
    weapons
        .iter()
        .any(|weapon| weapon.traits_text.contains(trait_name))
}

fn match_talent_dependency(clause: &str, context: &ActorContext) -> Option<Vec<Check>> {
    let key = normalize_key(clause);
    if context.is_self(clause) {
        if !context.is_known_talent(&key) {
            return None;
        }
        tracing::warn!(clause = %clause, "Talent lists itself as a prerequisite; skipping clause");
        return Some(Vec::new());
    }

    if key == "licence" || key == "license" {
        let owned = context.owns_talent("licence") || context.owns_talent("license");
        return Some(vec![Check::enforced(
            "Licence Talent",
            ClauseKind::TalentDependency,
            owned,
        )]);
    }

    if context.owns_talent(&key) {
        return Some(vec![Check::enforced(
            clause,
            ClauseKind::TalentDependency,
            true,
        )]);
    }
    if context.is_known_talent(&key) {
        return Some(vec![Check::enforced(
            clause,
            ClauseKind::TalentDependency,
            false,
        )]);
    }
    None
}

fn match_manual_phrase(clause: &str, _context: &ActorContext) -> Option<Vec<Check>> {
    let lowered = clause.to_lowercase();
    MANUAL_PHRASES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, label)| vec![Check::manual(*label, ClauseKind::ManualPhrase)])
}
