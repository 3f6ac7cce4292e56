//! Talent prerequisite evaluation.
//!
//! Requirement text such as `"Body (2), Training (1) in Stealth, Military
//! Background"` is split into clauses, each clause is classified against a
//! snapshot of the actor, and the resulting checks are folded into a verdict:
//!
//! - `met`: every enforced check passed and nothing needs review
//! - `unmet`: an enforced check failed
//! - `review`: nothing failed, but at least one clause needs a person
//!
//! Evaluation is pure. The same call works for a saved actor and for a draft
//! built while the player is still choosing talents.

mod aggregate;
mod check;
mod clauses;
mod context;
mod matchers;
mod targets;


pub use aggregate::{
    describe_result, EvaluationResult, PrerequisiteStatus, PREREQ_MET_KEY,
    PREREQ_REVIEW_LABEL_KEY, PREREQ_UNMET_LABEL_KEY,
};
pub use check::{Check, CheckOutcome, ClauseKind};
pub use clauses::{split_requirement, Requirement};
pub use context::{ActorContext, SkillLevels, WeaponRow};
pub use matchers::classify;
pub use targets::{canonical_skill_name, parse_targets, SkillTargets, TargetMode};

use laundry_domain::common::normalize_text;
use laundry_domain::{ActorLike, RulesetCatalogue, TalentLike};

/// Evaluates `talent`'s requirement text against `actor`.
pub fn evaluate_prerequisites<A, T>(
    actor: &A,
    talent: &T,
    catalogue: &RulesetCatalogue,
) -> EvaluationResult
where
    A: ActorLike + ?Sized,
    T: TalentLike + ?Sized,
{
    let requirement_text = normalize_text(talent.requirements());
    let clauses = match split_requirement(&requirement_text) {
        Requirement::Unrestricted => {
            let shown = if requirement_text.is_empty() {
                "None".to_string()
            } else {
                requirement_text
            };
            return EvaluationResult::unrestricted(shown);
        }
        Requirement::Clauses(clauses) => clauses,
    };

    let context = ActorContext::build(actor, talent, catalogue);
    let checks: Vec<Check> = clauses
        .iter()
        .flat_map(|clause| classify(clause, &context))
        .collect();

    let result = EvaluationResult::from_checks(requirement_text, checks);
    tracing::debug!(
        talent = %talent.name(),
        status = %result.status,
        checks = result.checks.len(),
        "Evaluated talent prerequisites"
    );
    result
}
