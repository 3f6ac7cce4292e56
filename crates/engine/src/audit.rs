//! Catalogue content checks.
//!
//! Run against a ruleset catalogue before it ships. Errors are data that rules
//! code cannot use correctly; warnings are content a person should look at.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use laundry_domain::common::{dedupe_case_insensitive, normalize_key, normalize_text};
use laundry_domain::{ActorRecord, Attribute, RulesetCatalogue};

use crate::automation::DEFAULT_DN;
use crate::prerequisites::{classify, split_requirement, ActorContext, ClauseKind, Requirement};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl AuditReport {
    /// True when there are no errors; warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn audit_catalogue(catalogue: &RulesetCatalogue) -> AuditReport {
    let mut report = AuditReport::default();

    for skill in &catalogue.skills {
        let name = normalize_text(&skill.name);
        if name.is_empty() {
            report.errors.push("Skill with empty name detected.".to_string());
        }
        let attribute = normalize_key(&skill.system.attribute);
        if Attribute::from_str(&attribute).is_err() {
            report.errors.push(format!(
                "Skill \"{}\" has invalid attribute \"{}\".",
                display_name(&name, "<unnamed>"),
                attribute
            ));
        }
    }

    for talent in &catalogue.talents {
        if normalize_text(&talent.name).is_empty() {
            report.errors.push("Talent with empty name detected.".to_string());
        }
    }

    audit_assignments(catalogue, &mut report);
    audit_weapons(catalogue, &mut report);
    audit_spells(catalogue, &mut report);
    audit_armour(catalogue, &mut report);

    let sections: [(&str, Vec<&str>); 6] = [
        ("skills", catalogue.skills.iter().map(|e| e.name.as_str()).collect()),
        ("talents", catalogue.talents.iter().map(|e| e.name.as_str()).collect()),
        ("assignments", catalogue.assignments.iter().map(|e| e.name.as_str()).collect()),
        ("weapons", catalogue.weapons.iter().map(|e| e.name.as_str()).collect()),
        ("spells", catalogue.spells.iter().map(|e| e.name.as_str()).collect()),
        ("armour", catalogue.armour.iter().map(|e| e.name.as_str()).collect()),
    ];
    for (section, names) in sections {
        if let Some(message) = duplicate_names(section, names.into_iter()) {
            report.errors.push(message);
        }
    }

    audit_requirements(catalogue, &mut report);

    tracing::info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Catalogue audit finished"
    );
    report
}

/// Skills and talents an assignment grants must exist in the catalogue.
fn audit_assignments(catalogue: &RulesetCatalogue, report: &mut AuditReport) {
    let skills: HashSet<String> = catalogue
        .skill_names()
        .iter()
        .map(|name| normalize_key(name))
        .collect();
    let talents = catalogue.talent_keys();

    for assignment in &catalogue.assignments {
        let name = normalize_text(&assignment.name);
        let name = display_name(&name, "<unnamed assignment>");

        let unknown_skills = unknown_names(assignment.skill_names(), &skills);
        if !unknown_skills.is_empty() {
            report.errors.push(format!(
                "{} has unknown skills: {}.",
                name,
                unknown_skills.join(", ")
            ));
        }
        let unknown_talents = unknown_names(assignment.talent_names(), &talents);
        if !unknown_talents.is_empty() {
            report.errors.push(format!(
                "{} has unknown talents: {}.",
                name,
                unknown_talents.join(", ")
            ));
        }
    }
}

fn unknown_names(listed: Vec<String>, known: &HashSet<String>) -> Vec<String> {
    dedupe_case_insensitive(listed)
        .into_iter()
        .filter(|name| !known.contains(&normalize_key(name)))
        .collect()
}

fn audit_weapons(catalogue: &RulesetCatalogue, report: &mut AuditReport) {
    for weapon in &catalogue.weapons {
        let name = normalize_text(&weapon.name);
        let name = display_name(&name, "<unnamed weapon>");
        let system = &weapon.system;

        if normalize_text(&system.damage).is_empty() {
            report
                .errors
                .push(format!("Weapon \"{}\" has empty damage formula.", name));
        }
        let numeric = [
            system.ammo.unwrap_or(0.0),
            system.ammo_max.unwrap_or(0.0),
            system.area_distance.unwrap_or(2.0),
        ];
        if !numeric.iter().all(|value| value.is_finite()) {
            report
                .errors
                .push(format!("Weapon \"{}\" has non-numeric ammo/area values.", name));
        }
    }
}

/// Spell DN and Complexity must sit in the ranges dice tests accept.
fn audit_spells(catalogue: &RulesetCatalogue, report: &mut AuditReport) {
    for spell in &catalogue.spells {
        let name = normalize_text(&spell.name);
        let name = display_name(&name, "<unnamed spell>");

        let dn = spell.system.dn.unwrap_or(DEFAULT_DN as f64);
        if !dn.is_finite() || !(2.0..=6.0).contains(&dn) {
            report
                .errors
                .push(format!("Spell \"{}\" has invalid DN {}.", name, dn));
        }
        let complexity = spell.system.complexity.unwrap_or(1.0);
        if !complexity.is_finite() || complexity < 1.0 {
            report.errors.push(format!(
                "Spell \"{}\" has invalid Complexity {}.",
                name, complexity
            ));
        }
    }
}

fn audit_armour(catalogue: &RulesetCatalogue, report: &mut AuditReport) {
    for piece in &catalogue.armour {
        let protection = piece.system.protection.unwrap_or(0.0);
        if !protection.is_finite() || protection < 0.0 {
            let name = normalize_text(&piece.name);
            report.errors.push(format!(
                "Armour \"{}\" has invalid protection value.",
                display_name(&name, "<unnamed armour>")
            ));
        }
    }
}

/// Flags self-references and clauses only a person can evaluate.
fn audit_requirements(catalogue: &RulesetCatalogue, report: &mut AuditReport) {
    let blank = ActorRecord::default();

    for talent in &catalogue.talents {
        let Requirement::Clauses(clauses) = split_requirement(&talent.system.requirements) else {
            continue;
        };
        let name = normalize_text(&talent.name);
        let context = ActorContext::build(&blank, talent, catalogue);

        for clause in &clauses {
            if context.is_self(clause) {
                report.warnings.push(format!(
                    "Talent \"{}\" lists itself as a prerequisite.",
                    display_name(&name, "<unnamed>")
                ));
                continue;
            }
            let unrecognised = classify(clause, &context)
                .into_iter()
                .filter(|check| check.kind == ClauseKind::Unrecognised);
            for check in unrecognised {
                report.warnings.push(format!(
                    "Talent \"{}\" has unrecognised prerequisite \"{}\".",
                    display_name(&name, "<unnamed>"),
                    check.label
                ));
            }
        }
    }
}

fn display_name<'a>(name: &'a str, unnamed: &'a str) -> &'a str {
    if name.is_empty() {
        unnamed
    } else {
        name
    }
}

/// Names that appear more than once (case-insensitive), sorted.
fn duplicate_names<'a>(section: &str, names: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        let name = normalize_text(name);
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        if !seen.insert(key.clone()) && reported.insert(key) {
            duplicates.push(name);
        }
    }
    if duplicates.is_empty() {
        return None;
    }
    duplicates.sort();
    Some(format!(
        "{} has duplicate names: {}.",
        section,
        duplicates.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::catalogue;
    use laundry_domain::{
        ArmourEntry, AssignmentEntry, SkillEntry, SpellEntry, Talent, WeaponEntry,
    };

    #[test]
    fn fixture_catalogue_is_clean() {
        let catalogue = catalogue();
        assert_eq!(catalogue.assignments.len(), 1);
        assert_eq!(catalogue.weapons.len(), 2);
        let report = audit_catalogue(&catalogue);
        assert!(report.is_clean(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }

    #[test]
    fn reports_broken_entries() {
        let catalogue = RulesetCatalogue::default()
            .with_skill(SkillEntry::new("Occult", "mind"))
            .with_skill(SkillEntry::new("occult", "Mind"))
            .with_skill(SkillEntry::new("Luck", "fate"))
            .with_skill(SkillEntry::new(" ", ""))
            .with_talent(Talent::new("", "None"));
        let report = audit_catalogue(&catalogue);
        assert_eq!(
            report.errors,
            vec![
                "Skill \"Luck\" has invalid attribute \"fate\".".to_string(),
                "Skill with empty name detected.".to_string(),
                "Skill \"<unnamed>\" has invalid attribute \"\".".to_string(),
                "Talent with empty name detected.".to_string(),
                "skills has duplicate names: occult.".to_string(),
            ]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn warns_about_self_reference_and_unrecognised_clauses() {
        let catalogue = RulesetCatalogue::default()
            .with_talent(Talent::new("Ouroboros", "Ouroboros, Mind (2)"))
            .with_talent(Talent::new("Mystery", "Has read the Necronomicon, Military Background"));
        let report = audit_catalogue(&catalogue);
        assert!(report.is_clean());
        assert_eq!(
            report.warnings,
            vec![
                "Talent \"Ouroboros\" lists itself as a prerequisite.".to_string(),
                "Talent \"Mystery\" has unrecognised prerequisite \"Has read the Necronomicon\"."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn blank_skill_attribute_is_invalid() {
        let catalogue = RulesetCatalogue::default().with_skill(SkillEntry::new("Zeal", "  "));
        assert_eq!(
            audit_catalogue(&catalogue).errors,
            vec!["Skill \"Zeal\" has invalid attribute \"\".".to_string()]
        );
    }

    #[test]
    fn assignments_must_reference_catalogue_entries() {
        let catalogue = catalogue()
            .with_assignment(
                AssignmentEntry::new("Desk Analyst")
                    .with_skills("Ranged", "Stealth, Piloting, piloting")
                    .with_talents("Licence", "Sharpshooter, Telepath"),
            )
            .with_assignment(AssignmentEntry::new("").with_talents("", "Brawler"));
        assert_eq!(
            audit_catalogue(&catalogue).errors,
            vec![
                "Desk Analyst has unknown skills: Piloting.".to_string(),
                "Desk Analyst has unknown talents: Telepath.".to_string(),
            ]
        );
    }

    #[test]
    fn equipment_and_spell_values_are_checked() {
        let mut flare_gun = WeaponEntry::new("Flare Gun", "1d6");
        flare_gun.system.ammo = Some(f64::NAN);
        let catalogue = RulesetCatalogue::default()
            .with_weapon(WeaponEntry::new("Pistol", "1d6+1"))
            .with_weapon(WeaponEntry::new("Rubber Duck", " "))
            .with_weapon(flare_gun)
            .with_spell(SpellEntry::new("Ward", 4.0, 2.0))
            .with_spell(SpellEntry::new("Summon", 7.0, 0.5))
            .with_armour(ArmourEntry::new("Stab Vest", 1.0))
            .with_armour(ArmourEntry::new("", -1.0));
        assert_eq!(
            audit_catalogue(&catalogue).errors,
            vec![
                "Weapon \"Rubber Duck\" has empty damage formula.".to_string(),
                "Weapon \"Flare Gun\" has non-numeric ammo/area values.".to_string(),
                "Spell \"Summon\" has invalid DN 7.".to_string(),
                "Spell \"Summon\" has invalid Complexity 0.5.".to_string(),
                "Armour \"<unnamed armour>\" has invalid protection value.".to_string(),
            ]
        );
    }

    #[test]
    fn missing_spell_values_use_defaults() {
        let catalogue: RulesetCatalogue = serde_json::from_str(
            r#"{"spells": [{"name": "Ward"}, {"name": "Hex", "system": {"dn": "hard"}}]}"#,
        )
        .expect("catalogue parses");
        assert_eq!(
            audit_catalogue(&catalogue).errors,
            vec!["Spell \"Hex\" has invalid DN NaN.".to_string()]
        );
    }

    #[test]
    fn duplicates_are_reported_per_section() {
        let catalogue = RulesetCatalogue::default()
            .with_weapon(WeaponEntry::new("Pistol", "1d6"))
            .with_weapon(WeaponEntry::new("PISTOL", "1d6"))
            .with_spell(SpellEntry::new("Ward", 4.0, 1.0))
            .with_spell(SpellEntry::new("ward", 4.0, 1.0))
            .with_armour(ArmourEntry::new("Vest", 1.0));
        assert_eq!(
            audit_catalogue(&catalogue).errors,
            vec![
                "weapons has duplicate names: PISTOL.".to_string(),
                "spells has duplicate names: ward.".to_string(),
            ]
        );
    }
}
