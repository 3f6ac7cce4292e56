//! Actor context snapshot used while evaluating one requirement.
//!
//! The snapshot copies only the facts the matchers read, keyed by lower-cased
//! names, so the same evaluation runs unchanged against a persisted actor or a
//! draft that is being edited.

use std::collections::{HashMap, HashSet};

use laundry_domain::common::{normalize_key, normalize_text};
use laundry_domain::{ActorLike, Attribute, ItemKind, RulesetCatalogue, TalentLike};

/// Training and focus on one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillLevels {
    pub training: i64,
    pub focus: i64,
}

/// Lower-cased facts about one owned weapon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponRow {
    pub name: String,
    pub range_text: String,
    pub traits_text: String,
    pub linked_skill: String,
}

#[derive(Debug, Clone)]
pub struct ActorContext {
    attributes: HashMap<Attribute, i64>,
    skills: HashMap<String, SkillLevels>,
    talents: HashSet<String>,
    gear_names: HashSet<String>,
    weapons: Vec<WeaponRow>,
    skill_names: Vec<String>,
    known_talents: HashSet<String>,
    self_talent_key: String,
}

impl ActorContext {
    /// Snapshots `actor` for evaluating `talent` against `catalogue`.
    pub fn build<A, T>(actor: &A, talent: &T, catalogue: &RulesetCatalogue) -> Self
    where
        A: ActorLike + ?Sized,
        T: TalentLike + ?Sized,
    {
        let attributes = Attribute::ALL
            .into_iter()
            .map(|attribute| (attribute, actor.attribute_value(attribute).max(0)))
            .collect();

        let mut skills = HashMap::new();
        let mut talents = HashSet::new();
        let mut gear_names = HashSet::new();
        let mut weapons = Vec::new();

        for item in actor.items() {
            let name = normalize_text(&item.name);
            let key = name.to_lowercase();
            match item.kind {
                ItemKind::Skill => {
                    skills.insert(
                        key,
                        SkillLevels {
                            training: item.system.training.max(0),
                            focus: item.system.focus.max(0),
                        },
                    );
                }
                ItemKind::Talent => {
                    talents.insert(key);
                }
                ItemKind::Weapon => {
                    weapons.push(WeaponRow {
                        name,
                        range_text: normalize_key(&item.system.range),
                        traits_text: normalize_key(&item.system.traits),
                        linked_skill: normalize_key(&item.system.skill),
                    });
                    gear_names.insert(key);
                }
                ItemKind::Gear | ItemKind::Armour => {
                    gear_names.insert(key);
                }
                ItemKind::Other => {}
            }
        }

        Self {
            attributes,
            skills,
            talents,
            gear_names,
            weapons,
            skill_names: catalogue.skill_names(),
            known_talents: catalogue.talent_keys(),
            self_talent_key: normalize_key(talent.name()),
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> i64 {
        self.attributes.get(&attribute).copied().unwrap_or(0)
    }

    /// Levels for a skill; an unowned skill reads as zero on both tracks.
    pub fn skill(&self, name: &str) -> SkillLevels {
        self.skills
            .get(&normalize_key(name))
            .copied()
            .unwrap_or_default()
    }

    pub fn owns_talent(&self, name: &str) -> bool {
        self.talents.contains(&normalize_key(name))
    }

    pub fn owns_gear(&self, name: &str) -> bool {
        self.gear_names.contains(&normalize_key(name))
    }

    pub fn weapons(&self) -> &[WeaponRow] {
        &self.weapons
    }

    /// Canonical skill names from the catalogue.
    pub fn skill_names(&self) -> &[String] {
        &self.skill_names
    }

    pub fn is_known_talent(&self, name: &str) -> bool {
        self.known_talents.contains(&normalize_key(name))
    }

    /// Whether `name` is the talent currently being evaluated.
    pub fn is_self(&self, name: &str) -> bool {
        !self.self_talent_key.is_empty() && normalize_key(name) == self.self_talent_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laundry_domain::{ActorRecord, Talent};

    fn context_for(actor: &ActorRecord) -> ActorContext {
        ActorContext::build(
            actor,
            &Talent::new("Sniper", "Training (2) in Ranged"),
            &RulesetCatalogue::default().with_talent(Talent::new("Licence", "")),
        )
    }

    #[test]
    fn snapshots_skills_case_insensitively() {
        let actor = ActorRecord::new("Agent").with_skill("Close  Combat", 2, 1);
        let context = context_for(&actor);
        assert_eq!(
            context.skill("close combat"),
            SkillLevels {
                training: 2,
                focus: 1
            }
        );
        assert_eq!(context.skill("Occult"), SkillLevels::default());
    }

    #[test]
    fn weapons_count_as_gear() {
        let actor = ActorRecord::new("Agent")
            .with_weapon("Service Pistol", "Medium", "Loud", "Ranged")
            .with_armour("Stab Vest");
        let context = context_for(&actor);
        assert!(context.owns_gear("service pistol"));
        assert!(context.owns_gear("STAB VEST"));
        assert_eq!(context.weapons()[0].linked_skill, "ranged");
        assert_eq!(context.weapons()[0].range_text, "medium");
    }

    #[test]
    fn negative_values_read_as_zero() {
        let actor = ActorRecord::new("Agent")
            .with_attribute(Attribute::Mind, -2)
            .with_skill("Occult", -1, 3);
        let context = context_for(&actor);
        assert_eq!(context.attribute(Attribute::Mind), 0);
        assert_eq!(context.skill("Occult").training, 0);
        assert_eq!(context.skill("Occult").focus, 3);
    }

    #[test]
    fn knows_catalogue_and_self() {
        let context = context_for(&ActorRecord::new("Agent"));
        assert!(context.is_known_talent("LICENCE"));
        assert!(!context.is_known_talent("Sniper"));
        assert!(context.is_self("sniper"));
        assert_eq!(context.skill_names().len(), 24);
    }
}
