//! Ruleset catalogue - the compendium content that exists in the ruleset.
//!
//! The catalogue is reference data passed explicitly into rules code. Skills
//! and talents are used to normalise free-text skill references and to tell
//! an unknown talent name (free text) from a known talent the actor simply
//! lacks. Assignments, weapons, spells and armour are carried for the
//! catalogue audit.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::common::lenient::string_or_empty;
use crate::common::string::{normalize_key, normalize_text};
use crate::entities::{ArmourEntry, AssignmentEntry, SpellEntry, Talent, WeaponEntry};

/// Skill list used when a catalogue configures none.
pub const DEFAULT_SKILLS: [&str; 24] = [
    "Academics",
    "Athletics",
    "Awareness",
    "Bureaucracy",
    "Close Combat",
    "Computers",
    "Dexterity",
    "Engineering",
    "Fast Talk",
    "Fortitude",
    "Intuition",
    "Magic",
    "Medicine",
    "Might",
    "Occult",
    "Presence",
    "Ranged",
    "Reflexes",
    "Resolve",
    "Science",
    "Stealth",
    "Survival",
    "Technology",
    "Zeal",
];

/// A skill definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: SkillEntrySystem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntrySystem {
    /// Governing attribute key ("body", "mind", "spirit")
    #[serde(deserialize_with = "string_or_empty")]
    pub attribute: String,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: SkillEntrySystem {
                attribute: attribute.into(),
            },
        }
    }
}

/// Compendium content for one ruleset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetCatalogue {
    pub skills: Vec<SkillEntry>,
    pub talents: Vec<Talent>,
    pub assignments: Vec<AssignmentEntry>,
    pub weapons: Vec<WeaponEntry>,
    pub spells: Vec<SpellEntry>,
    pub armour: Vec<ArmourEntry>,
}

impl RulesetCatalogue {
    pub fn new(skills: Vec<SkillEntry>, talents: Vec<Talent>) -> Self {
        Self {
            skills,
            talents,
            ..Self::default()
        }
    }

    pub fn with_talent(mut self, talent: Talent) -> Self {
        self.talents.push(talent);
        self
    }

    pub fn with_skill(mut self, skill: SkillEntry) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_assignment(mut self, assignment: AssignmentEntry) -> Self {
        self.assignments.push(assignment);
        self
    }

    pub fn with_weapon(mut self, weapon: WeaponEntry) -> Self {
        self.weapons.push(weapon);
        self
    }

    pub fn with_spell(mut self, spell: SpellEntry) -> Self {
        self.spells.push(spell);
        self
    }

    pub fn with_armour(mut self, armour: ArmourEntry) -> Self {
        self.armour.push(armour);
        self
    }

    /// Canonical skill names; falls back to [`DEFAULT_SKILLS`] when the
    /// catalogue lists no named skills.
    pub fn skill_names(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .skills
            .iter()
            .map(|skill| normalize_text(&skill.name))
            .filter(|name| !name.is_empty())
            .collect();
        if configured.is_empty() {
            DEFAULT_SKILLS.iter().map(|name| name.to_string()).collect()
        } else {
            configured
        }
    }

    /// Lower-cased names of every talent in the catalogue.
    pub fn talent_keys(&self) -> HashSet<String> {
        self.talents
            .iter()
            .map(|talent| normalize_key(&talent.name))
            .filter(|key| !key.is_empty())
            .collect()
    }

    /// Case-insensitive talent lookup.
    pub fn find_talent(&self, name: &str) -> Option<&Talent> {
        let key = normalize_key(name);
        self.talents
            .iter()
            .find(|talent| normalize_key(&talent.name) == key)
    }
}
