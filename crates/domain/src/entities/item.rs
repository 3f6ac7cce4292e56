//! Item records - skills, talents and equipment owned by an actor
//!
//! Items arrive in the host's document shape: a `type` discriminator, a `name`,
//! and a loose `system` bag whose meaningful fields depend on the type.
//!
//! ```json
//! { "type": "skill",  "name": "Occult",  "system": { "training": 2, "focus": 1 } }
//! { "type": "weapon", "name": "Pistol",  "system": { "range": "Medium", "traits": "Loud", "skill": "Ranged" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::common::lenient::{int_or_zero, string_or_empty};

/// The item types the ruleset distinguishes.
///
/// Anything else the host stores on an actor (spells, notes, ...) is read as
/// [`ItemKind::Other`] and ignored by rules code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Skill,
    Talent,
    Weapon,
    Gear,
    Armour,
    #[serde(other)]
    Other,
}

/// Type-dependent fields of an item.
///
/// # Simple Data Struct
///
/// Every field is optional in the source data and defaults to zero / empty,
/// so any combination of values is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSystem {
    /// Skill training track
    #[serde(deserialize_with = "int_or_zero")]
    pub training: i64,
    /// Skill focus track
    #[serde(deserialize_with = "int_or_zero")]
    pub focus: i64,
    /// Weapon range band (e.g. "Close", "Medium")
    #[serde(deserialize_with = "string_or_empty")]
    pub range: String,
    /// Weapon trait list as free text (e.g. "Crushing, Loud")
    #[serde(deserialize_with = "string_or_empty")]
    pub traits: String,
    /// Skill a weapon is used with
    #[serde(deserialize_with = "string_or_empty")]
    pub skill: String,
    /// Talent prerequisite text
    #[serde(deserialize_with = "string_or_empty")]
    pub requirements: String,
}

/// One embedded item on an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: ItemSystem,
}

impl ItemRecord {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            system: ItemSystem::default(),
        }
    }

    /// A skill with both proficiency tracks.
    pub fn skill(name: impl Into<String>, training: i64, focus: i64) -> Self {
        let mut item = Self::new(ItemKind::Skill, name);
        item.system.training = training;
        item.system.focus = focus;
        item
    }

    pub fn talent(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Talent, name)
    }

    pub fn weapon(
        name: impl Into<String>,
        range: impl Into<String>,
        traits: impl Into<String>,
        skill: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(ItemKind::Weapon, name);
        item.system.range = range.into();
        item.system.traits = traits.into();
        item.system.skill = skill.into();
        item
    }

    pub fn gear(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Gear, name)
    }

    pub fn armour(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Armour, name)
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.system.requirements = requirements.into();
        self
    }
}
