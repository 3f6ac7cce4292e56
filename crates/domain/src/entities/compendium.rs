//! Compendium entries - assignments, weapons, spells and armour as the
//! ruleset ships them.
//!
//! Numeric fields keep whatever the source held (`None` when missing, `NaN`
//! when unreadable) so the catalogue audit can report bad data instead of the
//! loader silently repairing it.

use serde::{Deserialize, Serialize};

use crate::common::lenient::{number_or_nan, string_or_empty};

/// An assignment (character role) and the skills and talents it grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: AssignmentSystem,
}

/// Comma-separated name lists; the host also stores some of them as arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentSystem {
    #[serde(deserialize_with = "string_or_empty")]
    pub core_skill: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub core_skills: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub skill_options: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub core_talent: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub talents: String,
}

impl AssignmentEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: AssignmentSystem::default(),
        }
    }

    pub fn with_skills(mut self, core_skill: &str, skill_options: &str) -> Self {
        self.system.core_skill = core_skill.to_string();
        self.system.skill_options = skill_options.to_string();
        self
    }

    pub fn with_talents(mut self, core_talent: &str, talents: &str) -> Self {
        self.system.core_talent = core_talent.to_string();
        self.system.talents = talents.to_string();
        self
    }

    /// Every skill name listed on the assignment, in listed order.
    pub fn skill_names(&self) -> Vec<String> {
        split_list(&[
            &self.system.core_skill,
            &self.system.skill_options,
            &self.system.core_skills,
        ])
    }

    /// Every talent name listed on the assignment, in listed order.
    pub fn talent_names(&self) -> Vec<String> {
        split_list(&[&self.system.core_talent, &self.system.talents])
    }
}

fn split_list(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .flat_map(|field| field.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: WeaponSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeaponSystem {
    /// Damage formula (e.g. "1d6+1")
    #[serde(deserialize_with = "string_or_empty")]
    pub damage: String,
    #[serde(deserialize_with = "number_or_nan")]
    pub ammo: Option<f64>,
    #[serde(deserialize_with = "number_or_nan")]
    pub ammo_max: Option<f64>,
    /// Area-of-effect radius
    #[serde(deserialize_with = "number_or_nan")]
    pub area_distance: Option<f64>,
}

impl WeaponEntry {
    pub fn new(name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: WeaponSystem {
                damage: damage.into(),
                ..WeaponSystem::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: SpellSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellSystem {
    #[serde(deserialize_with = "number_or_nan")]
    pub dn: Option<f64>,
    #[serde(deserialize_with = "number_or_nan")]
    pub complexity: Option<f64>,
}

impl SpellEntry {
    pub fn new(name: impl Into<String>, dn: f64, complexity: f64) -> Self {
        Self {
            name: name.into(),
            system: SpellSystem {
                dn: Some(dn),
                complexity: Some(complexity),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmourEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: ArmourSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmourSystem {
    #[serde(deserialize_with = "number_or_nan")]
    pub protection: Option<f64>,
}

impl ArmourEntry {
    pub fn new(name: impl Into<String>, protection: f64) -> Self {
        Self {
            name: name.into(),
            system: ArmourSystem {
                protection: Some(protection),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_lists_accept_text_and_arrays() {
        let assignment: AssignmentEntry = serde_json::from_str(
            r#"{
                "name": "Field Agent",
                "system": {
                    "coreSkill": "Ranged",
                    "skillOptions": "Stealth, Awareness,",
                    "coreTalent": "Licence",
                    "talents": ["Sharpshooter", "Brawler"]
                }
            }"#,
        )
        .expect("assignment parses");

        assert_eq!(assignment.skill_names(), vec!["Ranged", "Stealth", "Awareness"]);
        assert_eq!(
            assignment.talent_names(),
            vec!["Licence", "Sharpshooter", "Brawler"]
        );
    }

    #[test]
    fn numeric_fields_keep_bad_values() {
        let weapon: WeaponEntry = serde_json::from_str(
            r#"{"name": "Flare Gun", "system": {"damage": "1d6", "ammo": "two", "ammoMax": 2}}"#,
        )
        .expect("weapon parses");
        assert!(weapon.system.ammo.is_some_and(f64::is_nan));
        assert_eq!(weapon.system.ammo_max, Some(2.0));
        assert_eq!(weapon.system.area_distance, None);

        let spell: SpellEntry = serde_json::from_str(r#"{"name": "Ward"}"#).expect("spell parses");
        assert_eq!(spell.system, SpellSystem::default());
    }
}
