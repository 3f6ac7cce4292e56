//! Talent entity - perks a character acquires, gated by prerequisite text.
//!
//! Prerequisites are stored as free text (`"Mind (3), Training (2) in Occult"`)
//! and are only interpreted when evaluated against an actor.

use serde::{Deserialize, Serialize};

use crate::common::lenient::string_or_empty;
use crate::entities::item::{ItemKind, ItemRecord};

/// Read access rules code needs from a talent.
pub trait TalentLike {
    /// Display name of the talent.
    fn name(&self) -> &str;

    /// Raw prerequisite text; empty or `"None"` means no prerequisite.
    fn requirements(&self) -> &str;
}

/// A talent as listed in the ruleset catalogue.
///
/// # Simple Data Struct
///
/// Public fields, no invariants: a talent with an empty name is representable
/// and reported by the catalogue audit instead of being rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: TalentSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalentSystem {
    /// Prerequisite text
    #[serde(deserialize_with = "string_or_empty")]
    pub requirements: String,
}

impl Talent {
    pub fn new(name: impl Into<String>, requirements: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: TalentSystem {
                requirements: requirements.into(),
            },
        }
    }

    /// The embedded item granted to an actor who takes this talent.
    pub fn to_item(&self) -> ItemRecord {
        ItemRecord::new(ItemKind::Talent, self.name.clone()).with_requirements(
            self.system.requirements.clone(),
        )
    }
}

impl TalentLike for Talent {
    fn name(&self) -> &str {
        &self.name
    }

    fn requirements(&self) -> &str {
        &self.system.requirements
    }
}

/// Talent items already embedded on an actor carry their own prerequisite text.
impl TalentLike for ItemRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn requirements(&self) -> &str {
        &self.system.requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn talent_deserializes_with_missing_system() {
        let talent: Talent = serde_json::from_str(r#"{"name": "Licence"}"#).expect("parses");
        assert_eq!(talent.name(), "Licence");
        assert_eq!(talent.requirements(), "");
    }

    #[test]
    fn to_item_keeps_requirements() {
        let talent = Talent::new("Sniper", "Training (2) in Ranged");
        let item = talent.to_item();
        assert_eq!(item.kind, ItemKind::Talent);
        assert_eq!(TalentLike::requirements(&item), "Training (2) in Ranged");
    }
}
