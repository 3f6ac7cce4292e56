//! Actor records and the capability interface rules code evaluates against.
//!
//! Rules never depend on a concrete document type. They take anything that
//! implements [`ActorLike`]: a persisted [`ActorRecord`] loaded from JSON, or a
//! draft assembled with the `with_*` builders while a player is still choosing
//! skills and talents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::lenient::{int_or_zero, string_or_empty};
use crate::entities::item::ItemRecord;
use crate::error::DomainError;

/// The three core attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Body,
    Mind,
    Spirit,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Body, Attribute::Mind, Attribute::Spirit];

    /// Lower-case key as stored on actor documents.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Body => "body",
            Attribute::Mind => "mind",
            Attribute::Spirit => "spirit",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Body => "Body",
            Attribute::Mind => "Mind",
            Attribute::Spirit => "Spirit",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "body" => Ok(Self::Body),
            "mind" => Ok(Self::Mind),
            "spirit" => Ok(Self::Spirit),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// `{ "value": n }` wrapper used by the host for each attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    #[serde(default, deserialize_with = "int_or_zero")]
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub body: AttributeScore,
    pub mind: AttributeScore,
    pub spirit: AttributeScore,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::Body => self.body.value,
            Attribute::Mind => self.mind.value,
            Attribute::Spirit => self.spirit.value,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i64) {
        let slot = match attribute {
            Attribute::Body => &mut self.body,
            Attribute::Mind => &mut self.mind,
            Attribute::Spirit => &mut self.spirit,
        };
        slot.value = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorSystem {
    pub attributes: Attributes,
}

/// Read access rules code needs from an actor.
pub trait ActorLike {
    /// Current score for an attribute; missing values read as zero.
    fn attribute_value(&self, attribute: Attribute) -> i64;

    /// Every embedded item, in document order.
    fn items(&self) -> &[ItemRecord];
}

/// An actor as persisted by the host, or a hypothetical draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub system: ActorSystem,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute, value: i64) -> Self {
        self.system.attributes.set(attribute, value);
        self
    }

    pub fn with_item(mut self, item: ItemRecord) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_skill(self, name: impl Into<String>, training: i64, focus: i64) -> Self {
        self.with_item(ItemRecord::skill(name, training, focus))
    }

    pub fn with_talent(self, name: impl Into<String>) -> Self {
        self.with_item(ItemRecord::talent(name))
    }

    pub fn with_weapon(
        self,
        name: impl Into<String>,
        range: impl Into<String>,
        traits: impl Into<String>,
        skill: impl Into<String>,
    ) -> Self {
        self.with_item(ItemRecord::weapon(name, range, traits, skill))
    }

    pub fn with_gear(self, name: impl Into<String>) -> Self {
        self.with_item(ItemRecord::gear(name))
    }

    pub fn with_armour(self, name: impl Into<String>) -> Self {
        self.with_item(ItemRecord::armour(name))
    }
}

impl ActorLike for ActorRecord {
    fn attribute_value(&self, attribute: Attribute) -> i64 {
        self.system.attributes.get(attribute)
    }

    fn items(&self) -> &[ItemRecord] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::item::ItemKind;

    #[test]
    fn attribute_from_str_is_case_insensitive() {
        assert_eq!("Mind".parse::<Attribute>(), Ok(Attribute::Mind));
        assert_eq!(" SPIRIT ".parse::<Attribute>(), Ok(Attribute::Spirit));
        assert!(matches!(
            "luck".parse::<Attribute>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn deserializes_host_actor() {
        let actor: ActorRecord = serde_json::from_str(
            r#"{
                "name": "Agent Hale",
                "system": {"attributes": {"body": {"value": 2}, "mind": {"value": "3"}}},
                "items": [
                    {"type": "skill", "name": "Occult", "system": {"training": 1}},
                    {"type": "talent", "name": "Licence"}
                ]
            }"#,
        )
        .expect("actor parses");

        assert_eq!(actor.attribute_value(Attribute::Body), 2);
        assert_eq!(actor.attribute_value(Attribute::Mind), 3);
        assert_eq!(actor.attribute_value(Attribute::Spirit), 0);
        let kinds: Vec<ItemKind> = actor.items().iter().map(|item| item.kind).collect();
        assert_eq!(kinds, vec![ItemKind::Skill, ItemKind::Talent]);
        assert_eq!(actor.items()[1].name, "Licence");
    }

    #[test]
    fn draft_builders_accumulate_items() {
        let draft = ActorRecord::new("Draft")
            .with_attribute(Attribute::Spirit, 4)
            .with_skill("Zeal", 2, 0)
            .with_gear("Disguise Kit")
            .with_armour("Stab Vest");

        assert_eq!(draft.attribute_value(Attribute::Spirit), 4);
        assert_eq!(draft.items().len(), 3);
        assert_eq!(draft.items()[2].kind, ItemKind::Armour);
        assert_eq!(draft.items()[2].name, "Stab Vest");
    }
}
