//! Laundry domain records.
//!
//! Plain data shared by the rules engine: actors and their embedded items,
//! talents, and the ruleset catalogue. Everything here is pure data with
//! lenient deserialisation; interpretation lives in `laundry-engine`.

pub mod catalogue;
pub mod common;
pub mod entities;
pub mod error;

pub use catalogue::{RulesetCatalogue, SkillEntry, SkillEntrySystem, DEFAULT_SKILLS};
pub use entities::{
    ActorLike, ArmourEntry, AssignmentEntry, SpellEntry, WeaponEntry, ActorRecord, ActorSystem, Attribute, AttributeScore, Attributes, ItemKind,
    ItemRecord, ItemSystem, Talent, TalentLike, TalentSystem,
};
pub use error::DomainError;
