//! Domain entities - actors, their embedded items, talents and compendium entries

mod actor;
mod compendium;
mod item;
mod talent;

pub use actor::{ActorLike, ActorRecord, ActorSystem, Attribute, AttributeScore, Attributes};
pub use compendium::{
    ArmourEntry, ArmourSystem, AssignmentEntry, AssignmentSystem, SpellEntry, SpellSystem,
    WeaponEntry, WeaponSystem,
};
pub use item::{ItemKind, ItemRecord, ItemSystem};
pub use talent::{Talent, TalentLike, TalentSystem};
