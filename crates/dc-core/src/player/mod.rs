//! Player state
//!
//! Contains the Character snapshot and the player-related types it is built from.

mod hunger;
mod religion;
mod skills;
mod spells;
mod transform;
mod you;

pub use hunger::{BurdenState, HungerLevel};
pub use religion::{Religion, Whereabouts};
pub use skills::{MAX_SKILL_LEVEL, Skill, SkillEntry, SkillSet, SkillType};
pub use spells::{KnownSpell, SpellSchools, failure_rate_to_string, power_to_barcount};
pub use transform::Transformation;
pub use you::Character;
