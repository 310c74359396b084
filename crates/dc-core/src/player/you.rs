//! The player character, as captured for the dump

use serde::{Deserialize, Serialize};

use super::{BurdenState, HungerLevel, KnownSpell, Religion, SkillSet, Transformation, Whereabouts};
use crate::kills::KillTally;
use crate::notes::Note;
use crate::object::Item;

/// Read-only snapshot of everything the dump reports on
///
/// Text fields (`stat_block`, `screenshot`, `overview`, ...) are produced by
/// the game's own display code and are copied into the report verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    // Identity
    pub name: String,

    // Progress
    /// Unspent experience pool
    pub exp_available: i32,
    /// Spell levels still available for memorisation
    pub spell_levels: i32,

    /// Detailed stat lines (the character overview screen)
    pub stat_block: Vec<String>,

    // Status
    pub whereabouts: Whereabouts,
    pub religion: Option<Religion>,
    pub burden: BurdenState,
    /// Raw nutrition counter
    pub hunger: i32,
    pub transformation: Option<Transformation>,

    // Belongings and abilities
    pub inventory: Vec<Item>,
    pub skills: SkillSet,
    pub spells: Vec<KnownSpell>,
    /// One description line per mutation or innate ability
    pub mutations: Vec<String>,

    // History
    /// Message log, oldest first
    pub messages: Vec<String>,
    pub notes: Vec<Note>,
    pub kills: KillTally,

    // Display captures
    /// Text rendering of the current view
    pub screenshot: String,
    /// Dungeon overview, possibly with colour markup
    pub overview: String,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hunger: 6000,
            ..Self::default()
        }
    }

    pub fn hunger_level(&self) -> HungerLevel {
        HungerLevel::from_nutrition(self.hunger)
    }

    /// The last `count` messages, one per line
    pub fn last_messages(&self, count: usize) -> String {
        let start = self.messages.len().saturating_sub(count);
        let mut text = String::new();
        for msg in &self.messages[start..] {
            text += msg;
            text += "\n";
        }
        text
    }
}
