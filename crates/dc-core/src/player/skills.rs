//! Player skills

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Highest level a skill can reach
pub const MAX_SKILL_LEVEL: u8 = 27;

/// Skill types, in the order they are listed in the character dump
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[repr(u8)]
pub enum SkillType {
    // Melee and ranged combat
    Fighting = 0,
    ShortBlades = 1,
    LongBlades = 2,
    GreatSwords = 3,
    Axes = 4,
    MacesFlails = 5,
    Polearms = 6,
    Staves = 7,
    Slings = 8,
    Bows = 9,
    Crossbows = 10,
    Darts = 11,
    Throwing = 12,

    // Defence and utility
    Armour = 13,
    Dodging = 14,
    Stealth = 15,
    Stabbing = 16,
    Shields = 17,
    TrapsDoors = 18,
    UnarmedCombat = 19,

    // Magic
    Spellcasting = 25,
    Conjurations = 26,
    Enchantments = 27,
    Summonings = 28,
    Necromancy = 29,
    Translocations = 30,
    Transmigration = 31,
    Divinations = 32,
    FireMagic = 33,
    IceMagic = 34,
    AirMagic = 35,
    EarthMagic = 36,
    PoisonMagic = 37,
    Invocations = 38,
    Evocations = 39,
}

impl SkillType {
    /// Display name used in skill listings
    pub const fn name(&self) -> &'static str {
        match self {
            SkillType::Fighting => "Fighting",
            SkillType::ShortBlades => "Short Blades",
            SkillType::LongBlades => "Long Blades",
            SkillType::GreatSwords => "Great Swords",
            SkillType::Axes => "Axes",
            SkillType::MacesFlails => "Maces & Flails",
            SkillType::Polearms => "Polearms",
            SkillType::Staves => "Staves",
            SkillType::Slings => "Slings",
            SkillType::Bows => "Bows",
            SkillType::Crossbows => "Crossbows",
            SkillType::Darts => "Darts",
            SkillType::Throwing => "Throwing",
            SkillType::Armour => "Armour",
            SkillType::Dodging => "Dodging",
            SkillType::Stealth => "Stealth",
            SkillType::Stabbing => "Stabbing",
            SkillType::Shields => "Shields",
            SkillType::TrapsDoors => "Traps & Doors",
            SkillType::UnarmedCombat => "Unarmed Combat",
            SkillType::Spellcasting => "Spellcasting",
            SkillType::Conjurations => "Conjurations",
            SkillType::Enchantments => "Enchantments",
            SkillType::Summonings => "Summonings",
            SkillType::Necromancy => "Necromancy",
            SkillType::Translocations => "Translocations",
            SkillType::Transmigration => "Transmigration",
            SkillType::Divinations => "Divinations",
            SkillType::FireMagic => "Fire Magic",
            SkillType::IceMagic => "Ice Magic",
            SkillType::AirMagic => "Air Magic",
            SkillType::EarthMagic => "Earth Magic",
            SkillType::PoisonMagic => "Poison Magic",
            SkillType::Invocations => "Invocations",
            SkillType::Evocations => "Evocations",
        }
    }
}

/// Individual skill tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Current skill level (0..=27)
    pub level: u8,
    /// Whether experience is currently being put into this skill
    #[serde(default)]
    pub training: bool,
}

impl Skill {
    pub const fn new(level: u8, training: bool) -> Self {
        Self { level, training }
    }

    /// Check if the skill has reached its ceiling
    pub const fn is_maxed(&self) -> bool {
        self.level >= MAX_SKILL_LEVEL
    }
}

/// A skill as it appears in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: SkillType,
    #[serde(flatten)]
    pub state: Skill,
}

/// Complete skill set for a player
///
/// Serialized as a list of `{ skill, level, training }` entries; skills not
/// listed are at level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SkillEntry>", into = "Vec<SkillEntry>")]
pub struct SkillSet {
    skills: Vec<(SkillType, Skill)>,
}

impl From<Vec<SkillEntry>> for SkillSet {
    fn from(entries: Vec<SkillEntry>) -> Self {
        let mut set = SkillSet::default();
        for entry in entries {
            set.set(entry.skill, entry.state);
        }
        set
    }
}

impl From<SkillSet> for Vec<SkillEntry> {
    fn from(set: SkillSet) -> Self {
        set.skills
            .into_iter()
            .map(|(skill, state)| SkillEntry { skill, state })
            .collect()
    }
}

impl SkillSet {
    /// Get a skill (level 0 if never set)
    pub fn get(&self, skill_type: SkillType) -> Skill {
        self.skills
            .iter()
            .find(|(s, _)| *s == skill_type)
            .map(|(_, skill)| *skill)
            .unwrap_or_default()
    }

    /// Set a skill, keeping entries in listing order
    pub fn set(&mut self, skill_type: SkillType, skill: Skill) {
        match self.skills.binary_search_by_key(&skill_type, |(s, _)| *s) {
            Ok(pos) => self.skills[pos].1 = skill,
            Err(pos) => self.skills.insert(pos, (skill_type, skill)),
        }
    }

    /// Skills with at least one level, in listing order
    pub fn learned(&self) -> impl Iterator<Item = (SkillType, Skill)> + '_ {
        SkillType::iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, skill)| skill.level > 0)
    }
}
