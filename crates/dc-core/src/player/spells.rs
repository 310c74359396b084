//! Memorised spells

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Schools a spell belongs to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SpellSchools: u16 {
        const CONJURATION = 0x0001;
        const ENCHANTMENT = 0x0002;
        const FIRE = 0x0004;
        const ICE = 0x0008;
        const TRANSMIGRATION = 0x0010;
        const NECROMANCY = 0x0020;
        const HOLY = 0x0040;
        const SUMMONING = 0x0080;
        const DIVINATION = 0x0100;
        const TRANSLOCATION = 0x0200;
        const POISON = 0x0400;
        const EARTH = 0x0800;
        const AIR = 0x1000;
    }
}

/// Schools in the order they are printed, with their short names
const SCHOOL_ORDER: [(SpellSchools, &str); 13] = [
    (SpellSchools::HOLY, "Holy"),
    (SpellSchools::POISON, "Pois"),
    (SpellSchools::FIRE, "Fire"),
    (SpellSchools::ICE, "Ice"),
    (SpellSchools::EARTH, "Erth"),
    (SpellSchools::AIR, "Air"),
    (SpellSchools::CONJURATION, "Conj"),
    (SpellSchools::ENCHANTMENT, "Ench"),
    (SpellSchools::DIVINATION, "Divn"),
    (SpellSchools::TRANSLOCATION, "Tloc"),
    (SpellSchools::SUMMONING, "Summ"),
    (SpellSchools::TRANSMIGRATION, "Trmg"),
    (SpellSchools::NECROMANCY, "Necr"),
];

impl SpellSchools {
    /// Short names joined with '/', e.g. "Fire/Conj"
    pub fn short_names(&self) -> String {
        SCHOOL_ORDER
            .iter()
            .filter(|(school, _)| self.contains(*school))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Power breakpoints; a spell earns one bar per breakpoint it reaches
const POWER_BREAKPOINTS: [i32; 9] = [5, 10, 15, 25, 35, 50, 75, 100, 150];

/// Convert a raw spell power to a bar count (None if unknown)
pub fn power_to_barcount(power: i32) -> Option<usize> {
    if power < 0 {
        return None;
    }
    let rank = POWER_BREAKPOINTS.iter().filter(|&&bp| power >= bp).count();
    Some(rank + 1)
}

/// Describe a failure percentage in words
pub const fn failure_rate_to_string(fail: u8) -> &'static str {
    if fail >= 100 {
        "Useless"
    } else if fail > 77 {
        "Terrible"
    } else if fail > 59 {
        "Cruddy"
    } else if fail > 50 {
        "Bad"
    } else if fail > 40 {
        "Very Poor"
    } else if fail > 35 {
        "Poor"
    } else if fail > 30 {
        "Fair"
    } else if fail > 26 {
        "Good"
    } else if fail > 20 {
        "Very Good"
    } else if fail > 15 {
        "Great"
    } else if fail > 0 {
        "Excellent"
    } else {
        "Perfect"
    }
}

/// A spell the player has memorised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSpell {
    /// Casting letter
    pub letter: char,
    /// Spell title
    pub title: String,
    #[serde(default)]
    pub schools: SpellSchools,
    /// Current spell power (-1 when not applicable)
    pub power: i32,
    /// Power cap for this spell (-1 when uncapped/unknown)
    pub power_cap: i32,
    /// Failure chance in percent
    pub fail: u8,
    /// Spell level
    pub level: u8,
}

impl KnownSpell {
    /// Power bar: '#' per earned bar, '.' up to the cap
    pub fn power_string(&self) -> String {
        match (power_to_barcount(self.power), power_to_barcount(self.power_cap)) {
            (Some(bars), Some(cap)) => {
                let bars = bars.min(cap);
                format!("{}{}", "#".repeat(bars), ".".repeat(cap - bars))
            }
            (Some(bars), None) => "#".repeat(bars),
            (None, _) => "N/A".to_string(),
        }
    }

    pub fn failure_string(&self) -> &'static str {
        failure_rate_to_string(self.fail)
    }
}
