//! Religion and whereabouts

use serde::{Deserialize, Serialize};

/// The god the player worships and how that god currently feels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Religion {
    /// God's name, e.g. "Trog"
    pub god: String,
    /// Whether the god is demanding penance
    #[serde(default)]
    pub under_penance: bool,
    /// Prayer reaction text, e.g. "Trog is pleased."
    #[serde(default)]
    pub prayer_reaction: String,
}

/// Where the player is (or was) when the dump is made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Whereabouts {
    /// Left the dungeon through the top
    Escaped,
    /// Still inside, `place` reads like "on level 3 of the Dungeon"
    Inside { place: String },
}

impl Default for Whereabouts {
    fn default() -> Self {
        Self::Inside {
            place: String::from("in the Dungeon"),
        }
    }
}

impl Whereabouts {
    /// One-line location sentence
    pub fn describe(&self) -> String {
        match self {
            Whereabouts::Escaped => "You escaped.".to_string(),
            Whereabouts::Inside { place } => format!("You are {}.", place),
        }
    }
}
