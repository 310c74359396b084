//! Shape-changing transformations

use serde::{Deserialize, Serialize};
use strum::Display;

/// A transformation the player can be under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Transformation {
    Spider,
    BladeHands,
    Statue,
    IceBeast,
    Dragon,
    Lich,
    SerpentOfHell,
    Air,
}

impl Transformation {
    /// Sentence describing the current form
    pub const fn description(&self) -> &'static str {
        match self {
            Transformation::Spider => "You are in spider-form.",
            Transformation::BladeHands => "Your hands are blades.",
            Transformation::Statue => "You are a stone statue.",
            Transformation::IceBeast => "You are a creature of crystalline ice.",
            Transformation::Dragon => "You are a fearsome dragon!",
            Transformation::Lich => "You are in lich-form.",
            Transformation::SerpentOfHell => "You are a huge, demonic serpent!",
            Transformation::Air => "You are a cloud of diffuse gas.",
        }
    }
}
