//! Player hunger and burden state

use serde::{Deserialize, Serialize};
use strum::Display;

/// Hunger levels, from the raw nutrition counter
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
)]
pub enum HungerLevel {
    #[strum(to_string = "starving")]
    Starving,
    #[strum(to_string = "hungry")]
    Hungry,
    #[default]
    #[strum(to_string = "not hungry")]
    NotHungry,
    #[strum(to_string = "full")]
    Full,
    #[strum(to_string = "completely stuffed")]
    Engorged,
}

impl HungerLevel {
    /// Classify a nutrition value
    pub const fn from_nutrition(hunger: i32) -> Self {
        if hunger <= 1000 {
            HungerLevel::Starving
        } else if hunger <= 2600 {
            HungerLevel::Hungry
        } else if hunger < 7000 {
            HungerLevel::NotHungry
        } else if hunger < 11000 {
            HungerLevel::Full
        } else {
            HungerLevel::Engorged
        }
    }
}

/// How weighed down the player is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BurdenState {
    #[default]
    Unencumbered,
    Encumbered,
    Overloaded,
}

impl BurdenState {
    /// Sentence describing the burden, if worth mentioning
    pub const fn description(&self) -> Option<&'static str> {
        match self {
            BurdenState::Unencumbered => None,
            BurdenState::Encumbered => Some("You are encumbered."),
            BurdenState::Overloaded => Some("You are overloaded with stuff."),
        }
    }
}
