//! Game notes (milestones recorded during play)

use serde::{Deserialize, Serialize};

/// Table header matching the layout of [`Note::describe`]
pub const NOTES_HEADER: &str = "| Turn  |Location | Note";

/// A single note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Turn the note was taken
    pub turn: u64,
    /// Short place name, e.g. "D:3" or "Lair:2"
    pub place: String,
    /// Note text
    pub text: String,
}

impl Note {
    pub fn new(turn: u64, place: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            turn,
            place: place.into(),
            text: text.into(),
        }
    }

    /// One table row: "| turn | place | text"
    pub fn describe(&self) -> String {
        format!("| {:>5} | {:<7} | {}", self.turn, self.place, self.text)
    }
}
