//! Score records for finished games
//!
//! When a game ends, the high-score entry is handed to the dump so the stats
//! section can open with the final verdict.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::snapshot::SnapshotError;

/// A finished game's score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Final score
    pub points: i64,
    /// Player name
    pub name: String,
    /// Species and background, e.g. "Hill Orc Berserker"
    pub character: String,
    /// Experience level at the end
    pub player_level: u8,
    /// Deepest level reached
    pub max_depth: i32,
    /// How the game ended, e.g. "Slain by an orc warrior"
    pub death: String,
    /// Turn count at end
    pub turns: u64,
}

impl ScoreEntry {
    /// Load a score entry from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Format the score entry with the death description
    pub fn format_full(&self) -> String {
        format!(
            "{:>8} {} the {} (level {}), {} on level {} (turn {})",
            self.points,
            self.name,
            self.character,
            self.player_level,
            self.death,
            self.max_depth,
            self.turns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ScoreEntry {
        ScoreEntry {
            points: 12345,
            name: "Grub".to_string(),
            character: "Hill Orc Berserker".to_string(),
            player_level: 11,
            max_depth: 9,
            death: "Slain by an orc warrior".to_string(),
            turns: 20154,
        }
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            entry().format_full(),
            "   12345 Grub the Hill Orc Berserker (level 11), Slain by an orc warrior on level 9 (turn 20154)"
        );
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        std::fs::write(&path, serde_json::to_string(&entry()).unwrap()).unwrap();
        assert_eq!(ScoreEntry::load(&path).unwrap(), entry());
    }
}
