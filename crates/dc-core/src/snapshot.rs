//! Character snapshot files
//!
//! A snapshot is the JSON the game writes when it wants a dump made: the
//! character plus the stash tracker contents.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::object::ObjectClass;
use crate::player::Character;
use crate::stash::StashTracker;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Snapshot load/store errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Incompatible snapshot version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Item '{letter}' has invalid class {class}")]
    BadItemClass { letter: char, class: ObjectClass },
}

/// Complete snapshot file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub character: Character,
    #[serde(default)]
    pub stashes: StashTracker,
}

impl Snapshot {
    pub fn new(character: Character, stashes: StashTracker) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            character,
            stashes,
        }
    }

    /// Check the snapshot can be dumped
    ///
    /// Every carried item must belong to a class with an inventory heading.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::IncompatibleVersion {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            });
        }
        if let Some(item) = self
            .character
            .inventory
            .iter()
            .find(|item| item.class.heading().is_none())
        {
            return Err(SnapshotError::BadItemClass {
                letter: item.letter,
                class: item.class,
            });
        }
        Ok(())
    }
}

/// Load and validate a snapshot
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    debug!("loading snapshot from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;

    snapshot.validate()?;
    Ok(snapshot)
}

/// Write a snapshot
pub fn save_snapshot(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, snapshot)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Item;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let mut you = Character::new("Saver");
        you.inventory.push(Item::new('a', "a +0 dagger", ObjectClass::Weapons));
        save_snapshot(&Snapshot::new(you, StashTracker::default()), &path).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.character.name, "Saver");
        assert_eq!(loaded.character.inventory.len(), 1);
    }

    #[test]
    fn test_rejects_placeholder_class() {
        let mut you = Character::new("Broken");
        you.inventory.push(Item::new('q', "a strange thing", ObjectClass::UnknownII));
        let snapshot = Snapshot::new(you, StashTracker::default());
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::BadItemClass { letter: 'q', .. })
        ));
    }

    #[test]
    fn test_rejects_other_versions() {
        let mut snapshot = Snapshot::new(Character::new("Old"), StashTracker::default());
        snapshot.version = 999;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::IncompatibleVersion { found: 999, .. })
        ));
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_snapshot("/nonexistent/path/snapshot.json");
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }
}
