//! dc-core: Character snapshot model for the morgue file writer
//!
//! This crate holds the read-only view of a character that the dump reports
//! on, the dump options, and the end-of-game score record. It does no
//! formatting of its own beyond small per-type descriptions.

pub mod kills;
pub mod notes;
pub mod object;
pub mod player;
pub mod snapshot;
pub mod stash;
pub mod world;

pub use kills::{KillCategory, KillRecord, KillTally};
pub use notes::{NOTES_HEADER, Note};
pub use player::Character;
pub use snapshot::{Snapshot, SnapshotError, load_snapshot, save_snapshot};
pub use stash::{StashDump, StashTracker};
pub use world::{DumpOptions, ItemOriginFlags, OptionsError, ScoreEntry};

/// Name of the game printed in the dump header
pub const GAME_NAME: &str = "Dungeon Crawl";

/// Width of the report, in columns
pub const REPORT_WIDTH: usize = 79;
