//! World state
//!
//! Dump configuration and end-of-game records.

pub mod options;
pub mod score;

pub use options::{DEFAULT_DUMP_ORDER, DumpOptions, ItemOriginFlags, OptionsError};
pub use score::ScoreEntry;
