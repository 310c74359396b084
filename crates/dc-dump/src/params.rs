//! Per-report state handed to every section formatter

use std::path::Path;

use dc_core::{Character, DumpOptions, ScoreEntry, StashDump};

use crate::script::SectionScript;

/// Lines of 80 columns reserved up front for a report
const INITIAL_LINES: usize = 100;

/// Everything a formatter may read while a report is built
///
/// The context is read-only; formatters write only to [`DumpParams`].
#[derive(Clone, Copy)]
pub struct DumpContext<'a> {
    pub character: &'a Character,
    pub options: &'a DumpOptions,
    /// Producer for sections not in the static table
    pub script: Option<&'a dyn SectionScript>,
    /// Stash listing written alongside the report
    pub stashes: Option<&'a dyn StashDump>,
    /// Fallback directory when no morgue directory is configured
    pub game_dir: Option<&'a Path>,
}

impl<'a> DumpContext<'a> {
    pub fn new(character: &'a Character, options: &'a DumpOptions) -> Self {
        Self {
            character,
            options,
            script: None,
            stashes: None,
            game_dir: None,
        }
    }

    pub fn with_script(mut self, script: &'a dyn SectionScript) -> Self {
        self.script = Some(script);
        self
    }

    pub fn with_stashes(mut self, stashes: &'a dyn StashDump) -> Self {
        self.stashes = Some(stashes);
        self
    }

    pub fn with_game_dir(mut self, dir: &'a Path) -> Self {
        self.game_dir = Some(dir);
        self
    }
}

/// The report accumulator
#[derive(Debug)]
pub struct DumpParams<'a> {
    /// Report text built so far
    pub text: String,
    /// Name of the section currently being dumped
    pub section: String,
    /// Print item values in the inventory
    pub show_prices: bool,
    /// Print fully identified names
    pub full_id: bool,
    /// Score record of a finished game
    pub score: Option<&'a ScoreEntry>,
}

impl<'a> DumpParams<'a> {
    pub fn new(show_prices: bool, full_id: bool, score: Option<&'a ScoreEntry>) -> Self {
        Self {
            text: String::with_capacity(INITIAL_LINES * 80),
            section: String::new(),
            show_prices,
            full_id,
            score,
        }
    }
}
