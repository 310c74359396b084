//! Stash tracking: remembered item piles around the dungeon
//!
//! The dump asks a [`StashDump`] to write its listing next to the morgue file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Anything that can write a stash listing file
pub trait StashDump {
    /// Write the listing to `path`; `full_id` reveals true item names
    fn dump(&self, path: &Path, full_id: bool) -> io::Result<()>;
}

/// A remembered item in a stash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashItem {
    /// Name as the player knows it
    pub name: String,
    /// Fully identified name, if different
    #[serde(default)]
    pub true_name: Option<String>,
}

impl StashItem {
    pub fn display_name(&self, full_id: bool) -> &str {
        match (&self.true_name, full_id) {
            (Some(name), true) => name,
            _ => &self.name,
        }
    }
}

/// A pile of items, or a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stash {
    /// Level name, e.g. "D:5"
    pub place: String,
    pub x: i32,
    pub y: i32,
    /// Shop name when this stash is a shop
    #[serde(default)]
    pub shop: Option<String>,
    #[serde(default)]
    pub items: Vec<StashItem>,
}

/// All stashes the player has seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StashTracker {
    pub stashes: Vec<Stash>,
}

impl StashTracker {
    /// Render the listing, grouped by level in first-seen order
    pub fn listing(&self, full_id: bool) -> String {
        let mut places: Vec<&str> = Vec::new();
        for stash in &self.stashes {
            if !places.contains(&stash.place.as_str()) {
                places.push(&stash.place);
            }
        }

        let mut text = String::new();
        for place in places {
            text += place;
            text += "\n";
            for stash in self.stashes.iter().filter(|s| s.place == place) {
                match &stash.shop {
                    Some(shop) => text += &format!("  {} ({}, {})\n", shop, stash.x, stash.y),
                    None => text += &format!("  ({}, {})\n", stash.x, stash.y),
                }
                for item in &stash.items {
                    text += "    ";
                    text += item.display_name(full_id);
                    text += "\n";
                }
            }
            text += "\n";
        }
        text
    }
}

impl StashDump for StashTracker {
    fn dump(&self, path: &Path, full_id: bool) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.listing(full_id).as_bytes())?;
        writer.flush()
    }
}
