//! Dump options and configuration file loading
//!
//! Reads the dump-related entries of a crawlrc-style file: one `key = value`
//! per line, `+=` and `-=` for list options, `#` for comments. Options that
//! do not concern the dump are skipped.

use std::path::{Path, PathBuf};

use bitflags::bitflags;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sections dumped when no `dump_order` is configured
pub const DEFAULT_DUMP_ORDER: &str =
    "header,stats,misc,notes,inventory,skills,spells,overview,mutations,messages,screenshot,kills";

bitflags! {
    /// Which item kinds get their origin printed in the inventory listing
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ItemOriginFlags: u8 {
        const ARTEFACTS = 0x01;
        const EGO_ARMOUR = 0x02;
        const EGO_WEAPON = 0x04;
        const JEWELLERY = 0x08;
        const RUNES = 0x10;
        const RODS = 0x20;
        const STAVES = 0x40;
        const BOOKS = 0x80;
    }
}

impl ItemOriginFlags {
    /// Every item kind
    pub const EVERYTHING: Self = Self::all();

    fn from_option_name(name: &str) -> Option<Self> {
        let flags = match name {
            "artifacts" | "artefacts" | "artifact" | "artefact" => Self::ARTEFACTS,
            "ego_arm" | "ego armour" | "ego_armour" => Self::EGO_ARMOUR,
            "ego_weap" | "ego weapon" | "ego_weapon" | "ego weapons" => Self::EGO_WEAPON,
            "jewellery" | "jewelry" => Self::JEWELLERY,
            "runes" => Self::RUNES,
            "rods" => Self::RODS,
            "staves" => Self::STAVES,
            "books" => Self::BOOKS,
            "all" | "everything" => Self::EVERYTHING,
            "none" => Self::empty(),
            _ => return None,
        };
        Some(flags)
    }

    fn option_names(&self) -> Vec<&'static str> {
        if *self == Self::EVERYTHING {
            return vec!["all"];
        }
        let names = [
            (Self::ARTEFACTS, "artifacts"),
            (Self::EGO_ARMOUR, "ego_arm"),
            (Self::EGO_WEAPON, "ego_weap"),
            (Self::JEWELLERY, "jewellery"),
            (Self::RUNES, "runes"),
            (Self::RODS, "rods"),
            (Self::STAVES, "staves"),
            (Self::BOOKS, "books"),
        ];
        names
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect()
    }
}

/// How a `key op value` line modifies an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assign {
    Set,
    Add,
    Remove,
}

/// User-configurable dump options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpOptions {
    /// Section names, dumped in this order
    pub dump_order: Vec<String>,
    /// Number of trailing messages included in the message history
    pub dump_message_count: usize,
    /// Whether the notes section is written
    pub use_notes: bool,
    /// Item kinds whose origin is always shown
    pub dump_item_origins: ItemOriginFlags,
    /// Items worth at least this much also get their origin shown
    pub dump_item_origin_price: Option<i32>,
    /// Directory morgue files are written to
    pub morgue_dir: Option<PathBuf>,
    /// User-defined text sections, by name
    pub section_texts: Vec<(String, String)>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            dump_order: DEFAULT_DUMP_ORDER.split(',').map(String::from).collect(),
            dump_message_count: 7,
            use_notes: true,
            dump_item_origins: ItemOriginFlags::ARTEFACTS | ItemOriginFlags::RODS,
            dump_item_origin_price: None,
            morgue_dir: None,
            section_texts: Vec::new(),
        }
    }
}

impl DumpOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(OptionsError::ParseError {
                    line: index + 1,
                    text: line.to_string(),
                });
            };

            let (key, assign) = if let Some(key) = key.strip_suffix('+') {
                (key, Assign::Add)
            } else if let Some(key) = key.strip_suffix('-') {
                (key, Assign::Remove)
            } else {
                (key, Assign::Set)
            };

            options.set_option(key.trim(), value.trim(), assign)?;
        }

        Ok(options)
    }

    /// Apply a single option
    fn set_option(&mut self, name: &str, value: &str, assign: Assign) -> Result<(), OptionsError> {
        match name {
            "dump_order" => self.set_dump_order(value, assign),
            "dump_item_origins" => self.set_item_origins(value, assign)?,
            "dump_message_count" => {
                self.dump_message_count = value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
            }
            "dump_item_origin_price" => {
                let price: i32 = value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
                self.dump_item_origin_price = (price >= 0).then_some(price);
            }
            "use_notes" => self.use_notes = parse_bool(name, value)?,
            "morgue_dir" => {
                self.morgue_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "section_text" => {
                let (section, text) = value
                    .split_once(':')
                    .ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
                let section = section.trim().to_string();
                let text = text.trim_start().replace("\\n", "\n");
                self.section_texts.retain(|(s, _)| *s != section);
                self.section_texts.push((section, text));
            }
            _ => debug!("ignoring option {}", name),
        }
        Ok(())
    }

    fn set_dump_order(&mut self, value: &str, assign: Assign) {
        if assign == Assign::Set {
            self.dump_order.clear();
        }
        // `dump_order =` clears, `dump_order +=` appends one blank line
        if value.is_empty() && assign == Assign::Set {
            return;
        }
        for field in value.split(',').map(str::trim) {
            match assign {
                Assign::Remove => self.dump_order.retain(|s| s != field),
                Assign::Set | Assign::Add => self.dump_order.push(field.to_string()),
            }
        }
    }

    fn set_item_origins(&mut self, value: &str, assign: Assign) -> Result<(), OptionsError> {
        let mut flags = ItemOriginFlags::empty();
        for field in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            flags |= ItemOriginFlags::from_option_name(field).ok_or_else(|| {
                OptionsError::InvalidValue("dump_item_origins".to_string(), field.to_string())
            })?;
        }
        match assign {
            Assign::Set => self.dump_item_origins = flags,
            Assign::Add => self.dump_item_origins |= flags,
            Assign::Remove => self.dump_item_origins &= !flags,
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = Vec::new();
        lines.push("# Character dump options".to_string());
        lines.push(String::new());

        lines.push(format!("dump_order = {}", self.dump_order.join(",")));
        if self.dump_order.len() == 1 && self.dump_order[0].is_empty() {
            lines.push("dump_order +=".to_string());
        }
        lines.push(format!("dump_message_count = {}", self.dump_message_count));
        lines.push(format!("use_notes = {}", self.use_notes));

        let origins = self.dump_item_origins.option_names();
        if origins.is_empty() {
            lines.push("dump_item_origins = none".to_string());
        } else {
            lines.push(format!("dump_item_origins = {}", origins.join(",")));
        }
        lines.push(format!(
            "dump_item_origin_price = {}",
            self.dump_item_origin_price.unwrap_or(-1)
        ));

        if let Some(ref dir) = self.morgue_dir {
            lines.push(format!("morgue_dir = {}", dir.display()));
        }

        if !self.section_texts.is_empty() {
            lines.push(String::new());
            lines.push("# User sections".to_string());
            for (name, text) in &self.section_texts {
                lines.push(format!("section_text = {}: {}", name, text.replace('\n', "\\n")));
            }
        }

        lines.join("\n")
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, OptionsError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(OptionsError::InvalidValue(name.to_string(), value.to_string())),
    }
}

/// Options parsing error
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {text}")]
    ParseError { line: usize, text: String },

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
