//! Inventory items (as seen by the dump)

use serde::{Deserialize, Serialize};

use super::ObjectClass;

/// An item carried by the player
///
/// Names, values and descriptions are computed by the identification and
/// valuation code before the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Inventory letter
    pub letter: char,
    /// Full inventory name including equip status, e.g. "a +2 long sword (weapon)"
    pub name: String,
    /// Object class
    pub class: ObjectClass,
    /// Value assuming full identification
    #[serde(default)]
    pub value: i32,
    /// Value as currently known to the player
    #[serde(default)]
    pub apparent_value: i32,
    /// Where the item came from ("Found on level 3 of the Dungeon."), if describable
    #[serde(default)]
    pub origin: Option<String>,
    /// Random or fixed artefact
    #[serde(default)]
    pub artefact: bool,
    /// Artefact properties have been identified
    #[serde(default)]
    pub properties_known: bool,
    /// Item type has been identified
    #[serde(default)]
    pub type_known: bool,
    /// Armour ego or weapon brand other than "normal"
    #[serde(default)]
    pub ego: bool,
    /// Staff class item that is actually a rod
    #[serde(default)]
    pub rod: bool,
    /// Rune of Zot
    #[serde(default)]
    pub rune: bool,
    /// Long description using '$' as paragraph breaks; present for dumpable artefacts
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Create a plain item with nothing special about it
    pub fn new(letter: char, name: impl Into<String>, class: ObjectClass) -> Self {
        Self {
            letter,
            name: name.into(),
            class,
            value: 0,
            apparent_value: 0,
            origin: None,
            artefact: false,
            properties_known: false,
            type_known: false,
            ego: false,
            rod: false,
            rune: false,
            description: None,
        }
    }

    /// Whether the item is an artefact worth describing in full
    pub fn is_dumpable_artefact(&self) -> bool {
        self.description.is_some()
    }
}
