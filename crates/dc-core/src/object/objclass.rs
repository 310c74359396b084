//! Object class definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Object classes, in inventory listing order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum ObjectClass {
    Weapons = 0,
    Missiles = 1,
    Armour = 2,
    Wands = 3,
    Food = 4,
    UnknownI = 5,
    Scrolls = 6,
    Jewellery = 7,
    Potions = 8,
    UnknownII = 9,
    Books = 10,
    Staves = 11,
    Orbs = 12,
    Miscellany = 13,
    Corpses = 14,
    Gold = 15,
}

impl ObjectClass {
    /// Heading used when grouping the inventory
    ///
    /// `None` for the placeholder classes, which never hold real items.
    pub const fn heading(&self) -> Option<&'static str> {
        match self {
            ObjectClass::Weapons => Some("Hand weapons"),
            ObjectClass::Missiles => Some("Missiles"),
            ObjectClass::Armour => Some("Armour"),
            ObjectClass::Wands => Some("Magical devices"),
            ObjectClass::Food => Some("Comestibles"),
            ObjectClass::Scrolls => Some("Scrolls"),
            ObjectClass::Jewellery => Some("Jewellery"),
            ObjectClass::Potions => Some("Potions"),
            ObjectClass::Books => Some("Books"),
            ObjectClass::Staves => Some("Magical staves"),
            ObjectClass::Orbs => Some("Orbs of Power"),
            ObjectClass::Miscellany => Some("Miscellaneous"),
            ObjectClass::Corpses => Some("Carrion"),
            ObjectClass::Gold => Some("Gold"),
            ObjectClass::UnknownI | ObjectClass::UnknownII => None,
        }
    }

    /// Whether items of this class appear in the grouped inventory listing
    pub const fn is_listed(&self) -> bool {
        !matches!(self, ObjectClass::Gold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_placeholders_lack_heading() {
        let missing: Vec<_> = ObjectClass::iter()
            .filter(|c| c.heading().is_none())
            .collect();
        assert_eq!(missing, vec![ObjectClass::UnknownI, ObjectClass::UnknownII]);
    }

    #[test]
    fn test_gold_not_listed() {
        assert!(!ObjectClass::Gold.is_listed());
        assert!(ObjectClass::Corpses.is_listed());
    }
}
