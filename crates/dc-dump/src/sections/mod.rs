//! Section formatters and the table that names them

mod abilities;
mod history;
mod inventory;
mod status;

pub use abilities::{dump_mutations, dump_skills, dump_spells};
pub use history::{dump_kills, dump_messages, dump_notes, dump_overview, dump_screenshot};
pub use inventory::{dump_inventory, shows_origin};
pub use status::{
    dump_burden, dump_header, dump_hunger, dump_location, dump_misc, dump_religion, dump_stats,
    dump_transform,
};

use crate::dispatch::{SectionEntry, SectionFn};

#[cfg(feature = "scripting")]
const WILDCARD_HANDLER: Option<SectionFn> = Some(crate::script::dump_script);
#[cfg(not(feature = "scripting"))]
const WILDCARD_HANDLER: Option<SectionFn> = None;

/// Every section a `dump_order` may name, in lookup order
pub static DUMP_HANDLERS: &[SectionEntry] = &[
    SectionEntry::Named("header", dump_header),
    SectionEntry::Named("stats", dump_stats),
    SectionEntry::Named("location", dump_location),
    SectionEntry::Named("religion", dump_religion),
    SectionEntry::Named("burden", dump_burden),
    SectionEntry::Named("hunger", dump_hunger),
    SectionEntry::Named("transform", dump_transform),
    SectionEntry::Named("misc", dump_misc),
    SectionEntry::Named("notes", dump_notes),
    SectionEntry::Named("inventory", dump_inventory),
    SectionEntry::Named("skills", dump_skills),
    SectionEntry::Named("spells", dump_spells),
    SectionEntry::Named("mutations", dump_mutations),
    SectionEntry::Named("messages", dump_messages),
    SectionEntry::Named("screenshot", dump_screenshot),
    SectionEntry::Named("kills", dump_kills),
    SectionEntry::Named("overview", dump_overview),
    SectionEntry::Blank,
    SectionEntry::Rule,
    // Must stay last
    SectionEntry::Wildcard(WILDCARD_HANDLER),
];

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::world::DEFAULT_DUMP_ORDER;

    #[test]
    fn test_default_order_is_all_named() {
        for name in DEFAULT_DUMP_ORDER.split(',') {
            assert!(
                DUMP_HANDLERS
                    .iter()
                    .any(|entry| matches!(entry, SectionEntry::Named(n, _) if *n == name)),
                "no handler for {}",
                name
            );
        }
    }

    #[test]
    fn test_wildcard_is_last() {
        let last = DUMP_HANDLERS.last();
        assert!(matches!(last, Some(SectionEntry::Wildcard(_))));
        let wildcards = DUMP_HANDLERS
            .iter()
            .filter(|entry| matches!(entry, SectionEntry::Wildcard(_)))
            .count();
        assert_eq!(wildcards, 1);
    }
}
