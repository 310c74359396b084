//! Inventory listing, grouped by object class

use strum::IntoEnumIterator;

use dc_core::object::{Item, ObjectClass};
use dc_core::{DumpOptions, ItemOriginFlags};

use crate::layout::DESCRIPTION_LAYOUT;
use crate::params::{DumpContext, DumpParams};

/// Whether an item's origin is printed under it
///
/// `shown_price` is the value printed next to the item, when prices are on.
pub fn shows_origin(item: &Item, options: &DumpOptions, shown_price: Option<i32>) -> bool {
    let flags = options.dump_item_origins;
    if flags == ItemOriginFlags::EVERYTHING {
        return true;
    }

    if flags.contains(ItemOriginFlags::ARTEFACTS) && item.artefact && item.properties_known {
        return true;
    }
    if flags.contains(ItemOriginFlags::EGO_ARMOUR)
        && item.class == ObjectClass::Armour
        && item.type_known
    {
        return item.ego;
    }
    if flags.contains(ItemOriginFlags::EGO_WEAPON)
        && item.class == ObjectClass::Weapons
        && item.type_known
    {
        return item.ego;
    }

    let by_class = match item.class {
        ObjectClass::Jewellery => flags.contains(ItemOriginFlags::JEWELLERY),
        ObjectClass::Miscellany => item.rune && flags.contains(ItemOriginFlags::RUNES),
        ObjectClass::Staves if item.rod => flags.contains(ItemOriginFlags::RODS),
        ObjectClass::Staves => flags.contains(ItemOriginFlags::STAVES),
        ObjectClass::Books => flags.contains(ItemOriginFlags::BOOKS),
        _ => false,
    };
    if by_class {
        return true;
    }

    match options.dump_item_origin_price {
        Some(threshold) => shown_price.unwrap_or(item.apparent_value) >= threshold,
        None => false,
    }
}

fn dump_item(item: &Item, ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push(' ');
    par.text.push_str(&item.name);

    let shown_price = par.show_prices.then_some(item.value);
    if let Some(price) = shown_price {
        par.text.push_str(&format!(" ({} gold)", price));
    }

    if let Some(origin) = &item.origin {
        if shows_origin(item, ctx.options, shown_price) {
            par.text.push_str(&format!("\n   ({})", origin));
        }
    }

    match &item.description {
        // The description block starts on its own line below the name
        Some(description) => {
            par.text.push('\n');
            DESCRIPTION_LAYOUT.wrap_into(description, &mut par.text);
        }
        None => par.text.push('\n'),
    }
}

pub fn dump_inventory(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let inventory = &ctx.character.inventory;

    if !inventory.iter().any(|item| item.class.is_listed()) {
        par.text.push_str("You aren't carrying anything.\n");
    } else {
        par.text.push_str("  Inventory:\n");

        for class in ObjectClass::iter().filter(ObjectClass::is_listed) {
            let mut items = inventory.iter().filter(|item| item.class == class).peekable();
            if items.peek().is_none() {
                continue;
            }

            let Some(heading) = class.heading() else {
                unreachable!("item class {} has no inventory heading", class);
            };
            par.text.push_str(heading);
            par.text.push('\n');

            for item in items {
                dump_item(item, ctx, par);
            }
        }
    }

    par.text.push_str("\n\n");
}
