//! dc-dump: Character dump (morgue file) generation
//!
//! A report is assembled section by section. The sections and their order
//! come from [`DumpOptions::dump_order`](dc_core::DumpOptions); each name is
//! looked up in [`sections::DUMP_HANDLERS`] and the matching formatter appends
//! its text to a shared [`DumpParams`] accumulator. The finished text is
//! written to the morgue directory by [`writer::write_dump`].
//!
//! # Example
//!
//! ```no_run
//! use dc_core::{Character, DumpOptions};
//! use dc_dump::{DumpContext, dump_char};
//!
//! let you = Character::new("Urist");
//! let options = DumpOptions::default();
//! let ctx = DumpContext::new(&you, &options);
//! let path = dump_char("morgue-Urist", &ctx, false, false, None).unwrap();
//! println!("wrote {}", path.display());
//! ```

use std::path::PathBuf;

use log::debug;

use dc_core::ScoreEntry;

pub mod dispatch;
mod error;
pub mod layout;
mod params;
pub mod script;
pub mod sections;
pub mod writer;

pub use dispatch::{SectionEntry, SectionFn, dump_section};
pub use error::DumpError;
pub use layout::{Layout, munge_description};
pub use params::{DumpContext, DumpParams};
pub use script::{ScriptError, SectionScript, TextSections};
pub use writer::whereis_record;

/// Build the report text for `ctx` without writing it anywhere
pub fn build_dump<'a>(
    ctx: &DumpContext<'_>,
    show_prices: bool,
    full_id: bool,
    score: Option<&'a ScoreEntry>,
) -> DumpParams<'a> {
    let mut par = DumpParams::new(show_prices, full_id, score);

    for name in &ctx.options.dump_order {
        par.section.clone_from(name);
        dump_section(sections::DUMP_HANDLERS, ctx, &mut par);
    }

    par
}

/// Build the report and write it as `<fname>.txt` in the morgue directory
///
/// Returns the path written.
pub fn dump_char(
    fname: &str,
    ctx: &DumpContext<'_>,
    show_prices: bool,
    full_id: bool,
    score: Option<&ScoreEntry>,
) -> Result<PathBuf, DumpError> {
    debug!(
        "dumping {} sections for {}",
        ctx.options.dump_order.len(),
        ctx.character.name
    );
    let par = build_dump(ctx, show_prices, full_id, score);
    writer::write_dump(fname, ctx, &par.text, par.full_id)
}
