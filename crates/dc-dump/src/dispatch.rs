//! Section dispatch table
//!
//! A report is a list of section names. Each name is looked up in an ordered
//! table; the first entry that matches writes its text into the accumulator.
//! Names the table does not know go to the wildcard entry, if it has a
//! handler.

use log::debug;

use dc_core::REPORT_WIDTH;

use crate::params::{DumpContext, DumpParams};

/// A section formatter
pub type SectionFn = fn(&DumpContext<'_>, &mut DumpParams<'_>);

/// One row of the dispatch table
#[derive(Debug, Clone, Copy)]
pub enum SectionEntry {
    /// A section requested by name
    Named(&'static str, SectionFn),
    /// The empty name: a blank line
    Blank,
    /// The name "-": a horizontal rule across the report
    Rule,
    /// Matches any name; `None` drops unknown names
    Wildcard(Option<SectionFn>),
}

impl SectionEntry {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            SectionEntry::Named(entry, _) => *entry == name,
            SectionEntry::Blank => name.is_empty(),
            SectionEntry::Rule => name == "-",
            SectionEntry::Wildcard(_) => true,
        }
    }

    pub fn run(&self, ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
        match self {
            SectionEntry::Named(_, handler) => handler(ctx, par),
            SectionEntry::Blank => par.text.push('\n'),
            SectionEntry::Rule => {
                par.text.extend(std::iter::repeat_n('-', REPORT_WIDTH));
                par.text.push('\n');
            }
            SectionEntry::Wildcard(Some(handler)) => handler(ctx, par),
            SectionEntry::Wildcard(None) => {}
        }
    }
}

/// First entry matching `name`
pub fn resolve<'t>(table: &'t [SectionEntry], name: &str) -> Option<&'t SectionEntry> {
    table.iter().find(|entry| entry.matches(name))
}

/// Dump the section named by `par.section` using `table`
pub fn dump_section(table: &[SectionEntry], ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    match resolve(table, &par.section) {
        Some(entry) => {
            debug!("dumping section '{}'", par.section);
            entry.run(ctx, par);
        }
        None => debug!("no handler for section '{}'", par.section),
    }
}
