//! Notes, message history, kills and the captured screens

use dc_core::NOTES_HEADER;

use crate::params::{DumpContext, DumpParams};

/// Width of the rule under the notes header
const NOTES_RULE_WIDTH: usize = 62;

/// Remove colour tags such as `<lightblue>` and `</lightblue>`
///
/// `<<` stands for a literal `<`.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            out.push(ch);
        } else if chars.next_if_eq(&'<').is_some() {
            out.push('<');
        } else {
            for c in chars.by_ref() {
                if c == '>' {
                    break;
                }
            }
        }
    }
    out
}

pub fn dump_notes(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let notes = &ctx.character.notes;
    if notes.is_empty() || !ctx.options.use_notes {
        return;
    }

    par.text.push_str("\nNotes\n");
    par.text.push_str(NOTES_HEADER);
    par.text.push('\n');
    par.text.extend(std::iter::repeat_n('-', NOTES_RULE_WIDTH));
    par.text.push('\n');
    for note in notes {
        par.text.push_str(&note.describe());
        par.text.push('\n');
    }
    par.text.push('\n');
}

pub fn dump_messages(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let count = ctx.options.dump_message_count;
    if count > 0 {
        par.text.push_str("Message History\n\n");
        par.text.push_str(&ctx.character.last_messages(count));
    }
}

pub fn dump_screenshot(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push_str(&ctx.character.screenshot);
    par.text.push_str("\n\n");
}

pub fn dump_kills(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push_str(&ctx.character.kills.kill_info());
}

pub fn dump_overview(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let overview = strip_markup(&ctx.character.overview);
    par.text.push_str(overview.trim());
    par.text.push_str("\n\n");
}
