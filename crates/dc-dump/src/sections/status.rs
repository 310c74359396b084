//! Header, stats and the one-line status sections

use dc_core::GAME_NAME;

use crate::params::{DumpContext, DumpParams};

pub fn dump_header(_ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push_str(&format!(
        " {} version {} character file.\n\n",
        GAME_NAME,
        env!("CARGO_PKG_VERSION")
    ));
}

/// Score line of a finished game, then the stat block
pub fn dump_stats(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    if let Some(score) = par.score {
        par.text.push_str(&score.format_full());
        par.text.push('\n');
    }
    for line in &ctx.character.stat_block {
        par.text.push_str(line);
        par.text.push('\n');
    }
    par.text.push_str("\n\n");
}

pub fn dump_location(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push_str(&ctx.character.whereabouts.describe());
    par.text.push('\n');
}

pub fn dump_religion(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let Some(religion) = &ctx.character.religion else {
        return;
    };

    par.text.push_str(&format!("You worship {}.\n", religion.god));
    if religion.under_penance {
        par.text.push_str(&format!("{} is demanding penance.\n", religion.god));
    } else {
        par.text.push_str(&religion.prayer_reaction);
        par.text.push('\n');
    }
}

pub fn dump_burden(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    if let Some(text) = ctx.character.burden.description() {
        par.text.push_str(text);
        par.text.push('\n');
    }
}

pub fn dump_hunger(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    par.text.push_str(&format!("You are {}.\n\n", ctx.character.hunger_level()));
}

pub fn dump_transform(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    if let Some(form) = ctx.character.transformation {
        par.text.push_str(form.description());
        par.text.push_str("\n\n");
    }
}

/// Location, religion, burden, hunger and transformation together
pub fn dump_misc(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    dump_location(ctx, par);
    dump_religion(ctx, par);
    dump_burden(ctx, par);
    dump_hunger(ctx, par);
    dump_transform(ctx, par);
}
