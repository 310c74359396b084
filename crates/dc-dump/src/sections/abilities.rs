//! Skills, spells and mutations

use dc_core::player::KnownSpell;

use crate::params::{DumpContext, DumpParams};

/// Column stops of the spell table
const SPELL_COLUMNS: [usize; 4] = [26, 41, 56, 68];

/// Longest "x - Title" prefix before truncation
const SPELL_TITLE_WIDTH: usize = 24;

const SPELL_TABLE_HEADER: &str =
    " Your Spells              Type           Power          Success   Level\n";

pub fn dump_skills(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let you = ctx.character;
    par.text.push_str(&format!(
        " You have {} experience left.\n\n   Skills:\n",
        you.exp_available
    ));

    for (skill_type, skill) in you.skills.learned() {
        let marker = if skill.is_maxed() {
            " * "
        } else if skill.training {
            " + "
        } else {
            " - "
        };
        par.text.push_str(&format!(
            "{}Level {} {}\n",
            marker,
            skill.level,
            skill_type.name()
        ));
    }

    par.text.push_str("\n\n");
}

fn spell_levels_sentence(levels: i32) -> String {
    match levels {
        1 => "You have one spell level left.".to_string(),
        0 => "You cannot memorise any spells.".to_string(),
        n => format!("You have {} spell levels left.", n),
    }
}

/// Position of a casting letter in the listing (a-z, then A-Z)
///
/// `None` for anything that is not a casting letter.
fn letter_index(letter: char) -> Option<usize> {
    match letter {
        'a'..='z' => Some(letter as usize - 'a' as usize),
        'A'..='Z' => Some(letter as usize - 'A' as usize + 26),
        _ => None,
    }
}

fn pad_to(line: &mut String, column: usize) {
    let len = line.chars().count();
    if len < column {
        line.extend(std::iter::repeat_n(' ', column - len));
    }
}

fn spell_line(spell: &KnownSpell) -> String {
    let mut line: String = format!("{} - {}", spell.letter, spell.title)
        .chars()
        .take(SPELL_TITLE_WIDTH)
        .collect();

    pad_to(&mut line, SPELL_COLUMNS[0]);
    line.push_str(&spell.schools.short_names());
    pad_to(&mut line, SPELL_COLUMNS[1]);
    line.push_str(&spell.power_string());
    pad_to(&mut line, SPELL_COLUMNS[2]);
    line.push_str(spell.failure_string());
    pad_to(&mut line, SPELL_COLUMNS[3]);
    line.push_str(&spell.level.to_string());
    line.push('\n');
    line
}

pub fn dump_spells(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let you = ctx.character;
    par.text.push_str(&spell_levels_sentence(you.spell_levels));
    par.text.push('\n');

    if you.spells.is_empty() {
        par.text.push_str("You don't know any spells.\n");
        return;
    }

    par.text.push_str("You know the following spells:\n\n");
    par.text.push_str(SPELL_TABLE_HEADER);

    let mut spells: Vec<(usize, &KnownSpell)> = you
        .spells
        .iter()
        .filter_map(|spell| letter_index(spell.letter).map(|index| (index, spell)))
        .collect();
    spells.sort_by_key(|(index, _)| *index);
    for (_, spell) in spells {
        par.text.push_str(&spell_line(spell));
    }
}

pub fn dump_mutations(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let mutations = &ctx.character.mutations;
    if mutations.is_empty() {
        return;
    }

    par.text.push('\n');
    par.text.push_str("Innate abilities, Weirdness & Mutations\n");
    for line in mutations {
        par.text.push_str(line);
        par.text.push('\n');
    }
    par.text.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::player::{Skill, SkillType, SpellSchools};
    use dc_core::{Character, DumpOptions};

    fn dump(you: &Character, f: fn(&DumpContext<'_>, &mut DumpParams<'_>)) -> String {
        let options = DumpOptions::default();
        let ctx = DumpContext::new(you, &options);
        let mut par = DumpParams::new(false, false, None);
        f(&ctx, &mut par);
        par.text
    }

    fn spell(letter: char, title: &str, schools: SpellSchools) -> KnownSpell {
        KnownSpell {
            letter,
            title: title.to_string(),
            schools,
            power: 12,
            power_cap: 25,
            fail: 3,
            level: 1,
        }
    }

    #[test]
    fn test_skills() {
        let mut you = Character::new("Tester");
        you.exp_available = 120;
        you.skills.set(SkillType::Fighting, Skill::new(27, true));
        you.skills.set(SkillType::Axes, Skill::new(8, true));
        you.skills.set(SkillType::Dodging, Skill::new(3, false));

        assert_eq!(
            dump(&you, dump_skills),
            " You have 120 experience left.\n\n   Skills:\n\
             \x20* Level 27 Fighting\n\
             \x20+ Level 8 Axes\n\
             \x20- Level 3 Dodging\n\
             \n\n"
        );
    }

    #[test]
    fn test_no_spells() {
        let mut you = Character::new("Tester");
        assert_eq!(
            dump(&you, dump_spells),
            "You cannot memorise any spells.\nYou don't know any spells.\n"
        );

        you.spell_levels = 1;
        assert!(dump(&you, dump_spells).starts_with("You have one spell level left.\n"));
        you.spell_levels = 5;
        assert!(dump(&you, dump_spells).starts_with("You have 5 spell levels left.\n"));
    }

    #[test]
    fn test_spell_columns() {
        let line = spell_line(&spell(
            'a',
            "Magic Dart",
            SpellSchools::CONJURATION,
        ));
        assert_eq!(
            line,
            "a - Magic Dart            Conj           ###..          Excellent   1\n"
        );
        assert_eq!(line.find("Conj"), Some(26));
        assert_eq!(line.find("###"), Some(41));
        assert_eq!(line.find("Excellent"), Some(56));
        assert_eq!(line.find('1'), Some(68));
    }

    #[test]
    fn test_long_title_truncated() {
        let line = spell_line(&spell(
            'b',
            "Summon Greater Demonic Entity",
            SpellSchools::SUMMONING | SpellSchools::NECROMANCY,
        ));
        assert!(line.starts_with("b - Summon Greater Demon  Summ/Necr"));
    }

    #[test]
    fn test_spells_listed_by_letter() {
        let mut you = Character::new("Tester");
        you.spell_levels = 2;
        you.spells = vec![
            spell('B', "Blink", SpellSchools::TRANSLOCATION),
            spell('c', "Freeze", SpellSchools::ICE),
            spell('a', "Magic Dart", SpellSchools::CONJURATION),
        ];

        let text = dump(&you, dump_spells);
        let letters: Vec<char> = text
            .lines()
            .skip(4)
            .filter_map(|line| line.chars().next())
            .collect();
        assert_eq!(letters, vec!['a', 'c', 'B']);
        assert!(text.contains(SPELL_TABLE_HEADER));
    }

    #[test]
    fn test_spells_without_casting_letter_skipped() {
        let mut you = Character::new("Tester");
        you.spell_levels = 2;
        you.spells = vec![
            spell('?', "Portal", SpellSchools::TRANSLOCATION),
            spell('a', "Magic Dart", SpellSchools::CONJURATION),
        ];

        let text = dump(&you, dump_spells);
        assert!(text.contains("a - Magic Dart"));
        assert!(!text.contains("Portal"));
        assert_eq!(letter_index('Z'), Some(51));
        assert_eq!(letter_index('1'), None);
    }

    #[test]
    fn test_mutations() {
        let mut you = Character::new("Tester");
        assert_eq!(dump(&you, dump_mutations), "");

        you.mutations = vec!["You have tough skin (AC +1).".to_string()];
        assert_eq!(
            dump(&you, dump_mutations),
            "\nInnate abilities, Weirdness & Mutations\nYou have tough skin (AC +1).\n\n\n"
        );
    }
}
