//! End-to-end report building and writing

use std::fs;

use dc_core::object::{Item, ObjectClass};
use dc_core::stash::{Stash, StashItem};
use dc_core::{Character, DumpOptions, KillCategory, Note, StashTracker};
use dc_dump::{DumpContext, ScriptError, SectionScript, TextSections, build_dump, dump_char};

fn adventurer() -> Character {
    let mut you = Character::new("Urist");
    you.stat_block = vec!["Urist the Slasher (Hill Orc Berserker)".to_string()];
    you.exp_available = 42;
    you.inventory.push(Item::new('a', "a +0 hand axe (weapon)", ObjectClass::Weapons));
    you.notes.push(Note::new(1, "D:1", "Urist began the quest."));
    you.kills.record(KillCategory::You, "rats", 4);
    you.messages = vec!["You kill the rat!".to_string()];
    you
}

fn options_with_order(order: &[&str]) -> DumpOptions {
    DumpOptions {
        dump_order: order.iter().map(|s| s.to_string()).collect(),
        ..DumpOptions::default()
    }
}

struct Failing;

impl SectionScript for Failing {
    fn call(&self, name: &str) -> Result<String, ScriptError> {
        Err(ScriptError::Failed(format!("{} exploded", name)))
    }
}

#[test]
fn test_blank_rule_blank() {
    let you = adventurer();
    let options = options_with_order(&["", "-", ""]);
    let ctx = DumpContext::new(&you, &options);

    let par = build_dump(&ctx, false, false, None);
    assert_eq!(par.text, format!("\n{}\n\n", "-".repeat(79)));
}

#[test]
fn test_default_order_runs_every_section() {
    let you = adventurer();
    let options = DumpOptions::default();
    let ctx = DumpContext::new(&you, &options);

    let text = build_dump(&ctx, false, false, None).text;
    assert!(text.starts_with(" Dungeon Crawl version "));

    let markers = [
        "Urist the Slasher",
        "You are not hungry.",
        "\nNotes\n",
        "  Inventory:\n",
        " You have 42 experience left.",
        "You don't know any spells.",
        "Message History\n\nYou kill the rat!\n",
        "Vanquished Creatures\n  4 rats\n",
    ];
    let mut last = 0;
    for marker in markers {
        let pos = text[last..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing or out of order: {:?}", marker));
        last += pos;
    }
}

#[test]
fn test_unknown_section_without_script_is_skipped() {
    let you = adventurer();
    let options = options_with_order(&["hunger", "no such section", "burden"]);
    let ctx = DumpContext::new(&you, &options);

    let par = build_dump(&ctx, false, false, None);
    assert_eq!(par.text, "You are not hungry.\n\n");
}

#[cfg(feature = "scripting")]
#[test]
fn test_unknown_section_goes_to_script() {
    let you = adventurer();
    let mut options = options_with_order(&["motto", "hunger"]);
    options.section_texts = vec![("motto".to_string(), "Strike the earth!\n".to_string())];
    let sections = TextSections::from_options(&options);
    let ctx = DumpContext::new(&you, &options).with_script(&sections);

    let par = build_dump(&ctx, false, false, None);
    assert_eq!(par.text, "Strike the earth!\nYou are not hungry.\n\n");
}

#[cfg(feature = "scripting")]
#[test]
fn test_failing_script_does_not_stop_the_dump() {
    let you = adventurer();
    let options = options_with_order(&["boom", "-", "location"]);
    let ctx = DumpContext::new(&you, &options).with_script(&Failing);

    let par = build_dump(&ctx, false, false, None);
    assert_eq!(
        par.text,
        format!(
            "Script dump error: boom exploded\n{}\nYou are in the Dungeon.\n",
            "-".repeat(79)
        )
    );
}

#[test]
fn test_dump_char_writes_report_and_stashes() {
    let dir = tempfile::tempdir().unwrap();
    let you = adventurer();
    let mut options = options_with_order(&["header", "inventory"]);
    options.morgue_dir = Some(dir.path().to_path_buf());

    let stashes = StashTracker {
        stashes: vec![Stash {
            place: "D:2".to_string(),
            x: 3,
            y: 7,
            shop: None,
            items: vec![StashItem {
                name: "a scroll labelled XYZZY".to_string(),
                true_name: Some("a scroll of teleportation".to_string()),
            }],
        }],
    };
    let ctx = DumpContext::new(&you, &options).with_stashes(&stashes);

    let path = dump_char("morgue-Urist 1.0", &ctx, false, true, None).unwrap();
    assert_eq!(path, dir.path().join("morgue-Urist10.txt"));

    let report = fs::read_to_string(&path).unwrap();
    assert!(report.contains("Hand weapons\n a +0 hand axe (weapon)\n"));
    assert!(report.ends_with("\n\n"));

    let listing = fs::read_to_string(dir.path().join("morgue-Urist10.lst")).unwrap();
    assert!(listing.contains("a scroll of teleportation"));
}

#[test]
fn test_stash_failure_does_not_stop_the_dump() {
    struct Unwritable;

    impl dc_core::StashDump for Unwritable {
        fn dump(&self, _path: &std::path::Path, _full_id: bool) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let you = adventurer();
    let mut options = options_with_order(&["location"]);
    options.morgue_dir = Some(dir.path().to_path_buf());
    let ctx = DumpContext::new(&you, &options).with_stashes(&Unwritable);

    let path = dump_char("morgue", &ctx, false, false, None).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "You are in the Dungeon.\n");
}
