//! Character dump writer
//!
//! Reads a character snapshot saved by the game and writes its morgue file.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use log::{debug, info};

use dc_core::{DumpOptions, ScoreEntry, load_snapshot};
use dc_dump::writer::morgue_directory;
use dc_dump::{DumpContext, TextSections, dump_char, whereis_record};

/// Environment variable naming the game directory
const GAME_DIR_VAR: &str = "CRAWL_DIR";

/// Write a character dump (morgue file)
#[derive(Parser, Debug)]
#[command(name = "morgue")]
#[command(author, version, about = "Write a character dump from a saved snapshot", long_about = None)]
struct Args {
    /// Character snapshot (JSON)
    snapshot: PathBuf,

    /// Options file (crawlrc style)
    #[arg(short = 'o', long = "options")]
    options: Option<PathBuf>,

    /// Score record of the finished game (JSON)
    #[arg(short = 's', long = "score")]
    score: Option<PathBuf>,

    /// Base name of the written files
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Show item values in the inventory
    #[arg(short = 'p', long = "prices")]
    prices: bool,

    /// Show fully identified item names
    #[arg(short = 'f', long = "full-id")]
    full_id: bool,

    /// Directory to write to (overrides the options file)
    #[arg(short = 'd', long = "morgue-dir")]
    morgue_dir: Option<PathBuf>,

    /// Also write a whereis record with this status
    #[arg(long = "whereis")]
    whereis: Option<String>,
}

fn default_name(player: &str) -> String {
    format!("morgue-{}-{}", player, Local::now().format("%Y%m%d-%H%M%S"))
}

fn run(args: &Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let you = &snapshot.character;

    let mut options = match &args.options {
        Some(path) => DumpOptions::load_from_file(path)?,
        None => DumpOptions::default(),
    };
    if let Some(dir) = &args.morgue_dir {
        options.morgue_dir = Some(dir.clone());
    }

    let score = args.score.as_ref().map(ScoreEntry::load).transpose()?;

    let game_dir = std::env::var_os(GAME_DIR_VAR).map(PathBuf::from);
    let sections = TextSections::from_options(&options);
    let mut ctx = DumpContext::new(you, &options)
        .with_script(&sections)
        .with_stashes(&snapshot.stashes);
    if let Some(dir) = game_dir.as_deref() {
        debug!("game directory {}", dir.display());
        ctx = ctx.with_game_dir(dir);
    }

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_name(&you.name));
    let path = dump_char(&name, &ctx, args.prices, args.full_id, score.as_ref())?;

    if let Some(status) = &args.whereis {
        let dir = morgue_directory(&ctx);
        let record = whereis_record(&dir, &you.name, &format!("name={}", you.name), status)?;
        info!("wrote {}", record.display());
    }

    Ok(path)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("morgue: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["morgue", "save.json", "--prices", "-n", "final", "--whereis", "dead"]);
        assert_eq!(args.snapshot, PathBuf::from("save.json"));
        assert!(args.prices);
        assert!(!args.full_id);
        assert_eq!(args.name.as_deref(), Some("final"));
        assert_eq!(args.whereis.as_deref(), Some("dead"));
    }

    #[test]
    fn test_default_name() {
        let name = default_name("Urist");
        assert!(name.starts_with("morgue-Urist-"));
        // YYYYMMDD-HHMMSS
        assert_eq!(name.len(), "morgue-Urist-".len() + 15);
    }
}
