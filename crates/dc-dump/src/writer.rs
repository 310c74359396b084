//! Writing the finished report to the morgue directory

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::error::DumpError;
use crate::params::DumpContext;

/// Directory morgue files go to
///
/// The configured morgue directory, else the game directory, else the
/// current directory.
pub fn morgue_directory(ctx: &DumpContext<'_>) -> PathBuf {
    ctx.options
        .morgue_dir
        .clone()
        .or_else(|| ctx.game_dir.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Drop characters that would change where the file lands
pub fn strip_filename_unsafe_chars(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '/' | '\\'))
        .collect()
}

fn write_text(path: &Path, text: &str) -> Result<(), DumpError> {
    let file = File::create(path).map_err(|source| {
        error!("Error opening file '{}'", path.display());
        DumpError::CouldNotOpen {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut writer = BufWriter::new(file);
    let result = writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush());
    drop(writer);

    result.map_err(|source| {
        error!("Error writing file '{}': {}", path.display(), source);
        if let Err(err) = fs::remove_file(path) {
            warn!("could not remove partial file '{}': {}", path.display(), err);
        }
        DumpError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Write `text` as `<name>.txt`, and the stash listing as `<name>.lst`
///
/// Returns the path of the report.
pub fn write_dump(
    name: &str,
    ctx: &DumpContext<'_>,
    text: &str,
    full_id: bool,
) -> Result<PathBuf, DumpError> {
    let dir = morgue_directory(ctx);
    let base = strip_filename_unsafe_chars(name);

    if let Some(stashes) = ctx.stashes {
        let listing = dir.join(format!("{}.lst", base));
        if let Err(err) = stashes.dump(&listing, full_id) {
            warn!("could not write stash listing '{}': {}", listing.display(), err);
        }
    }

    let path = dir.join(format!("{}.txt", base));
    debug!("writing character dump to {}", path.display());
    write_text(&path, text)?;
    Ok(path)
}

/// Record the player's current status for external watchers
pub fn whereis_record(
    dir: &Path,
    name: &str,
    status_line: &str,
    status: &str,
) -> Result<PathBuf, DumpError> {
    let path = dir.join(format!("{}.where", strip_filename_unsafe_chars(name)));
    write_text(&path, &format!("{}:status={}\n", status_line, status))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::{Character, DumpOptions};

    #[test]
    fn test_strip_unsafe() {
        assert_eq!(strip_filename_unsafe_chars("morgue-Bob Smith.x"), "morgue-BobSmithx");
        assert_eq!(strip_filename_unsafe_chars("../../etc/passwd"), "etcpasswd");
        assert_eq!(strip_filename_unsafe_chars("a\\b"), "ab");
    }

    #[test]
    fn test_morgue_directory_precedence() {
        let you = Character::new("Tester");
        let game_dir = PathBuf::from("/games/crawl");

        let options = DumpOptions::default();
        let ctx = DumpContext::new(&you, &options);
        assert_eq!(morgue_directory(&ctx), PathBuf::from("."));

        let ctx = ctx.with_game_dir(&game_dir);
        assert_eq!(morgue_directory(&ctx), game_dir);

        let options = DumpOptions {
            morgue_dir: Some(PathBuf::from("/var/morgue")),
            ..DumpOptions::default()
        };
        let ctx = DumpContext::new(&you, &options).with_game_dir(&game_dir);
        assert_eq!(morgue_directory(&ctx), PathBuf::from("/var/morgue"));
    }

    #[test]
    fn test_whereis_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = whereis_record(dir.path(), "Bob", "Bob the Slasher on D:3", "active").unwrap();
        assert_eq!(path, dir.path().join("Bob.where"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Bob the Slasher on D:3:status=active\n"
        );
    }

    #[test]
    fn test_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let you = Character::new("Tester");
        let options = DumpOptions {
            morgue_dir: Some(missing),
            ..DumpOptions::default()
        };
        let ctx = DumpContext::new(&you, &options);
        let result = write_dump("morgue", &ctx, "text", false);
        assert!(matches!(result, Err(DumpError::CouldNotOpen { .. })));
    }
}
