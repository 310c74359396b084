use std::path::PathBuf;

use thiserror::Error;

/// Morgue file writing errors
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Error opening file '{}': {source}", .path.display())]
    CouldNotOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
