//! Loading raffle options from a newline-delimited text file.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::RaffleError;

/// Read the options file at `path`.
///
/// Fails with `FileRead` if the file can't be read and with `EmptyOptions`
/// if every line is blank.
pub fn load_options(path: &Path) -> Result<Vec<String>, RaffleError> {
    let bytes = fs::read(path).map_err(|source| RaffleError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let options = parse_options(&String::from_utf8_lossy(&bytes));
    debug!(path = ?path, count = options.len(), "options:loaded");

    if options.is_empty() {
        return Err(RaffleError::EmptyOptions {
            path: path.to_path_buf(),
        });
    }
    Ok(options)
}

/// Split text on `\n`, dropping lines that are empty or whitespace only.
/// Kept lines are returned verbatim.
pub fn parse_options(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
