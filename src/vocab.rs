// Licensed under the MIT license.

//! Loading vocabularies from word-per-line sources.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read one word per line from `reader`.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Words are
/// otherwise returned as written, in file order.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();

        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Read a vocabulary file, one word per line.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let words = read_words(BufReader::new(File::open(path)?))?;

    debug!(path = %path.display(), words = words.len(), "Loaded vocabulary");

    Ok(words)
}
