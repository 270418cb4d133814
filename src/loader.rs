//! Word list loading.
//!
//! Builds a [`PrefixTree`] from line-oriented input: one word per line,
//! trailing whitespace stripped, blank lines skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_structures::PrefixTree;
use crate::error::AppResult;

/// Reads words from `reader` into a new tree.
pub fn read_words<R: BufRead>(reader: R) -> AppResult<PrefixTree> {
    let mut tree = PrefixTree::new();
    let mut lines = 0usize;

    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if word.is_empty() {
            continue;
        }
        tree.insert(word);
        lines += 1;
    }

    tracing::debug!(lines, strings = tree.len(), edges = tree.size(), "loaded word list");
    Ok(tree)
}

/// Reads the word list at `path` into a new tree.
pub fn load_words_file<P: AsRef<Path>>(path: P) -> AppResult<PrefixTree> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading word list");
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}
