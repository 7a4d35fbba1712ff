//! Word list loading utilities
//!
//! Turns raw lists (files or embedded slices) into dictionaries of one word
//! length: entries are trimmed and lowercased, invalid or wrong-length
//! entries are skipped, and duplicates keep their first position.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load `length`-letter words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines = content.lines().filter(|line| !line.trim_start().starts_with('#'));
    Ok(collect_words(lines, length))
}

/// Convert an embedded string slice to a dictionary of `length`-letter words
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
/// use wordle_guesser::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5, 5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    collect_words(slice.iter().copied(), length)
}

fn collect_words<'a>(entries: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let words: Vec<Word> = entries
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let word = Word::with_length(entry.to_ascii_lowercase(), length).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();
    if skipped > 0 {
        log::debug!("skipped {skipped} entries that are not {length}-letter words");
    }
    words
}
