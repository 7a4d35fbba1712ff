//! Word lists
//!
//! The default dictionary is embedded at build time; other lists can be
//! loaded from files through [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_5_COUNT};

use crate::core::Word;

/// Embedded dictionary for `length`-letter words, if one exists
#[must_use]
pub fn embedded(length: usize) -> Option<Vec<Word>> {
    (length == 5).then(|| loader::words_from_slice(WORDS_5, 5))
}
