//! Puzzle word representation
//!
//! A Word stores a lowercase ASCII word of any positive length along with a
//! per-letter occurrence table used by clue simulation and filtering.

use std::fmt;
use thiserror::Error;

/// Number of letters in the Latin alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Map a lowercase ASCII letter to its alphabet slot (0-25)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Map an alphabet slot (0-25) back to its lowercase ASCII letter
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'a' + index as u8
}

/// A lowercase word with letter count tracking
///
/// Stores the word as bytes and keeps a count of every letter for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    ///
    /// let word = Word::new("Rager").unwrap();
    /// assert_eq!(word.text(), "rager");
    /// assert_eq!(word.count_of(b'r'), 2);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in text.as_bytes() {
            counts[letter_index(letter)] = counts[letter_index(letter)].saturating_add(1);
        }

        Ok(Self { text, counts })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with slices
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// How many times a letter occurs in the word
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> usize {
        self.counts[letter_index(letter)] as usize
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Iterate over the distinct letters of the word in alphabetical order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, _)| index_letter(index))
    }

    /// Bit set of the letters in the word (bit 0 = 'a')
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.distinct_letters()
            .fold(0, |mask, letter| mask | (1 << letter_index(letter)))
    }

    /// True when no letter repeats
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.counts.iter().all(|&count| count <= 1)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
