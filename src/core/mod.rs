//! Core domain types for the word puzzle
//!
//! Words and per-position feedback. Everything above this layer (clues,
//! filtering, guess selection) is expressed in terms of these two types.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{ALPHABET_SIZE, Word, WordError, index_letter, letter_index};
