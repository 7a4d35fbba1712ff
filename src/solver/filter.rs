//! Candidate filtering
//!
//! Keeps exactly the words consistent with a clue state, preserving order.

use crate::clues::ClueState;
use crate::core::Word;

/// Filter words down to those consistent with `clues`
///
/// Order is preserved and the operation is idempotent.
///
/// # Examples
/// ```
/// use wordle_guesser::clues::{ClueState, parse};
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::filter;
///
/// let words = vec![Word::new("aeros").unwrap(), Word::new("zzzzz").unwrap()];
/// let clues = ClueState::new().merge(&parse("aeros", "bbbbb", 5).unwrap());
///
/// let remaining = filter(&words, &clues);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "zzzzz");
/// ```
pub fn filter<'a, I>(words: I, clues: &ClueState) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words.into_iter().filter(|word| clues.admits(word)).collect()
}

/// Filter dictionary indices down to words consistent with `clues`
///
/// Index-based variant used by the engine and the simulation cache.
///
/// # Panics
/// Panics if an id is out of range for `dictionary`.
#[must_use]
pub fn filter_ids(dictionary: &[Word], ids: &[usize], clues: &ClueState) -> Vec<usize> {
    ids.iter()
        .copied()
        .filter(|&id| clues.admits(&dictionary[id]))
        .collect()
}
