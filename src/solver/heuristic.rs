//! Letter-frequency guess heuristic
//!
//! Used when the candidate set is too large to simulate. Letters nothing is
//! known about yet are ranked by how many candidates contain them, and the
//! first dictionary word spelled from exactly one combination of top-ranked
//! letters (all distinct) is played.
//!
//! Dictionary words with all-distinct letters are indexed by letter set, so
//! checking a combination is a single lookup instead of a dictionary scan.

use super::strategy::{Selection, Strategy, StrategyKind};
use crate::clues::ClueState;
use crate::core::{ALPHABET_SIZE, Word, index_letter, letter_index};
use crate::error::SolverError;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Frequency-cover guess picker over a fixed dictionary
///
/// Combinations are `word_length` letters wide (see
/// [`SolverConfig::heuristic_letters`](super::SolverConfig::heuristic_letters)), so games
/// with other lengths cover that many letters rather than a fixed five.
#[derive(Debug, Clone)]
pub struct HeuristicSelector {
    /// Letters a guess must cover
    size: usize,
    /// Letter mask -> first dictionary word with exactly those distinct letters
    index: FxHashMap<u32, usize>,
}

impl HeuristicSelector {
    /// Index `dictionary` for combinations of `size` letters
    #[must_use]
    pub fn new(dictionary: &[Word], size: usize) -> Self {
        let mut index = FxHashMap::default();
        for (id, word) in dictionary.iter().enumerate() {
            if word.len() == size && word.has_distinct_letters() {
                index.entry(word.letter_mask()).or_insert(id);
            }
        }
        Self { size, index }
    }

    /// Number of letters each guess covers
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Open letters ranked by how many candidates contain them
    ///
    /// Only letters with no evidence at all are ranked. Ties keep
    /// alphabetical order.
    #[must_use]
    pub fn rank_letters(dictionary: &[Word], candidates: &[usize], clues: &ClueState) -> Vec<u8> {
        let mut counts = [0usize; ALPHABET_SIZE];
        for &id in candidates {
            for letter in dictionary[id].distinct_letters() {
                counts[letter_index(letter)] += 1;
            }
        }

        let mut ranked: Vec<(u8, usize)> = (0..ALPHABET_SIZE)
            .map(index_letter)
            .filter(|&letter| clues.letter(letter).is_unknown())
            .map(|letter| (letter, counts[letter_index(letter)]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(letter, _)| letter).collect()
    }

    /// Find the first dictionary word covering a combination of top letters
    ///
    /// Combinations are tried in lexicographic order of rank, so every
    /// combination using only higher-ranked letters comes first.
    #[must_use]
    pub fn cover(&self, ranked: &[u8]) -> Option<usize> {
        if self.index.is_empty() || ranked.len() < self.size {
            return None;
        }
        ranked
            .iter()
            .map(|&letter| 1u32 << letter_index(letter))
            .combinations(self.size)
            .find_map(|bits| self.index.get(&bits.into_iter().fold(0, |m, b| m | b)).copied())
    }
}

impl Strategy for HeuristicSelector {
    fn select_guess(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Option<Selection> {
        match candidates {
            [] => None,
            [only] => Some(Selection::forced(*only)),
            [first, ..] => {
                let ranked = Self::rank_letters(dictionary, candidates, clues);
                if let Some(guess) = self.cover(&ranked) {
                    return Some(Selection {
                        guess,
                        kind: StrategyKind::Heuristic,
                        score: None,
                        warning: None,
                    });
                }

                let warning = SolverError::HeuristicExhausted { size: self.size };
                log::warn!("{warning}; falling back to candidate {}", dictionary[*first]);
                Some(Selection {
                    guess: *first,
                    kind: StrategyKind::Heuristic,
                    score: None,
                    warning: Some(warning),
                })
            }
        }
    }
}

/// Pick a guess covering the most frequent open letters among `candidates`
///
/// Returns the chosen word (from `full_dictionary`, or the first candidate
/// when no combination spells a word) and whether the fallback was used.
///
/// # Examples
/// ```
/// use wordle_guesser::clues::ClueState;
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::heuristic_guess;
///
/// let dictionary: Vec<Word> = ["toast", "crane", "nacre", "adieu"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let (guess, exhausted) = heuristic_guess(&dictionary, &dictionary, &ClueState::new()).unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert!(!exhausted);
/// ```
#[must_use]
pub fn heuristic_guess<'a>(
    candidates: &'a [Word],
    full_dictionary: &'a [Word],
    clues: &ClueState,
) -> Option<(&'a Word, bool)> {
    let first = candidates.first()?;
    let selector = HeuristicSelector::new(full_dictionary, first.len().min(ALPHABET_SIZE));
    let ids: Vec<usize> = (0..candidates.len()).collect();
    let ranked = HeuristicSelector::rank_letters(candidates, &ids, clues);

    match selector.cover(&ranked) {
        Some(id) => Some((&full_dictionary[id], false)),
        None => Some((first, true)),
    }
}
