//! Exhaustive one-ply guess evaluation
//!
//! For every (hypothetical solution, hypothetical guess) pair drawn from the
//! candidate set, simulate the feedback, merge it into the current clues and
//! count how many candidates would survive. A guess scores the mean survivor
//! count over all hypothetical solutions; the lowest score wins.
//!
//! The survivor sets are kept in a [`SimulationCache`] between rounds. When
//! the candidate set shrinks, rows and entries for eliminated words are
//! dropped and surviving entries are refined from their own cached subset
//! instead of being recomputed from the whole candidate set.

use super::filter::filter_ids;
use super::strategy::{Selection, Strategy, StrategyKind};
use crate::clues::{ClueState, simulate};
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Survivors for each guess, for one hypothetical solution
type Row = FxHashMap<usize, Vec<usize>>;

/// Cached survivor sets keyed by (hypothetical solution, hypothetical guess)
#[derive(Debug, Default)]
pub struct SimulationCache {
    rows: FxHashMap<usize, Row>,
    /// Clue state the cached entries are filtered against
    clues: Option<ClueState>,
}

impl SimulationCache {
    /// Survivors if `guess` is played and `solution` is the answer
    #[must_use]
    pub fn get(&self, solution: usize, guess: usize) -> Option<&[usize]> {
        self.rows
            .get(&solution)
            .and_then(|row| row.get(&guess))
            .map(Vec::as_slice)
    }

    /// Total number of cached (solution, guess) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.clues = None;
    }

    /// Drop every entry whose solution or guess is no longer a candidate
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self, live: &FxHashSet<usize>) -> usize {
        let before = self.len();
        self.rows.retain(|solution, _| live.contains(solution));
        for row in self.rows.values_mut() {
            row.retain(|guess, _| live.contains(guess));
        }
        before - self.len()
    }
}

/// Exhaustive expected-remaining-candidates evaluator
#[derive(Debug, Default)]
pub struct GuessEvaluator {
    cache: SimulationCache,
    parallel: bool,
    scores: Vec<(usize, f64)>,
}

impl GuessEvaluator {
    #[must_use]
    pub fn new(parallel: bool) -> Self {
        Self {
            parallel,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &SimulationCache {
        &self.cache
    }

    /// Score every candidate as a guess
    ///
    /// Returns `(candidate, mean survivors)` pairs in candidate order. Every
    /// pair of candidates is simulated, so the cost is quadratic in
    /// `candidates.len()`.
    pub fn evaluate(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Vec<(usize, f64)> {
        let totals = self.refresh(dictionary, candidates, clues);
        let n = candidates.len() as f64;
        candidates
            .iter()
            .zip(totals)
            .map(|(&guess, total)| (guess, total as f64 / n))
            .collect()
    }

    /// Bring the cache up to date and return survivor totals per guess
    fn refresh(&mut self, dictionary: &[Word], candidates: &[usize], clues: &ClueState) -> Vec<usize> {
        let live: FxHashSet<usize> = candidates.iter().copied().collect();
        let pruned = self.cache.prune(&live);
        let unchanged = self.cache.clues.as_ref() == Some(clues);
        log::debug!(
            "simulating {}x{} pairs ({} cached, {pruned} pruned)",
            candidates.len(),
            candidates.len(),
            self.cache.len()
        );

        let work: Vec<(usize, Row)> = candidates
            .iter()
            .map(|&solution| {
                let row = self.cache.rows.remove(&solution).unwrap_or_default();
                (solution, row)
            })
            .collect();

        let refresh = |(solution, row): (usize, Row)| {
            let row = refresh_row(dictionary, candidates, &live, clues, solution, row, unchanged);
            (solution, row)
        };
        let rows: Vec<(usize, Row)> = if self.parallel {
            work.into_par_iter().map(refresh).collect()
        } else {
            work.into_iter().map(refresh).collect()
        };

        let mut totals = vec![0usize; candidates.len()];
        for (_, row) in &rows {
            for (total, guess) in totals.iter_mut().zip(candidates) {
                *total += row.get(guess).map_or(0, Vec::len);
            }
        }

        self.cache.rows.extend(rows);
        self.cache.clues = Some(clues.clone());
        totals
    }

    /// Per-guess scores from the last evaluation, in candidate order
    #[must_use]
    pub fn scores(&self) -> &[(usize, f64)] {
        &self.scores
    }
}

/// Update one hypothetical-solution row of the cache
///
/// Missing entries are computed from the full candidate set; existing ones
/// are refined from their own cached survivors unless the clues are unchanged.
fn refresh_row(
    dictionary: &[Word],
    candidates: &[usize],
    live: &FxHashSet<usize>,
    clues: &ClueState,
    solution: usize,
    mut row: Row,
    unchanged: bool,
) -> Row {
    for &guess in candidates {
        let cached = row.get(&guess);
        if unchanged && cached.is_some() {
            continue;
        }
        let hypothetical = clues.merge(&simulate(&dictionary[solution], &dictionary[guess]));
        let survivors = match cached {
            Some(previous) => {
                let still_live: Vec<usize> =
                    previous.iter().copied().filter(|id| live.contains(id)).collect();
                filter_ids(dictionary, &still_live, &hypothetical)
            }
            None => filter_ids(dictionary, candidates, &hypothetical),
        };
        row.insert(guess, survivors);
    }
    row
}

impl Strategy for GuessEvaluator {
    fn select_guess(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Option<Selection> {
        match candidates {
            [] => None,
            [only] => {
                self.scores = vec![(*only, 1.0)];
                Some(Selection::forced(*only))
            }
            _ => {
                self.scores = self.evaluate(dictionary, candidates, clues);
                let mut best: Option<(usize, f64)> = None;
                for &(guess, score) in &self.scores {
                    if best.is_none_or(|(_, lowest)| score < lowest) {
                        best = Some((guess, score));
                    }
                }
                best.map(|(guess, score)| Selection {
                    guess,
                    kind: StrategyKind::Exhaustive,
                    score: Some(score),
                    warning: None,
                })
            }
        }
    }

    fn scores(&self) -> &[(usize, f64)] {
        &self.scores
    }

    fn reset(&mut self) {
        log::debug!("clearing {} cached simulations", self.cache.len());
        self.cache.clear();
        self.scores.clear();
    }
}

/// Pick the candidate that minimizes the expected number of remaining candidates
///
/// Stateless convenience over [`GuessEvaluator`]; ties go to the earliest
/// candidate.
///
/// # Examples
/// ```
/// use wordle_guesser::clues::ClueState;
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::best_guess;
///
/// let candidates: Vec<Word> = ["batch", "catch", "hatch", "latch"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = best_guess(&candidates, &ClueState::new()).unwrap();
/// assert_eq!(guess.text(), "batch");
/// ```
#[must_use]
pub fn best_guess<'a>(candidates: &'a [Word], clues: &ClueState) -> Option<&'a Word> {
    let ids: Vec<usize> = (0..candidates.len()).collect();
    GuessEvaluator::new(true)
        .select_guess(candidates, &ids, clues)
        .map(|selection| &candidates[selection.guess])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::parse;

    fn dictionary(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn all(words: &[Word]) -> Vec<usize> {
        (0..words.len()).collect()
    }

    #[test]
    fn disjoint_words_score_five_thirds() {
        // a hit leaves 1 survivor; a miss only rules out the guess itself
        let words = dictionary(&["abcde", "fghij", "klmno"]);
        let mut evaluator = GuessEvaluator::new(false);
        let scores = evaluator.evaluate(&words, &all(&words), &ClueState::new());
        for (_, score) in scores {
            assert!((score - 5.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rhyming_set_prefers_first_on_tie() {
        let words = dictionary(&["batch", "catch", "hatch", "latch"]);
        let mut evaluator = GuessEvaluator::new(false);
        let selection = evaluator
            .select_guess(&words, &all(&words), &ClueState::new())
            .unwrap();
        assert_eq!(selection.guess, 0);
        assert_eq!(selection.kind, StrategyKind::Exhaustive);
        // every guess ties: a hit leaves 1, a miss leaves the other 3
        let expected = (1.0 + 3.0 * 3.0) / 4.0;
        assert!((selection.score.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let words = dictionary(&[
            "crane", "slate", "irate", "crate", "grate", "plate", "trace", "react", "caret",
            "cater",
        ]);
        let ids = all(&words);
        let clues = ClueState::new();
        let sequential = GuessEvaluator::new(false).evaluate(&words, &ids, &clues);
        let parallel = GuessEvaluator::new(true).evaluate(&words, &ids, &clues);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn cache_holds_every_pair() {
        let words = dictionary(&["crane", "slate", "irate", "crate"]);
        let mut evaluator = GuessEvaluator::new(false);
        evaluator.evaluate(&words, &all(&words), &ClueState::new());
        assert_eq!(evaluator.cache().len(), 16);
        // the true solution always survives its own simulation
        for s in 0..4 {
            for g in 0..4 {
                assert!(evaluator.cache().get(s, g).unwrap().contains(&s));
            }
        }
        assert_eq!(evaluator.cache().get(1, 1).unwrap(), &[1]);
    }

    #[test]
    fn cache_prunes_and_refines_after_shrink() {
        let words = dictionary(&["crane", "slate", "irate", "crate", "grate", "plate"]);
        let mut evaluator = GuessEvaluator::new(false);
        evaluator.evaluate(&words, &all(&words), &ClueState::new());
        assert_eq!(evaluator.cache().len(), 36);

        // "crane" against "grate": c/n gray, r/a/e green
        let clues = ClueState::new().merge(&parse("crane", "bggbg", 5).unwrap());
        let shrunk = filter_ids(&words, &all(&words), &clues);
        assert_eq!(shrunk, vec![2, 4]);

        let incremental = evaluator.evaluate(&words, &shrunk, &clues);
        assert_eq!(evaluator.cache().len(), 4);
        assert!(evaluator.cache().get(0, 0).is_none());

        let fresh = GuessEvaluator::new(false).evaluate(&words, &shrunk, &clues);
        assert_eq!(incremental, fresh);
    }

    #[test]
    fn reset_clears_cache_before_looser_clues() {
        let words = dictionary(&["crane", "slate", "irate", "crate", "grate", "plate"]);
        let mut evaluator = GuessEvaluator::new(false);
        let clues = ClueState::new().merge(&parse("slate", "bbggg", 5).unwrap());
        let shrunk = filter_ids(&words, &all(&words), &clues);
        evaluator.select_guess(&words, &shrunk, &clues).unwrap();
        assert!(!evaluator.cache().is_empty());

        evaluator.reset();
        assert!(evaluator.cache().is_empty());
        assert!(evaluator.scores().is_empty());

        let blank = ClueState::new();
        let after_reset = evaluator.evaluate(&words, &all(&words), &blank);
        let fresh = GuessEvaluator::new(false).evaluate(&words, &all(&words), &blank);
        assert_eq!(after_reset, fresh);
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let words = dictionary(&["crane", "slate", "irate", "crate", "grate"]);
        let ids = all(&words);
        let mut evaluator = GuessEvaluator::new(true);
        let first = evaluator.select_guess(&words, &ids, &ClueState::new()).unwrap();
        let second = evaluator.select_guess(&words, &ids, &ClueState::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn best_guess_free_function() {
        let words = dictionary(&["crane"]);
        assert_eq!(best_guess(&words, &ClueState::new()).unwrap().text(), "crane");
        assert!(best_guess(&[], &ClueState::new()).is_none());
    }
}
