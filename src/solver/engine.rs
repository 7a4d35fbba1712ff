//! Main guessing engine
//!
//! Owns one game: the dictionary, the accumulated clues, the candidate set
//! and the strategy (with its simulation cache). Each `play` call merges one
//! observation and returns the next recommended guess.

use super::config::SolverConfig;
use super::filter::filter_ids;
use super::strategy::{AdaptiveStrategy, Selection, Strategy, StrategyKind, StrategyType};
use crate::clues::{ClueState, ClueSummary, Observation};
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Outcome of one played round
#[derive(Debug, Clone)]
pub struct Round {
    /// Digest of the clues after merging the observation
    pub summary: ClueSummary,
    /// Recommended next guess
    pub next_guess: Word,
    /// Candidates consistent with the clues
    pub remaining: usize,
    /// Algorithm that picked `next_guess`
    pub strategy: StrategyKind,
    /// Expected remaining candidates after `next_guess`, when simulated
    pub expected_remaining: Option<f64>,
    /// Non-fatal problem met while picking the guess
    pub warning: Option<SolverError>,
}

/// Guessing engine for one game
pub struct Engine {
    config: SolverConfig,
    dictionary: Vec<Word>,
    clues: ClueState,
    candidates: Vec<usize>,
    strategy: StrategyType,
    selection: Selection,
    history: Vec<Observation>,
}

impl Engine {
    /// Create an engine for `word_length`-letter words with default settings
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` if `word_length` is zero,
    /// the dictionary is empty, or a dictionary word has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::solver::Engine;
    ///
    /// let dictionary: Vec<Word> = ["aeros", "zzzzz", "crane"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut engine = Engine::new(5, dictionary).unwrap();
    ///
    /// let round = engine.play("aeros", "bbbbb").unwrap();
    /// assert_eq!(round.next_guess.text(), "zzzzz");
    /// assert_eq!(engine.candidates().len(), 1);
    /// ```
    pub fn new(word_length: usize, dictionary: Vec<Word>) -> Result<Self> {
        Self::with_config(SolverConfig::new(word_length), dictionary)
    }

    /// Create an engine with explicit settings and the adaptive strategy
    ///
    /// # Errors
    /// See [`Engine::new`].
    pub fn with_config(config: SolverConfig, dictionary: Vec<Word>) -> Result<Self> {
        Self::validate(&config, &dictionary)?;
        let strategy = StrategyType::Adaptive(AdaptiveStrategy::from_config(&config, &dictionary));
        Self::with_strategy(config, dictionary, strategy)
    }

    /// Create an engine with explicit settings and strategy
    ///
    /// # Errors
    /// See [`Engine::new`].
    pub fn with_strategy(
        config: SolverConfig,
        dictionary: Vec<Word>,
        mut strategy: StrategyType,
    ) -> Result<Self> {
        Self::validate(&config, &dictionary)?;

        let clues = ClueState::new();
        let candidates: Vec<usize> = (0..dictionary.len()).collect();
        let start = Instant::now();
        let selection = strategy
            .select_guess(&dictionary, &candidates, &clues)
            .ok_or_else(|| SolverError::InvalidConfiguration("dictionary is empty".to_string()))?;
        log::info!(
            "initial guess {} ({}, {} words) in {:.2?}",
            dictionary[selection.guess],
            selection.kind,
            dictionary.len(),
            start.elapsed()
        );

        Ok(Self {
            config,
            dictionary,
            clues,
            candidates,
            strategy,
            selection,
            history: Vec::new(),
        })
    }

    fn validate(config: &SolverConfig, dictionary: &[Word]) -> Result<()> {
        config.validate()?;
        if dictionary.is_empty() {
            return Err(SolverError::InvalidConfiguration(
                "dictionary is empty".to_string(),
            ));
        }
        if let Some(word) = dictionary.iter().find(|w| w.len() != config.word_length) {
            return Err(SolverError::InvalidConfiguration(format!(
                "dictionary word {word} does not have {} letters",
                config.word_length
            )));
        }
        let mut seen = FxHashSet::default();
        if let Some(word) = dictionary.iter().find(|w| !seen.insert(w.text())) {
            return Err(SolverError::InvalidConfiguration(format!(
                "dictionary word {word} appears more than once"
            )));
        }
        Ok(())
    }

    /// Merge one observation and recommend the next guess
    ///
    /// On error the engine is left exactly as it was before the call.
    ///
    /// # Errors
    /// - `SolverError::MalformedObservation` if the guess or feedback does not
    ///   match the word length or uses unrecognized symbols
    /// - `SolverError::NoCandidatesRemaining` if no dictionary word is
    ///   consistent with the merged clues
    pub fn play(&mut self, guess: &str, feedback: &str) -> Result<Round> {
        let observation = Observation::parse(guess, feedback, self.config.word_length)?;
        self.play_observation(observation)
    }

    /// Like [`Engine::play`] for an already-validated observation
    ///
    /// # Errors
    /// See [`Engine::play`].
    pub fn play_observation(&mut self, observation: Observation) -> Result<Round> {
        if observation.guess().len() != self.config.word_length {
            return Err(SolverError::MalformedObservation(format!(
                "guess {} does not have {} letters",
                observation.guess(),
                self.config.word_length
            )));
        }

        let start = Instant::now();
        let clues = self.clues.merge(&observation.evidence());
        let all: Vec<usize> = (0..self.dictionary.len()).collect();
        let candidates = filter_ids(&self.dictionary, &all, &clues);
        if candidates.is_empty() {
            log::warn!(
                "{} / {} leaves no candidates; keeping previous state",
                observation.guess(),
                observation.feedback()
            );
            return Err(SolverError::NoCandidatesRemaining {
                guess: observation.guess().to_string(),
                feedback: observation.feedback().to_string(),
            });
        }

        let selection = self
            .strategy
            .select_guess(&self.dictionary, &candidates, &clues)
            .ok_or_else(|| SolverError::NoCandidatesRemaining {
                guess: observation.guess().to_string(),
                feedback: observation.feedback().to_string(),
            })?;

        log::info!(
            "{} {} -> {} candidates, next {} ({}) in {:.2?}",
            observation.guess(),
            observation.feedback(),
            candidates.len(),
            self.dictionary[selection.guess],
            selection.kind,
            start.elapsed()
        );

        self.clues = clues;
        self.candidates = candidates;
        self.selection = selection;
        self.history.push(observation);
        Ok(self.round())
    }

    /// Snapshot of the current state as a [`Round`]
    #[must_use]
    pub fn round(&self) -> Round {
        Round {
            summary: self.summary(),
            next_guess: self.best_guess().clone(),
            remaining: self.candidates.len(),
            strategy: self.selection.kind,
            expected_remaining: self.selection.score,
            warning: self.selection.warning.clone(),
        }
    }

    /// The currently recommended guess
    #[must_use]
    pub fn best_guess(&self) -> &Word {
        &self.dictionary[self.selection.guess]
    }

    /// Words still consistent with the clues, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.candidates.iter().map(|&id| &self.dictionary[id]).collect()
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Accumulated clues
    #[must_use]
    pub const fn clue_state(&self) -> &ClueState {
        &self.clues
    }

    /// Digest of the accumulated clues
    #[must_use]
    pub fn summary(&self) -> ClueSummary {
        ClueSummary::new(&self.clues, self.config.word_length)
    }

    /// Expected remaining candidates per guess from the last simulation,
    /// best first (ties in candidate order)
    #[must_use]
    pub fn guess_scores(&self) -> Vec<(&Word, f64)> {
        let mut scores: Vec<(&Word, f64)> = self
            .strategy
            .scores()
            .iter()
            .map(|&(id, score)| (&self.dictionary[id], score))
            .collect();
        scores.sort_by(|a, b| a.1.total_cmp(&b.1));
        scores
    }

    /// Observations played so far
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// True once a solved (all green) observation has been played
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|observation| observation.feedback().is_solved())
    }

    /// Replay every observation except the last one
    ///
    /// Returns the removed observation, or `None` if nothing was played.
    ///
    /// # Errors
    /// Propagates errors from replaying; earlier observations were all
    /// accepted once, so this only fails if the strategy cannot pick a guess.
    pub fn undo(&mut self) -> Result<Option<Observation>> {
        let Some(last) = self.history.pop() else {
            return Ok(None);
        };
        let replay = std::mem::take(&mut self.history);
        self.reset();
        for observation in replay {
            self.play_observation(observation)?;
        }
        Ok(Some(last))
    }

    /// Forget every observation and return to the initial state
    pub fn reset(&mut self) {
        self.clues = ClueState::new();
        self.candidates = (0..self.dictionary.len()).collect();
        self.history.clear();
        self.strategy.reset();
        if let Some(selection) =
            self.strategy
                .select_guess(&self.dictionary, &self.candidates, &self.clues)
        {
            self.selection = selection;
        }
    }

    /// Feedback the recommended guess would get if `solution` were the answer
    #[must_use]
    pub fn feedback_against(&self, solution: &Word) -> Feedback {
        crate::clues::feedback_for(solution, self.best_guess())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn setup_engine() -> Engine {
        Engine::with_config(
            SolverConfig::default().with_parallel(false),
            dictionary(&["crane", "slate", "irate", "crate", "grate", "aeros", "zzzzz"]),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_zero_length() {
        let result = Engine::new(0, dictionary(&["crane"]));
        assert!(matches!(result, Err(SolverError::InvalidConfiguration(_))));
    }

    #[test]
    fn new_rejects_bad_dictionaries() {
        assert!(matches!(
            Engine::new(5, Vec::new()),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Engine::new(5, dictionary(&["crane", "cranes"])),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Engine::new(5, dictionary(&["crane", "crane"])),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn new_starts_blank_with_full_candidates() {
        let engine = setup_engine();
        assert!(engine.clue_state().is_blank());
        assert_eq!(engine.candidate_count(), 7);
        assert!(engine.history().is_empty());
        assert!(!engine.is_solved());
        assert_eq!(engine.round().strategy, StrategyKind::Exhaustive);
    }

    #[test]
    fn initial_guess_is_deterministic() {
        let a = setup_engine();
        let b = setup_engine();
        assert_eq!(a.best_guess(), b.best_guess());
    }

    #[test]
    fn play_shrinks_candidates() {
        let mut engine = setup_engine();
        let round = engine.play("aeros", "bbbbb").unwrap();
        assert_eq!(round.remaining, 1);
        assert_eq!(round.next_guess.text(), "zzzzz");
        assert_eq!(round.strategy, StrategyKind::Forced);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn malformed_observation_leaves_state_unchanged() {
        let mut engine = setup_engine();
        let before = engine.best_guess().clone();
        for (guess, feedback) in [("aero", "bbbb"), ("aeros", "bbbbq"), ("aeros", "bbbb")] {
            assert!(matches!(
                engine.play(guess, feedback),
                Err(SolverError::MalformedObservation(_))
            ));
        }
        assert!(engine.clue_state().is_blank());
        assert_eq!(engine.candidate_count(), 7);
        assert_eq!(engine.best_guess(), &before);
    }

    #[test]
    fn contradiction_keeps_previous_state() {
        let mut engine = setup_engine();
        engine.play("slate", "bbggg").unwrap();
        let clues = engine.clue_state().clone();
        let candidates: Vec<String> = engine.candidates().iter().map(|w| w.to_string()).collect();

        let result = engine.play("zzzzz", "ggggg");
        assert!(matches!(
            result,
            Err(SolverError::NoCandidatesRemaining { .. })
        ));
        assert_eq!(engine.clue_state(), &clues);
        let after: Vec<String> = engine.candidates().iter().map(|w| w.to_string()).collect();
        assert_eq!(after, candidates);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn solved_after_all_green() {
        let mut engine = setup_engine();
        let round = engine.play("grate", "ggggg").unwrap();
        assert!(engine.is_solved());
        assert_eq!(round.summary.solution(), Some("grate".to_string()));
        assert_eq!(round.next_guess.text(), "grate");
    }

    #[test]
    fn undo_replays_history() {
        let mut engine = setup_engine();
        let initial = engine.best_guess().clone();
        engine.play("aeros", "bbbbb").unwrap();
        let undone = engine.undo().unwrap().unwrap();
        assert_eq!(undone.guess().text(), "aeros");
        assert!(engine.clue_state().is_blank());
        assert_eq!(engine.candidate_count(), 7);
        assert_eq!(engine.best_guess(), &initial);
        assert!(engine.undo().unwrap().is_none());
    }

    #[test]
    fn undo_after_open_round_matches_fresh_engine() {
        let mut engine = setup_engine();
        let fresh = setup_engine();
        engine.play("slate", "bbggg").unwrap();
        assert_eq!(engine.round().strategy, StrategyKind::Exhaustive);

        engine.undo().unwrap().unwrap();
        assert_eq!(engine.guess_scores(), fresh.guess_scores());
        assert_eq!(engine.best_guess(), fresh.best_guess());
    }

    #[test]
    fn guess_scores_sorted_best_first() {
        let engine = setup_engine();
        let scores = engine.guess_scores();
        assert_eq!(scores.len(), 7);
        assert_eq!(scores[0].0, engine.best_guess());
        assert!(scores.windows(2).all(|pair| pair[0].1 <= pair[1].1));
    }

    #[test]
    fn feedback_against_uses_recommended_guess() {
        let engine = setup_engine();
        let solution = engine.best_guess().clone();
        assert!(engine.feedback_against(&solution).is_solved());
    }

    #[test]
    fn heuristic_used_above_threshold() {
        let engine = Engine::with_config(
            SolverConfig::default().with_threshold(3),
            dictionary(&["crane", "slate", "irate", "crate", "grate"]),
        )
        .unwrap();
        assert_eq!(engine.round().strategy, StrategyKind::Heuristic);
        assert!(engine.guess_scores().is_empty());
    }
}
