//! Word solving command
//!
//! Self-plays the engine against a known target and records each round.

use crate::clues::{Observation, feedback_for};
use crate::core::{Feedback, Word};
use crate::solver::{Engine, StrategyKind};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub strategy: StrategyKind,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` from a fresh game
///
/// The engine is reset first and left holding the final game state.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word of the engine's length
/// - The target is not in the engine's dictionary
/// - The engine rejects an observation (which means the simulator and the
///   filter disagree)
pub fn solve_word(config: SolveConfig, engine: &mut Engine) -> Result<SolveResult> {
    let length = engine.config().word_length;
    let target = Word::with_length(config.target.to_ascii_lowercase(), length)
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    if !engine.dictionary().contains(&target) {
        bail!("word '{target}' is not in the dictionary");
    }

    engine.reset();
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let before = engine.round();
        let guess = before.next_guess.clone();
        let feedback = feedback_for(&target, &guess);
        let solved = feedback.is_solved();

        let round = engine.play_observation(Observation::new(guess.clone(), feedback.clone())?)?;
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before: before.remaining,
            candidates_after: round.remaining,
            strategy: before.strategy,
            expected_remaining: before.expected_remaining,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::WORDS_5;
    use crate::wordlists::loader::words_from_slice;

    fn engine(count: usize) -> Engine {
        let words = words_from_slice(&WORDS_5[..count], 5);
        Engine::with_config(SolverConfig::default().with_parallel(false), words).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let mut engine = engine(100);
        let config = SolveConfig::new("aback".to_string()).with_max_guesses(20);

        let result = solve_word(config, &mut engine).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "aback");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
        assert!(engine.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let mut engine = engine(60);
        let config = SolveConfig::new("apple".to_string());

        let result = solve_word(config, &mut engine).unwrap();
        assert!(!result.guesses.is_empty());

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_target_outside_dictionary_returns_error() {
        let mut engine = engine(50);
        let config = SolveConfig::new("zzzzz".to_string());
        assert!(solve_word(config, &mut engine).is_err());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let mut engine = engine(50);
        let config = SolveConfig::new("toolong".to_string());
        assert!(solve_word(config, &mut engine).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut engine = engine(100);
        let config = SolveConfig::new("alarm".to_string()).with_max_guesses(1);

        let result = solve_word(config, &mut engine).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.success, result.guesses[0].word == "alarm");
    }
}
