//! Observation parsing
//!
//! Turns a raw guess and feedback string into validated, per-letter evidence.

use super::Evidence;
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};

/// A validated guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    guess: Word,
    feedback: Feedback,
}

impl Observation {
    /// Validate a guess/feedback pair for a game with `word_length` letters
    ///
    /// Whitespace is stripped from both inputs and case is ignored.
    ///
    /// # Errors
    /// Returns `SolverError::MalformedObservation` if the guess is not
    /// `word_length` letters, the feedback has a different length, or the
    /// feedback contains an unrecognized symbol.
    pub fn parse(guess: &str, feedback: &str, word_length: usize) -> Result<Self> {
        let guess: String = guess.chars().filter(|c| !c.is_whitespace()).collect();
        let guess = Word::with_length(guess, word_length)
            .map_err(|e| SolverError::MalformedObservation(format!("guess: {e}")))?;

        let feedback = Feedback::parse(feedback)
            .map_err(|e| SolverError::MalformedObservation(format!("feedback: {e}")))?;
        if feedback.len() != word_length {
            return Err(SolverError::MalformedObservation(format!(
                "feedback must have {word_length} symbols, got {}",
                feedback.len()
            )));
        }

        Ok(Self { guess, feedback })
    }

    /// Pair an already-validated guess with feedback of the same length
    ///
    /// # Errors
    /// Returns `SolverError::MalformedObservation` on a length mismatch.
    pub fn new(guess: Word, feedback: Feedback) -> Result<Self> {
        if guess.len() != feedback.len() {
            return Err(SolverError::MalformedObservation(format!(
                "guess has {} letters but feedback has {} symbols",
                guess.len(),
                feedback.len()
            )));
        }
        Ok(Self { guess, feedback })
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Per-letter evidence carried by this observation
    #[must_use]
    pub fn evidence(&self) -> Evidence {
        Evidence::from_feedback(&self.guess, &self.feedback)
    }
}

/// Parse a raw observation straight into evidence
///
/// # Errors
/// See [`Observation::parse`].
///
/// # Examples
/// ```
/// use wordle_guesser::clues::parse;
///
/// let evidence = parse("rager", "yybyb", 5).unwrap();
/// let r = evidence.get(b'r').unwrap();
/// assert_eq!(r.count(), 1);
/// assert!(r.is_capped());
/// ```
pub fn parse(guess: &str, feedback: &str, word_length: usize) -> Result<Evidence> {
    Observation::parse(guess, feedback, word_length).map(|observation| observation.evidence())
}
