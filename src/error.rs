//! Error type shared by the clue store, the strategies and the engine

use thiserror::Error;

/// Everything that can go wrong while configuring or advancing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Construction parameters or dictionary contents are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A guess/feedback pair does not match the word length or uses unknown symbols
    #[error("malformed observation: {0}")]
    MalformedObservation(String),

    /// Merging the observation leaves no dictionary word consistent with the clues
    #[error("no candidates remain after playing {guess} with feedback {feedback}")]
    NoCandidatesRemaining { guess: String, feedback: String },

    /// No combination of top-ranked open letters spells a dictionary word
    #[error("no dictionary word covers {size} of the most frequent open letters")]
    HeuristicExhausted { size: usize },
}

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, SolverError>;
