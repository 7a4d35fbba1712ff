//! Solver configuration

use crate::error::{Result, SolverError};

/// Candidate count below which every guess is simulated exhaustively
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 150;

/// Standard puzzle word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Tunable parameters of an [`Engine`](super::Engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters per word
    pub word_length: usize,
    /// Use exhaustive simulation while `candidates < exhaustive_threshold`
    pub exhaustive_threshold: usize,
    /// Spread the simulation over the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            exhaustive_threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Default configuration for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, exhaustive_threshold: usize) -> Self {
        self.exhaustive_threshold = exhaustive_threshold;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of top-ranked letters the heuristic tries to cover at once
    #[must_use]
    pub fn heuristic_letters(&self) -> usize {
        self.word_length.min(crate::core::ALPHABET_SIZE)
    }

    /// Reject configurations the engine cannot run with
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` for a zero word length or threshold.
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(SolverError::InvalidConfiguration(
                "word length must be positive".to_string(),
            ));
        }
        if self.exhaustive_threshold == 0 {
            return Err(SolverError::InvalidConfiguration(
                "exhaustive threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.exhaustive_threshold, 150);
        assert!(config.parallel);
        assert_eq!(config.heuristic_letters(), 5);
    }

    #[test]
    fn builder_methods() {
        let config = SolverConfig::new(6).with_threshold(20).with_parallel(false);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.exhaustive_threshold, 20);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_values() {
        assert!(matches!(
            SolverConfig::new(0).validate(),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SolverConfig::new(5).with_threshold(0).validate(),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn heuristic_letters_capped_by_alphabet() {
        assert_eq!(SolverConfig::new(30).heuristic_letters(), 26);
        assert_eq!(SolverConfig::new(3).heuristic_letters(), 3);
    }
}
