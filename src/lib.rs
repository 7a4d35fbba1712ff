//! Wordle Guesser
//!
//! Tracks the clues revealed by Wordle-style feedback and recommends the guess
//! that minimizes the expected number of remaining candidate solutions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::Word;
//! use wordle_guesser::solver::Engine;
//!
//! let dictionary: Vec<Word> = ["crane", "slate", "irate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let mut engine = Engine::new(5, dictionary).unwrap();
//!
//! // Played "slate": s and l gray, a/t/e green
//! let round = engine.play("slate", "bbggg").unwrap();
//! println!("{} -> try {}", round.summary, round.next_guess);
//! assert_eq!(engine.candidates().len(), 2);
//! ```

// Letters, words and feedback
pub mod core;

// Evidence, accumulated clues and feedback simulation
pub mod clues;

// Error type
pub mod error;

// Filtering, guess evaluation and the engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
