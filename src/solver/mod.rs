//! Guess selection
//!
//! Candidate filtering, the exhaustive expected-remaining evaluator, the
//! letter-frequency heuristic, and the [`Engine`] that ties them together.

pub mod config;
mod engine;
pub mod evaluator;
pub mod filter;
pub mod heuristic;
pub mod strategy;

pub use config::{DEFAULT_EXHAUSTIVE_THRESHOLD, DEFAULT_WORD_LENGTH, SolverConfig};
pub use engine::{Engine, Round};
pub use evaluator::{GuessEvaluator, SimulationCache, best_guess};
pub use filter::{filter, filter_ids};
pub use heuristic::{HeuristicSelector, heuristic_guess};
pub use strategy::{AdaptiveStrategy, Selection, Strategy, StrategyKind, StrategyType};
