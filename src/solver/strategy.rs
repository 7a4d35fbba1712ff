//! Guess selection strategies
//!
//! Defines the Strategy trait and the size-keyed switch between exhaustive
//! simulation and the letter-frequency heuristic.

use super::config::SolverConfig;
use super::evaluator::GuessEvaluator;
use super::heuristic::HeuristicSelector;
use crate::clues::ClueState;
use crate::core::Word;
use crate::error::SolverError;
use std::fmt;

/// Which algorithm produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Full one-ply simulation over the candidate set
    Exhaustive,
    /// Letter-frequency cover over the dictionary
    Heuristic,
    /// Only one candidate was left
    Forced,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exhaustive => "exhaustive",
            Self::Heuristic => "heuristic",
            Self::Forced => "forced",
        };
        f.write_str(name)
    }
}

/// A chosen guess and how it was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Index into the dictionary
    pub guess: usize,
    pub kind: StrategyKind,
    /// Expected remaining candidates, when the exhaustive strategy ran
    pub score: Option<f64>,
    /// Non-fatal problem encountered while selecting
    pub warning: Option<SolverError>,
}

impl Selection {
    #[must_use]
    pub const fn forced(guess: usize) -> Self {
        Self {
            guess,
            kind: StrategyKind::Forced,
            score: Some(1.0),
            warning: None,
        }
    }
}

/// A strategy for selecting the next guess
///
/// `candidates` are indices into `dictionary`, in dictionary order.
pub trait Strategy {
    /// Select the next guess, or `None` if there are no candidates
    fn select_guess(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Option<Selection>;

    /// Per-guess scores from the last exhaustive evaluation, in candidate order
    fn scores(&self) -> &[(usize, f64)] {
        &[]
    }

    /// Drop state carried between rounds of one game
    ///
    /// Called when the clues are cleared, since cached work assumes the
    /// clues only ever tighten.
    fn reset(&mut self) {}
}

/// Exhaustive simulation for small candidate sets, heuristic for large ones
pub struct AdaptiveStrategy {
    /// Use exhaustive simulation while `candidates < threshold`
    pub threshold: usize,
    evaluator: GuessEvaluator,
    heuristic: HeuristicSelector,
    last_kind: Option<StrategyKind>,
}

impl AdaptiveStrategy {
    #[must_use]
    pub const fn new(threshold: usize, evaluator: GuessEvaluator, heuristic: HeuristicSelector) -> Self {
        Self {
            threshold,
            evaluator,
            heuristic,
            last_kind: None,
        }
    }

    /// Build from a configuration and the dictionary the heuristic searches
    #[must_use]
    pub fn from_config(config: &SolverConfig, dictionary: &[Word]) -> Self {
        Self::new(
            config.exhaustive_threshold,
            GuessEvaluator::new(config.parallel),
            HeuristicSelector::new(dictionary, config.heuristic_letters()),
        )
    }

    /// Which algorithm a candidate set of this size is routed to
    #[must_use]
    pub const fn kind_for(&self, candidate_count: usize) -> StrategyKind {
        if candidate_count < self.threshold {
            StrategyKind::Exhaustive
        } else {
            StrategyKind::Heuristic
        }
    }
}

impl Strategy for AdaptiveStrategy {
    fn select_guess(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Option<Selection> {
        let kind = self.kind_for(candidates.len());
        log::debug!("{} candidates, using {kind} strategy", candidates.len());
        self.last_kind = Some(kind);
        match kind {
            StrategyKind::Heuristic => self.heuristic.select_guess(dictionary, candidates, clues),
            _ => self.evaluator.select_guess(dictionary, candidates, clues),
        }
    }

    fn scores(&self) -> &[(usize, f64)] {
        match self.last_kind {
            Some(StrategyKind::Heuristic) | None => &[],
            Some(_) => self.evaluator.scores(),
        }
    }

    fn reset(&mut self) {
        self.evaluator.reset();
        self.last_kind = None;
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Size-keyed switch (default)
    Adaptive(AdaptiveStrategy),
    /// Always simulate, regardless of candidate count
    Exhaustive(GuessEvaluator),
    /// Always use the letter-frequency heuristic
    Heuristic(HeuristicSelector),
}

impl Strategy for StrategyType {
    fn select_guess(
        &mut self,
        dictionary: &[Word],
        candidates: &[usize],
        clues: &ClueState,
    ) -> Option<Selection> {
        match self {
            Self::Adaptive(s) => s.select_guess(dictionary, candidates, clues),
            Self::Exhaustive(s) => s.select_guess(dictionary, candidates, clues),
            Self::Heuristic(s) => s.select_guess(dictionary, candidates, clues),
        }
    }

    fn scores(&self) -> &[(usize, f64)] {
        match self {
            Self::Adaptive(s) => s.scores(),
            Self::Exhaustive(s) => s.scores(),
            Self::Heuristic(s) => s.scores(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Adaptive(s) => s.reset(),
            Self::Exhaustive(s) => s.reset(),
            Self::Heuristic(s) => s.reset(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "exhaustive", "heuristic".
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, config: &SolverConfig, dictionary: &[Word]) -> Self {
        match name {
            "exhaustive" => Self::Exhaustive(GuessEvaluator::new(config.parallel)),
            "heuristic" => {
                Self::Heuristic(HeuristicSelector::new(dictionary, config.heuristic_letters()))
            }
            other => {
                if other != "adaptive" {
                    log::warn!("unknown strategy '{other}', using adaptive");
                }
                Self::Adaptive(AdaptiveStrategy::from_config(config, dictionary))
            }
        }
    }
}
