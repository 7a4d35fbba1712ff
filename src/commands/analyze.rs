//! Word analysis command
//!
//! Scores one guess against the current candidate set by simulating it
//! against every candidate as the hypothetical solution.

use crate::clues::{ClueState, feedback_for, simulate};
use crate::core::Word;
use crate::solver::filter;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Mean candidates left after playing the word
    pub expected_remaining: f64,
    /// Most candidates any single outcome leaves
    pub worst_case: usize,
    /// Distinct feedback strings the word can receive
    pub outcomes: usize,
    pub total_candidates: usize,
    /// Whether the word could itself be the solution
    pub is_candidate: bool,
}

/// Analyze `word` as the next guess against `candidates`
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a valid word of the candidates' length
/// - The word is not in the dictionary
/// - There are no candidates to analyze against
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    candidates: &[&Word],
    clues: &ClueState,
) -> Result<AnalysisResult> {
    let Some(length) = dictionary.first().map(Word::len) else {
        bail!("dictionary is empty");
    };
    let guess = Word::with_length(word.to_ascii_lowercase(), length)
        .with_context(|| format!("invalid word '{word}'"))?;
    if !dictionary.contains(&guess) {
        bail!("word '{guess}' is not in the dictionary");
    }
    if candidates.is_empty() {
        bail!("no candidates to analyze against");
    }

    let mut total = 0usize;
    let mut worst_case = 0usize;
    let mut outcomes = FxHashSet::default();
    for &solution in candidates {
        let hypothetical = clues.merge(&simulate(solution, &guess));
        let survivors = filter(candidates.iter().copied(), &hypothetical).len();
        total += survivors;
        worst_case = worst_case.max(survivors);
        outcomes.insert(feedback_for(solution, &guess));
    }

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        expected_remaining: total as f64 / candidates.len() as f64,
        worst_case,
        outcomes: outcomes.len(),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&&guess),
    })
}
