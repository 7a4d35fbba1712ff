//! Benchmark command
//!
//! Self-plays the engine against sampled targets and aggregates the results.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Engine;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets not solved within the guess limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `dictionary`
///
/// A fixed `seed` gives the same sample on every run. Asking for more
/// targets than the dictionary holds returns the whole dictionary.
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    dictionary
        .choose_multiple(&mut rng, count.min(dictionary.len()))
        .cloned()
        .collect()
}

/// Solve every target from a fresh game
///
/// # Errors
///
/// Returns an error if a target cannot be played (for example, it is not in
/// the engine's dictionary).
pub fn run_benchmark(
    engine: &mut Engine,
    targets: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let pb = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for target in targets {
        pb.set_message(target.text().to_string());
        let config = SolveConfig::new(target.text().to_string()).with_max_guesses(max_guesses);
        let result = solve_word(config, engine)?;
        let guesses = result.guesses.len();

        if result.success {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::info!("failed to solve {target} in {max_guesses} guesses");
            failures.push(result.target);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
