//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let tiles = Word::new(step.word.as_str())
            .map(|word| colored_guess(&word, &step.feedback))
            .unwrap_or_else(|_| step.word.to_uppercase());
        println!("\nTurn {turn}: {tiles} {}", step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Strategy:   {}", step.strategy);
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.2} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(
        result.expected_remaining,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} remain", result.expected_remaining).bright_yellow()
    );
    println!("   Worst case:  {} remain", result.worst_case);
    println!("   Outcomes:    {} distinct feedbacks", result.outcomes);
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for target in &result.failures {
            println!("   {}", target.to_uppercase());
        }
    }
}
