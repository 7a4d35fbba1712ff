//! Formatting utilities for terminal output

use crate::clues::ClueSummary;
use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback mark
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            match mark {
                Mark::Green => tile.black().on_green().to_string(),
                Mark::Yellow => tile.black().on_yellow().to_string(),
                Mark::Gray => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One-line colored digest of the clues
#[must_use]
pub fn format_summary(summary: &ClueSummary) -> String {
    let letters = |list: &[u8]| -> String {
        list.iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect()
    };
    format!(
        "{}  present: {}  absent: {}",
        summary.pattern_string().to_uppercase().green().bold(),
        letters(&summary.present).yellow(),
        letters(&summary.absent).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
