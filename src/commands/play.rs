//! Interactive play mode
//!
//! Text-based loop: the engine suggests a guess, the user reports the
//! feedback they got (optionally for a different guess), repeat.

use crate::core::Feedback;
use crate::output::formatters::{colored_guess, format_summary};
use crate::solver::{Engine, Round};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates listed automatically when this few remain
const SHOW_CANDIDATES: usize = 10;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    NewGame,
    Undo,
    ShowWords,
    /// The recommended guess got this feedback
    Feedback(String),
    /// A different guess was played
    Observation { guess: String, feedback: String },
    Empty,
}

impl PlayInput {
    /// Classify one input line
    ///
    /// `win` is shorthand for all-green feedback on the recommended guess.
    #[must_use]
    pub fn parse(line: &str, word_length: usize) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Self::Empty,
            [single] => match single.to_lowercase().as_str() {
                "quit" | "q" | "exit" => Self::Quit,
                "new" | "n" => Self::NewGame,
                "undo" | "u" => Self::Undo,
                "words" | "w" => Self::ShowWords,
                "win" | "solved" => Self::Feedback(Feedback::solved(word_length).to_string()),
                other => Self::Feedback(other.to_string()),
            },
            [guess, feedback] => Self::Observation {
                guess: (*guess).to_string(),
                feedback: (*feedback).to_string(),
            },
            // Spaced-out feedback such as "g y b b g"
            _ => Self::Feedback(tokens.concat()),
        }
    }
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(engine: &mut Engine) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play_session(engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive loop over arbitrary input and output
///
/// Returns when the input ends or the user quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let length = engine.config().word_length;
    writeln!(out, "{}", "Wordle guesser - interactive mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback you got:")?;
    writeln!(out, "  g = green, y = yellow, b/x/- = gray (emoji squares work too)")?;
    writeln!(out, "  or '<guess> <feedback>' if you played a different word")?;
    writeln!(out, "Commands: quit, new, undo, words, win\n")?;

    print_turn(engine, out)?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let result = match PlayInput::parse(&line, length) {
            PlayInput::Empty => continue,
            PlayInput::Quit => return Ok(()),
            PlayInput::NewGame => {
                engine.reset();
                writeln!(out, "\nNew game started.")?;
                print_turn(engine, out)?;
                continue;
            }
            PlayInput::Undo => {
                match engine.undo()? {
                    Some(observation) => {
                        writeln!(out, "Undid {}.", observation.guess().text().to_uppercase())?;
                    }
                    None => writeln!(out, "Nothing to undo.")?,
                }
                print_turn(engine, out)?;
                continue;
            }
            PlayInput::ShowWords => {
                print_candidates(engine, usize::MAX, out)?;
                continue;
            }
            PlayInput::Feedback(feedback) => {
                let guess = engine.best_guess().text().to_string();
                engine.play(&guess, &feedback)
            }
            PlayInput::Observation { guess, feedback } => engine.play(&guess, &feedback),
        };

        match result {
            Ok(round) if engine.is_solved() => {
                print_solved(engine, &round, out)?;
                engine.reset();
                writeln!(out, "\nNew game started.")?;
                print_turn(engine, out)?;
            }
            Ok(round) => {
                if let Some(warning) = &round.warning {
                    writeln!(out, "{} {warning}", "warning:".yellow())?;
                }
                print_turn(engine, out)?;
            }
            Err(e) => writeln!(out, "{} {e}", "error:".red().bold())?,
        }
    }
}

fn print_turn<W: Write>(engine: &Engine, out: &mut W) -> Result<()> {
    let round = engine.round();
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Turn {}: {} candidates remaining",
        engine.history().len() + 1,
        round.remaining
    )?;
    if !engine.clue_state().is_blank() {
        writeln!(out, "Clues: {}", format_summary(&round.summary))?;
    }
    write!(
        out,
        "Suggested guess: {} ({})",
        round.next_guess.text().to_uppercase().bright_yellow().bold(),
        round.strategy
    )?;
    if let Some(expected) = round.expected_remaining {
        write!(out, ", expected {expected:.2} remaining")?;
    }
    writeln!(out)?;
    if round.remaining <= SHOW_CANDIDATES {
        print_candidates(engine, SHOW_CANDIDATES, out)?;
    }
    Ok(())
}

fn print_candidates<W: Write>(engine: &Engine, limit: usize, out: &mut W) -> Result<()> {
    let candidates = engine.candidates();
    let shown: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(|word| word.text().to_uppercase())
        .collect();
    writeln!(out, "Candidates: {}", shown.join(" "))?;
    if candidates.len() > shown.len() {
        writeln!(out, "  ... and {} more", candidates.len() - shown.len())?;
    }
    Ok(())
}

fn print_solved<W: Write>(engine: &Engine, round: &Round, out: &mut W) -> Result<()> {
    let turns = engine.history().len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{} {} in {turns} {}",
        "Solved:".bright_green().bold(),
        round.next_guess.text().to_uppercase().bright_white().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;
    for (i, observation) in engine.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            colored_guess(observation.guess(), observation.feedback()),
            observation.feedback().to_emoji()
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    Ok(())
}
