//! Feedback simulation
//!
//! Computes the feedback a guess would receive against a hypothetical
//! solution, with the real puzzle's duplicate-letter counting rules.

use super::{Evidence, LetterEvidence};
use crate::core::{ALPHABET_SIZE, Feedback, Mark, Word, letter_index};
use rustc_hash::FxHashMap;

/// Per-position feedback for `guess` when `solution` is the answer
///
/// # Algorithm
/// 1. First pass: mark exact matches green and remove them from the pool
/// 2. Second pass: mark remaining guess letters yellow while the solution
///    still has unmatched copies of that letter, gray otherwise
///
/// # Panics
/// Panics in debug mode if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_guesser::clues::feedback_for;
/// use wordle_guesser::core::Word;
///
/// let solution = Word::new("floor").unwrap();
/// let guess = Word::new("robot").unwrap();
/// assert_eq!(feedback_for(&solution, &guess).to_string(), "yybgb");
/// ```
#[must_use]
pub fn feedback_for(solution: &Word, guess: &Word) -> Feedback {
    debug_assert_eq!(solution.len(), guess.len(), "words must have equal length");

    let mut marks = vec![Mark::Gray; guess.len()];
    let mut available = [0usize; ALPHABET_SIZE];

    for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            marks[i] = Mark::Green;
        } else {
            available[letter_index(s)] += 1;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marks[i] == Mark::Green {
            continue;
        }
        let pool = &mut available[letter_index(g)];
        if *pool > 0 {
            marks[i] = Mark::Yellow;
            *pool -= 1;
        }
    }

    Feedback::new(marks)
}

/// Per-letter evidence `guess` would produce when `solution` is the answer
///
/// Equivalent to `Evidence::from_feedback(guess, &feedback_for(solution, guess))`
/// but computed letter by letter: placements are the matching positions,
/// the confirmed count is `min(copies in guess, copies in solution)`, and the
/// letter is capped whenever the guess holds more copies than the solution.
#[must_use]
pub fn simulate(solution: &Word, guess: &Word) -> Evidence {
    let mut letters: FxHashMap<u8, LetterEvidence> = FxHashMap::default();

    for letter in guess.distinct_letters() {
        let in_guess = guess.count_of(letter);
        let in_solution = solution.count_of(letter);

        let placed: Vec<usize> = guess
            .letters()
            .iter()
            .zip(solution.letters())
            .enumerate()
            .filter(|&(_, (&g, &s))| g == letter && s == letter)
            .map(|(position, _)| position)
            .collect();

        letters.insert(
            letter,
            LetterEvidence::new(placed, in_guess.min(in_solution), in_guess > in_solution),
        );
    }

    Evidence::from_map(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::parse;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn all_gray_when_no_letters_shared() {
        let feedback = feedback_for(&word("zzzzz"), &word("aeros"));
        assert_eq!(feedback.to_string(), "bbbbb");
    }

    #[test]
    fn all_green_against_itself() {
        for text in ["crane", "speed", "aaaaa"] {
            assert!(feedback_for(&word(text), &word(text)).is_solved());
        }
    }

    #[test]
    fn duplicate_guess_letters_only_count_available_copies() {
        // SPEED vs ERASE: both e copies in ERASE are unplaced
        assert_eq!(feedback_for(&word("erase"), &word("speed")).to_string(), "ybyyb");
        // ROBOT vs FLOOR: second o is green, first o takes the other copy
        assert_eq!(feedback_for(&word("floor"), &word("robot")).to_string(), "yybgb");
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // only one e in the solution and it is matched at position 4
        assert_eq!(feedback_for(&word("crane"), &word("eerie")).to_string(), "bbybg");
    }

    #[test]
    fn rager_against_single_r_solution() {
        let feedback = feedback_for(&word("hoard"), &word("rager"));
        assert_eq!(feedback.to_string(), "yybbb");
    }

    #[test]
    fn simulate_matches_feedback_translation() {
        let pairs = [
            ("erase", "speed"),
            ("floor", "robot"),
            ("crane", "eerie"),
            ("hoard", "rager"),
            ("error", "rover"),
            ("zzzzz", "aeros"),
            ("mamma", "maxim"),
        ];
        for (solution, guess) in pairs {
            let (solution, guess) = (word(solution), word(guess));
            let feedback = feedback_for(&solution, &guess);
            assert_eq!(
                simulate(&solution, &guess),
                Evidence::from_feedback(&guess, &feedback),
                "{solution} / {guess}"
            );
        }
    }

    #[test]
    fn simulate_caps_extra_guess_copies() {
        let evidence = simulate(&word("hoard"), &word("rager"));
        let r = evidence.get(b'r').unwrap();
        assert_eq!(r.count(), 1);
        assert!(r.is_capped());
        assert!(evidence.get(b'g').unwrap().is_absent());
    }

    #[test]
    fn simulate_round_trips_through_rendered_feedback() {
        let solution = word("error");
        let guess = word("rover");
        let evidence = simulate(&solution, &guess);
        let rendered = evidence.render(&guess).to_string();
        assert_eq!(parse(guess.text(), &rendered, 5).unwrap(), evidence);
    }
}
