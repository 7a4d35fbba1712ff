//! Accumulated clue state for a game

use super::{Evidence, LetterCode, LetterEvidence};
use crate::core::{ALPHABET_SIZE, Word, index_letter, letter_index};
use std::fmt;

/// Evidence for all 26 letters, accumulated over every round played
///
/// Merging never discards information: placements stay placed and confirmed
/// counts never go down.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClueState {
    letters: [LetterEvidence; ALPHABET_SIZE],
}

impl Default for ClueState {
    fn default() -> Self {
        Self {
            letters: std::array::from_fn(|_| LetterEvidence::UNKNOWN),
        }
    }
}

impl ClueState {
    /// A clue state with no information about any letter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one observation's evidence into a copy of this state
    ///
    /// The receiver is left untouched so callers can compare before and after.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::clues::{ClueState, parse};
    ///
    /// let before = ClueState::new();
    /// let after = before.merge(&parse("aeros", "bbbbb", 5).unwrap());
    /// assert!(after.letter(b'a').is_absent());
    /// assert!(before.letter(b'a').is_unknown());
    /// ```
    #[must_use]
    pub fn merge(&self, evidence: &Evidence) -> Self {
        let mut merged = self.clone();
        for (letter, incoming) in evidence.iter() {
            let slot = &mut merged.letters[letter_index(letter)];
            *slot = slot.merge(incoming);
        }
        merged
    }

    /// Evidence for one letter
    ///
    /// # Panics
    /// Panics if `letter` is not a lowercase ASCII letter.
    #[inline]
    #[must_use]
    pub fn letter(&self, letter: u8) -> &LetterEvidence {
        &self.letters[letter_index(letter)]
    }

    /// Ordered letter-code view for one letter
    #[must_use]
    pub fn codes(&self, letter: u8) -> Vec<LetterCode> {
        self.letter(letter).codes()
    }

    /// Iterate all letters with their evidence, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (u8, &LetterEvidence)> {
        self.letters
            .iter()
            .enumerate()
            .map(|(index, evidence)| (index_letter(index), evidence))
    }

    /// Letters that carry any information
    pub fn constrained(&self) -> impl Iterator<Item = (u8, &LetterEvidence)> {
        self.iter().filter(|(_, evidence)| !evidence.is_unknown())
    }

    /// True when nothing is known yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letters.iter().all(LetterEvidence::is_unknown)
    }

    /// Whether `word` is consistent with every letter's evidence
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.constrained()
            .all(|(letter, evidence)| evidence.admits(letter, word))
    }
}

impl fmt::Display for ClueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (letter, evidence) in self.constrained() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}{evidence}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::parse;

    fn state_after(rounds: &[(&str, &str)]) -> ClueState {
        rounds.iter().fold(ClueState::new(), |state, (guess, feedback)| {
            state.merge(&parse(guess, feedback, 5).unwrap())
        })
    }

    #[test]
    fn new_state_is_all_unknown() {
        let state = ClueState::new();
        assert!(state.is_blank());
        for (letter, _) in state.iter() {
            assert_eq!(state.codes(letter), vec![LetterCode::Unknown]);
        }
        assert_eq!(state.iter().count(), 26);
    }

    #[test]
    fn merge_does_not_mutate_receiver() {
        let before = ClueState::new();
        let after = before.merge(&parse("crane", "gybbb", 5).unwrap());
        assert!(before.is_blank());
        assert_eq!(after.letter(b'c').placed(), &[0]);
        assert_eq!(after.letter(b'r').count(), 1);
    }

    #[test]
    fn rager_merges_to_single_unplaced_r() {
        let state = state_after(&[("rager", "yybyb")]);
        assert_eq!(
            state.codes(b'r'),
            vec![LetterCode::PresentUnplaced(1), LetterCode::Absent]
        );
        assert_eq!(state.codes(b'g'), vec![LetterCode::Absent]);
        assert_eq!(
            state.codes(b'a'),
            vec![LetterCode::PresentUnplaced(1), LetterCode::Unknown]
        );
    }

    #[test]
    fn merge_is_monotone_over_rounds() {
        let rounds = [
            ("aeros", "yyybb"),
            ("dicty", "bbbbb"),
            ("rager", "yybyb"),
            ("marle", "yyybg"),
            ("brake", "bggbg"),
        ];
        let mut state = ClueState::new();
        for (guess, feedback) in rounds {
            let next = state.merge(&parse(guess, feedback, 5).unwrap());
            for ((_, old), (_, new)) in state.iter().zip(next.iter()) {
                assert!(new.count() >= old.count());
                assert!(old.placed().iter().all(|p| new.placed().contains(p)));
                assert!(!old.is_capped() || new.is_capped());
            }
            state = next;
        }
        assert_eq!(state.letter(b'r').placed(), &[1]);
        assert_eq!(state.letter(b'a').placed(), &[2]);
        assert_eq!(state.letter(b'e').placed(), &[4]);
        assert!(!state.admits(&Word::new("drake").unwrap()));
        assert!(state.admits(&Word::new("frame").unwrap()));
    }

    #[test]
    fn merge_same_evidence_twice_is_stable() {
        let evidence = parse("speed", "bygbb", 5).unwrap();
        let once = ClueState::new().merge(&evidence);
        let twice = once.merge(&evidence);
        assert_eq!(once, twice);
    }

    #[test]
    fn admits_respects_all_letters() {
        let state = state_after(&[("aeros", "bbbbb")]);
        assert!(state.admits(&Word::new("zzzzz").unwrap()));
        assert!(!state.admits(&Word::new("aeros").unwrap()));
        assert!(state.admits(&Word::new("lucky").unwrap()));
    }

    #[test]
    fn display_lists_constrained_letters() {
        let state = state_after(&[("rager", "yybyb")]);
        assert_eq!(state.to_string(), "a[*,?] e[*,?] g[x] r[*,x]");
    }
}
