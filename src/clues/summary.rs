//! Human-oriented digest of a clue state

use super::ClueState;
use std::fmt;

/// How close the clues are to pinning down the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Every position is placed
    Solved,
    /// Every letter is known; only the arrangement of unplaced letters is open
    AllLettersKnown,
    Searching,
}

/// Digest of a [`ClueState`] for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueSummary {
    /// Placed letters by position, `None` where nothing is placed
    pub pattern: Vec<Option<u8>>,
    /// One entry per confirmed-but-unplaced occurrence, sorted
    pub present: Vec<u8>,
    /// Letters known not to occur at all
    pub absent: Vec<u8>,
    /// Letters that may still occur (more often than confirmed)
    pub open: Vec<u8>,
    pub progress: Progress,
}

impl ClueSummary {
    #[must_use]
    pub fn new(clues: &ClueState, word_length: usize) -> Self {
        let mut pattern = vec![None; word_length];
        let mut present = Vec::new();
        let mut absent = Vec::new();
        let mut open = Vec::new();

        for (letter, evidence) in clues.iter() {
            for &position in evidence.placed() {
                if let Some(slot) = pattern.get_mut(position) {
                    *slot = Some(letter);
                }
            }
            present.extend(std::iter::repeat_n(letter, evidence.unplaced()));
            if evidence.is_absent() {
                absent.push(letter);
            } else if !evidence.is_capped() {
                open.push(letter);
            }
        }

        let unknown_positions = pattern.iter().filter(|slot| slot.is_none()).count();
        let progress = if unknown_positions == 0 {
            Progress::Solved
        } else if unknown_positions == present.len() {
            Progress::AllLettersKnown
        } else {
            Progress::Searching
        };

        Self {
            pattern,
            present,
            absent,
            open,
            progress,
        }
    }

    /// Placed letters with `.` for unknown positions, e.g. `.ra.e`
    #[must_use]
    pub fn pattern_string(&self) -> String {
        self.pattern
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect()
    }

    /// The solution, once every position is placed
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        (self.progress == Progress::Solved).then(|| self.pattern_string())
    }
}

fn letters(list: &[u8]) -> String {
    list.iter().copied().map(char::from).collect()
}

impl fmt::Display for ClueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | present: {} | absent: {} | open: {}",
            self.pattern_string(),
            letters(&self.present),
            letters(&self.absent),
            letters(&self.open)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::parse;

    fn summary(rounds: &[(&str, &str)]) -> ClueSummary {
        let state = rounds.iter().fold(ClueState::new(), |state, (guess, feedback)| {
            state.merge(&parse(guess, feedback, 5).unwrap())
        });
        ClueSummary::new(&state, 5)
    }

    #[test]
    fn blank_state_is_searching_with_all_letters_open() {
        let s = summary(&[]);
        assert_eq!(s.pattern_string(), ".....");
        assert!(s.present.is_empty());
        assert_eq!(s.open.len(), 26);
        assert_eq!(s.progress, Progress::Searching);
        assert_eq!(s.solution(), None);
    }

    #[test]
    fn partial_clues() {
        let s = summary(&[("rager", "yybyb"), ("brake", "bggbg")]);
        assert_eq!(s.pattern_string(), ".ra.e");
        assert!(s.present.is_empty());
        assert_eq!(letters(&s.absent), "bgk");
        assert!(!s.open.contains(&b'r'));
        assert!(s.open.contains(&b'a'));
        assert_eq!(s.progress, Progress::Searching);
    }

    #[test]
    fn all_letters_known() {
        let s = summary(&[("crane", "ggyyg")]);
        assert_eq!(s.pattern_string(), "cr..e");
        assert_eq!(letters(&s.present), "an");
        assert_eq!(s.progress, Progress::AllLettersKnown);
    }

    #[test]
    fn solved() {
        let s = summary(&[("crane", "ggggg")]);
        assert_eq!(s.solution(), Some("crane".to_string()));
        assert_eq!(s.progress, Progress::Solved);
    }

    #[test]
    fn display_format() {
        let s = summary(&[("aeros", "yyybb")]);
        let rendered = s.to_string();
        assert!(rendered.starts_with("..... | present: aer | absent: os | open: "));
    }
}
