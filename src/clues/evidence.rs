//! Per-letter evidence
//!
//! A letter's evidence is a confirmed set of positions, a confirmed minimum
//! number of occurrences, and an optional hard upper bound (set by gray
//! feedback). The bound, when present, is always equal to the confirmed count:
//! a gray mark means "no copies beyond the ones already marked".
//!
//! The ordered letter-code view ([`LetterCode`]) is derived from this model
//! rather than stored, so every code sequence a caller can observe is
//! consistent by construction.

use crate::core::{Feedback, Mark, Word, letter_index};
use rustc_hash::FxHashMap;
use std::fmt;

/// One piece of evidence about a letter, in the order it is listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCode {
    /// No information (also: more occurrences may still be found)
    Unknown,
    /// Letter does not occur, or not beyond the occurrences listed before it
    Absent,
    /// The n-th confirmed occurrence whose position is not known
    PresentUnplaced(usize),
    /// Letter occurs at this position
    PlacedAt(usize),
}

/// Everything known about one letter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterEvidence {
    placed: Vec<usize>,
    count: usize,
    capped: bool,
}

impl LetterEvidence {
    /// No information at all
    pub const UNKNOWN: Self = Self {
        placed: Vec::new(),
        count: 0,
        capped: false,
    };

    /// The letter does not occur
    pub const ABSENT: Self = Self {
        placed: Vec::new(),
        count: 0,
        capped: true,
    };

    /// Build evidence from raw parts, normalizing positions and count
    ///
    /// Positions are sorted and deduplicated; the count is raised to at least
    /// the number of distinct positions.
    #[must_use]
    pub fn new(mut placed: Vec<usize>, count: usize, capped: bool) -> Self {
        placed.sort_unstable();
        placed.dedup();
        let count = count.max(placed.len());
        Self {
            placed,
            count,
            capped,
        }
    }

    /// Record a green mark at `position`
    pub(crate) fn record_green(&mut self, position: usize) {
        if let Err(slot) = self.placed.binary_search(&position) {
            self.placed.insert(slot, position);
            self.count += 1;
        }
    }

    /// Record a yellow mark
    pub(crate) fn record_yellow(&mut self) {
        self.count += 1;
    }

    /// Record a gray mark
    pub(crate) fn record_gray(&mut self) {
        self.capped = true;
    }

    /// Positions where the letter is confirmed
    #[inline]
    #[must_use]
    pub fn placed(&self) -> &[usize] {
        &self.placed
    }

    /// Confirmed minimum number of occurrences (placed ones included)
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Confirmed occurrences whose position is still unknown
    #[inline]
    #[must_use]
    pub fn unplaced(&self) -> usize {
        self.count - self.placed.len()
    }

    /// Whether gray feedback has fixed the total number of occurrences
    #[inline]
    #[must_use]
    pub const fn is_capped(&self) -> bool {
        self.capped
    }

    /// Exact number of occurrences, if known
    #[must_use]
    pub const fn upper_bound(&self) -> Option<usize> {
        if self.capped { Some(self.count) } else { None }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.count == 0 && !self.capped
    }

    /// Fully absent: capped with no positive evidence
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.count == 0 && self.capped
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.count > 0
    }

    /// Join two pieces of evidence about the same letter
    ///
    /// Placements are unioned, the confirmed count is the larger of the two
    /// (and never below the union of placements), and a hard bound from either
    /// side is kept. Evidence is never lost, so the result is at least as
    /// informative as either input.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut placed = Vec::with_capacity(self.placed.len() + other.placed.len());
        placed.extend_from_slice(&self.placed);
        placed.extend_from_slice(&other.placed);
        Self::new(
            placed,
            self.count.max(other.count),
            self.capped || other.capped,
        )
    }

    /// Whether `word` is consistent with this evidence about `letter`
    #[must_use]
    pub fn admits(&self, letter: u8, word: &Word) -> bool {
        let letters = word.letters();
        let placed_ok = self
            .placed
            .iter()
            .all(|&position| letters.get(position) == Some(&letter));
        if !placed_ok {
            return false;
        }

        // Placed occurrences are part of `count`, so they are not counted twice.
        let occurrences = word.count_of(letter);
        if self.capped {
            occurrences == self.count
        } else {
            occurrences >= self.count
        }
    }

    /// Ordered letter-code view of this evidence
    ///
    /// Placements come first, then one `PresentUnplaced` per unplaced
    /// occurrence, then a trailing `Absent` (hard bound) or `Unknown` (open).
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::clues::{LetterCode, LetterEvidence};
    ///
    /// assert_eq!(LetterEvidence::UNKNOWN.codes(), vec![LetterCode::Unknown]);
    /// assert_eq!(LetterEvidence::ABSENT.codes(), vec![LetterCode::Absent]);
    ///
    /// let evidence = LetterEvidence::new(vec![2], 2, true);
    /// assert_eq!(
    ///     evidence.codes(),
    ///     vec![
    ///         LetterCode::PlacedAt(2),
    ///         LetterCode::PresentUnplaced(1),
    ///         LetterCode::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn codes(&self) -> Vec<LetterCode> {
        let mut codes: Vec<LetterCode> = self
            .placed
            .iter()
            .map(|&position| LetterCode::PlacedAt(position))
            .collect();
        codes.extend((1..=self.unplaced()).map(LetterCode::PresentUnplaced));
        codes.push(if self.capped {
            LetterCode::Absent
        } else {
            LetterCode::Unknown
        });
        codes
    }
}

impl fmt::Display for LetterEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self
            .codes()
            .into_iter()
            .map(|code| match code {
                LetterCode::Unknown => "?".to_string(),
                LetterCode::Absent => "x".to_string(),
                LetterCode::PresentUnplaced(_) => "*".to_string(),
                LetterCode::PlacedAt(position) => position.to_string(),
            })
            .collect();
        write!(f, "[{}]", codes.join(","))
    }
}

/// Evidence from a single observation, keyed by letter
///
/// Only letters that appear in the guess have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    letters: FxHashMap<u8, LetterEvidence>,
}

impl Evidence {
    /// Translate per-position feedback for `guess` into per-letter evidence
    ///
    /// Greens record placements and yellows add to the confirmed count. A gray
    /// caps the letter: with no green or yellow copy in the same guess that
    /// means absent, otherwise it means "exactly the copies already marked".
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Self {
        let mut letters: FxHashMap<u8, LetterEvidence> = FxHashMap::default();

        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            let entry = letters.entry(letter).or_default();
            match mark {
                Mark::Green => entry.record_green(position),
                Mark::Yellow => entry.record_yellow(),
                Mark::Gray => entry.record_gray(),
            }
        }

        Self { letters }
    }

    pub(crate) const fn from_map(letters: FxHashMap<u8, LetterEvidence>) -> Self {
        Self { letters }
    }

    /// Evidence for one letter, if the letter was part of the guess
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&LetterEvidence> {
        self.letters.get(&letter)
    }

    /// Iterate letters and their evidence in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &LetterEvidence)> {
        let mut entries: Vec<(u8, &LetterEvidence)> =
            self.letters.iter().map(|(&letter, ev)| (letter, ev)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter_index(letter));
        entries.into_iter()
    }

    /// Number of distinct letters covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Render this evidence back to per-position feedback for `guess`
    ///
    /// Placed positions become green; the remaining copies of each letter are
    /// yellow, left to right, up to the unplaced count, and gray after that.
    #[must_use]
    pub fn render(&self, guess: &Word) -> Feedback {
        let mut yellow_budget: FxHashMap<u8, usize> = self
            .letters
            .iter()
            .map(|(&letter, ev)| (letter, ev.unplaced()))
            .collect();

        let marks = guess
            .letters()
            .iter()
            .enumerate()
            .map(|(position, letter)| {
                let placed = self
                    .letters
                    .get(letter)
                    .is_some_and(|ev| ev.placed().contains(&position));
                if placed {
                    return Mark::Green;
                }
                match yellow_budget.get_mut(letter) {
                    Some(budget) if *budget > 0 => {
                        *budget -= 1;
                        Mark::Yellow
                    }
                    _ => Mark::Gray,
                }
            })
            .collect();

        Feedback::new(marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(guess: &str, feedback: &str) -> Evidence {
        let guess = Word::new(guess).unwrap();
        Evidence::from_feedback(&guess, &Feedback::parse(feedback).unwrap())
    }

    #[test]
    fn unknown_and_absent_constants() {
        assert!(LetterEvidence::UNKNOWN.is_unknown());
        assert!(LetterEvidence::ABSENT.is_absent());
        assert_eq!(LetterEvidence::default(), LetterEvidence::UNKNOWN);
        assert_eq!(LetterEvidence::ABSENT.upper_bound(), Some(0));
        assert_eq!(LetterEvidence::UNKNOWN.upper_bound(), None);
    }

    #[test]
    fn new_normalizes_positions_and_count() {
        let ev = LetterEvidence::new(vec![3, 1, 3], 1, false);
        assert_eq!(ev.placed(), &[1, 3]);
        assert_eq!(ev.count(), 2);
        assert_eq!(ev.unplaced(), 0);
    }

    #[test]
    fn all_gray_letters_are_absent() {
        let ev = evidence("aeros", "bbbbb");
        assert_eq!(ev.len(), 5);
        for letter in *b"aeros" {
            assert!(ev.get(letter).unwrap().is_absent());
        }
    }

    #[test]
    fn repeated_letter_gray_caps_instead_of_absent() {
        // r is yellow at 0 and gray at 4: exactly one r
        let ev = evidence("rager", "yybyb");
        let r = ev.get(b'r').unwrap();
        assert_eq!(r.count(), 1);
        assert!(r.placed().is_empty());
        assert!(r.is_capped());
        assert_eq!(
            r.codes(),
            vec![LetterCode::PresentUnplaced(1), LetterCode::Absent]
        );
        assert!(ev.get(b'g').unwrap().is_absent());
        assert_eq!(ev.get(b'e').unwrap().count(), 1);
    }

    #[test]
    fn green_and_yellow_copies_both_count() {
        let ev = evidence("speed", "bbgyb");
        let e = ev.get(b'e').unwrap();
        assert_eq!(e.placed(), &[2]);
        assert_eq!(e.count(), 2);
        assert!(!e.is_capped());
    }

    #[test]
    fn merge_unions_placements_and_keeps_max_count() {
        let a = LetterEvidence::new(vec![0], 1, false);
        let b = LetterEvidence::new(vec![3], 1, false);
        let merged = a.merge(&b);
        assert_eq!(merged.placed(), &[0, 3]);
        assert_eq!(merged.count(), 2);
        assert!(!merged.is_capped());
    }

    #[test]
    fn merge_keeps_hard_bound_from_either_side() {
        let open = LetterEvidence::new(vec![], 2, false);
        let capped = LetterEvidence::new(vec![1], 1, true);
        let merged = open.merge(&capped);
        assert_eq!(merged.count(), 2);
        assert_eq!(merged.placed(), &[1]);
        assert_eq!(merged.upper_bound(), Some(2));
    }

    #[test]
    fn merge_absent_into_unknown_is_absent() {
        let merged = LetterEvidence::UNKNOWN.merge(&LetterEvidence::ABSENT);
        assert!(merged.is_absent());
        assert_eq!(merged.codes(), vec![LetterCode::Absent]);
    }

    #[test]
    fn merge_absent_never_erases_placements() {
        let placed = LetterEvidence::new(vec![2], 1, false);
        let merged = placed.merge(&LetterEvidence::ABSENT);
        assert_eq!(merged.placed(), &[2]);
        assert_eq!(merged.upper_bound(), Some(1));
    }

    #[test]
    fn admits_checks_positions_and_counts() {
        let word = Word::new("error").unwrap();
        assert!(LetterEvidence::new(vec![1], 3, true).admits(b'r', &word));
        assert!(LetterEvidence::new(vec![1, 2], 2, false).admits(b'r', &word));
        assert!(!LetterEvidence::new(vec![0], 1, false).admits(b'r', &word));
        assert!(!LetterEvidence::new(vec![], 2, true).admits(b'r', &word));
        assert!(!LetterEvidence::new(vec![], 4, false).admits(b'r', &word));
        assert!(LetterEvidence::ABSENT.admits(b'z', &word));
        assert!(!LetterEvidence::ABSENT.admits(b'e', &word));
    }

    #[test]
    fn admits_rejects_out_of_range_position() {
        let word = Word::new("abc").unwrap();
        assert!(!LetterEvidence::new(vec![7], 1, false).admits(b'a', &word));
    }

    #[test]
    fn render_round_trips_feedback() {
        let guess = Word::new("rager").unwrap();
        for feedback in ["yybyb", "gbbbg", "bbbbb", "ygygb"] {
            let parsed = Feedback::parse(feedback).unwrap();
            let ev = Evidence::from_feedback(&guess, &parsed);
            let reparsed = Evidence::from_feedback(&guess, &ev.render(&guess));
            assert_eq!(reparsed, ev, "feedback {feedback}");
        }
    }

    #[test]
    fn iter_is_alphabetical() {
        let ev = evidence("crane", "bbbbb");
        let letters: Vec<u8> = ev.iter().map(|(letter, _)| letter).collect();
        assert_eq!(letters, b"acenr");
    }

    #[test]
    fn display_uses_compact_codes() {
        let ev = LetterEvidence::new(vec![0], 2, true);
        assert_eq!(ev.to_string(), "[0,*,x]");
        assert_eq!(LetterEvidence::UNKNOWN.to_string(), "[?]");
    }
}
