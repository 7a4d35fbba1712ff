//! Colored feedback for a single guess
//!
//! Each guessed letter is reported as one of three marks:
//! - Green: letter is in the solution at this position
//! - Yellow: letter is in the solution at another position
//! - Gray: letter is not in the solution, or not beyond the copies already marked

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Gray,
}

impl Mark {
    /// Parse one feedback symbol (case-insensitive)
    ///
    /// Accepts:
    /// - 'g'/🟩 for green
    /// - 'y'/🟨 for yellow
    /// - 'b'/'x'/'-'/'_'/⬜/⬛ for gray
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'g' | '🟩' => Some(Self::Green),
            'y' | '🟨' => Some(Self::Yellow),
            'b' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    /// Canonical single-letter symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Gray => 'b',
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

/// Error returned when a feedback string contains an unrecognized symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized feedback symbol {symbol:?} at position {position}")]
pub struct FeedbackError {
    pub symbol: char,
    pub position: usize,
}

/// Ordered per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Wrap an ordered list of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Feedback where every letter is green
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![Mark::Green; length])
    }

    /// Parse feedback like "yyybb", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Whitespace anywhere in the input is ignored.
    ///
    /// # Errors
    /// Returns `FeedbackError` naming the first unrecognized symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Feedback;
    ///
    /// let a = Feedback::parse("Y y b - _").unwrap();
    /// let b = Feedback::parse("🟨🟨⬜⬜⬜").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "yybbb");
    /// ```
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| {
                Mark::from_symbol(symbol).ok_or(FeedbackError { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// The marks in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no marks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every mark is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&mark| mark == Mark::Green)
    }

    /// Count the marks of one kind
    #[must_use]
    pub fn count(&self, kind: Mark) -> usize {
        self.0.iter().filter(|&&mark| mark == kind).count()
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
