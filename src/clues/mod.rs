//! Clue tracking
//!
//! Evidence gathered from feedback, the accumulated per-letter clue state,
//! and the simulator that predicts feedback for hypothetical solutions.

mod codec;
mod evidence;
mod simulate;
mod state;
mod summary;

pub use codec::{Observation, parse};
pub use evidence::{Evidence, LetterCode, LetterEvidence};
pub use simulate::{feedback_for, simulate};
pub use state::ClueState;
pub use summary::{ClueSummary, Progress};
