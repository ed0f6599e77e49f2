//! Domain layer: pure game logic types and helpers.

pub mod answers;
pub mod columns;
pub mod events;
pub mod letters;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod votes;

#[cfg(test)]
mod tests_props_votes;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use answers::{AnswerRows, AnswerTable};
pub use columns::ColumnSchema;
pub use events::{Audience, SessionEvent};
pub use letters::LetterPool;
pub use scoring::{normalize_answer, score_round, RoundScoring};
pub use session::{RoundRecord, Session, SessionSettings};
pub use snapshot::{SessionSnapshot, SessionSummary};
pub use state::{Participant, ParticipantId, Phase};
pub use votes::{CellRef, VoteLedger, VoteTally};
