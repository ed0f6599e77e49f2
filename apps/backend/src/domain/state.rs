use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque participant identity, minted per connection.
///
/// Unique for the lifetime of one connection; a participant who reconnects
/// gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for ParticipantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A joined participant as seen by everyone in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Cumulative score; only an explicit reset lowers it.
    pub score: u32,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }
}

/// Round lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lobby, or between rounds.
    Idle,
    /// The letter is cycling; the host sees it, nobody else does.
    SelectingLetter,
    /// Letter locked; participants fill in their own row.
    Playing,
    /// Peer review of every non-blank cell.
    Validating,
    /// All rounds played. Only a reset leaves this phase.
    GameOver,
}

impl Phase {
    /// Whether a round is in flight (columns are frozen).
    pub fn is_mid_round(self) -> bool {
        matches!(
            self,
            Phase::SelectingLetter | Phase::Playing | Phase::Validating
        )
    }
}
