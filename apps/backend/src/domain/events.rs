//! Outbound facts produced by accepted operations.
//!
//! Payloads are captured at the moment the event is emitted, so one
//! operation that passes through several phases still reports each step
//! as it was.

use crate::domain::answers::AnswerRows;
use crate::domain::columns::ColumnSchema;
use crate::domain::snapshot::{FinalStandings, RoundResult, SessionSnapshot};
use crate::domain::state::{Participant, ParticipantId};

/// Who receives an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Every joined participant.
    Everyone,
    Only(ParticipantId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Welcome {
        participant: ParticipantId,
        is_host: bool,
        snapshot: Box<SessionSnapshot>,
    },
    HostAssigned {
        host: ParticipantId,
    },
    PlayerJoined {
        player: Participant,
        players: Vec<Participant>,
    },
    PlayerLeft {
        participant: ParticipantId,
        players: Vec<Participant>,
    },
    ColumnsUpdated {
        columns: ColumnSchema,
    },
    LetterSelectionStarted {
        round: u32,
    },
    /// One tick of the cycle; rendered per viewer.
    LetterChanged {
        letter: char,
        host: Option<ParticipantId>,
    },
    LetterSelected {
        letter: char,
    },
    SelectionCancelled {
        round: u32,
    },
    AnswerUpdated {
        participant: ParticipantId,
        column_index: usize,
        answer: String,
    },
    ValidationStarted {
        answers: AnswerRows,
        players: Vec<Participant>,
        columns: ColumnSchema,
    },
    RoundEnded(Box<RoundResult>),
    GameOver(Box<FinalStandings>),
    HostChanged {
        host: ParticipantId,
    },
    GameReset {
        players: Vec<Participant>,
    },
}

impl SessionEvent {
    pub fn audience(&self) -> Audience {
        match self {
            SessionEvent::Welcome { participant, .. } => Audience::Only(*participant),
            SessionEvent::HostAssigned { host } => Audience::Only(*host),
            _ => Audience::Everyone,
        }
    }

    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::Welcome { .. } => "welcome",
            SessionEvent::HostAssigned { .. } => "host_assigned",
            SessionEvent::PlayerJoined { .. } => "player_joined",
            SessionEvent::PlayerLeft { .. } => "player_left",
            SessionEvent::ColumnsUpdated { .. } => "columns_updated",
            SessionEvent::LetterSelectionStarted { .. } => "letter_selection_started",
            SessionEvent::LetterChanged { .. } => "letter_changed",
            SessionEvent::LetterSelected { .. } => "letter_selected",
            SessionEvent::SelectionCancelled { .. } => "selection_cancelled",
            SessionEvent::AnswerUpdated { .. } => "answer_updated",
            SessionEvent::ValidationStarted { .. } => "validation_started",
            SessionEvent::RoundEnded(_) => "round_ended",
            SessionEvent::GameOver(_) => "game_over",
            SessionEvent::HostChanged { .. } => "host_changed",
            SessionEvent::GameReset { .. } => "game_reset",
        }
    }
}
