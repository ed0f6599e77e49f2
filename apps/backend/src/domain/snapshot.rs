//! Public views of the session, projected per viewer where it matters.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::answers::AnswerRows;
use crate::domain::columns::ColumnSchema;
use crate::domain::rules::OBSCURED_LETTER;
use crate::domain::session::{RoundRecord, Session};
use crate::domain::state::{Participant, ParticipantId, Phase};

/// Everything a newly joined participant needs to render the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub version: u64,
    pub phase: Phase,
    pub players: Vec<Participant>,
    pub host_id: Option<ParticipantId>,
    pub columns: ColumnSchema,
    /// As visible to the viewer; obscured for non-hosts while cycling.
    pub current_letter: Option<String>,
    pub round: u32,
    pub max_rounds: u32,
    pub answers: AnswerRows,
    pub letters_remaining: usize,
}

/// Result of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub scores: BTreeMap<ParticipantId, u32>,
    /// Roster with updated cumulative scores.
    pub total_scores: Vec<Participant>,
    pub answers: AnswerRows,
    pub valid_answers: BTreeMap<ParticipantId, Vec<bool>>,
    pub is_game_over: bool,
    /// The round just played.
    pub current_round: u32,
    pub max_rounds: u32,
}

/// Final standings and the round-by-round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalStandings {
    pub final_scores: Vec<Participant>,
    pub round_scores: Vec<RoundRecord>,
}

/// Compact, viewer-independent status for the HTTP surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub phase: Phase,
    pub round: u32,
    pub max_rounds: u32,
    pub participants: usize,
    pub letters_remaining: usize,
    pub version: u64,
}

/// The cycling letter as `viewer` is allowed to see it.
///
/// Only the host sees the real letter before it is locked in.
pub fn visible_letter(viewer: ParticipantId, host: Option<ParticipantId>, letter: char) -> String {
    if host == Some(viewer) {
        letter.to_string()
    } else {
        OBSCURED_LETTER.to_string()
    }
}

pub fn snapshot_for(session: &Session, viewer: ParticipantId) -> SessionSnapshot {
    let current_letter = session.current_letter().map(|letter| {
        if session.phase() == Phase::SelectingLetter {
            visible_letter(viewer, session.host(), letter)
        } else {
            letter.to_string()
        }
    });

    SessionSnapshot {
        version: session.version(),
        phase: session.phase(),
        players: session.players(),
        host_id: session.host(),
        columns: session.columns().clone(),
        current_letter,
        round: session.round(),
        max_rounds: session.max_rounds(),
        answers: session.answers().to_rows(),
        letters_remaining: session.letters().len(),
    }
}

pub fn summarize(session: &Session) -> SessionSummary {
    SessionSummary {
        phase: session.phase(),
        round: session.round(),
        max_rounds: session.max_rounds(),
        participants: session.participants().len(),
        letters_remaining: session.letters().len(),
        version: session.version(),
    }
}
