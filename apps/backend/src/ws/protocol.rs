use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerRows;
use crate::domain::columns::ColumnSchema;
use crate::domain::events::SessionEvent;
use crate::domain::snapshot::{visible_letter, FinalStandings, RoundResult, SessionSnapshot};
use crate::domain::state::{Participant, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Join {
        name: String,
    },
    SetColumns {
        labels: Vec<String>,
    },
    StartRound,
    StopSelection,
    UpdateAnswer {
        column_index: usize,
        text: String,
    },
    StopRound,
    SubmitVote {
        subject_id: ParticipantId,
        column_index: usize,
        accept: bool,
    },
    ResetGame,
}

impl ClientMsg {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMsg::Join { .. } => "join",
            ClientMsg::SetColumns { .. } => "set_columns",
            ClientMsg::StartRound => "start_round",
            ClientMsg::StopSelection => "stop_selection",
            ClientMsg::UpdateAnswer { .. } => "update_answer",
            ClientMsg::StopRound => "stop_round",
            ClientMsg::SubmitVote { .. } => "submit_vote",
            ClientMsg::ResetGame => "reset_game",
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Welcome {
        participant_id: ParticipantId,
        is_host: bool,
        session: SessionSnapshot,
    },
    HostAssigned {
        host_id: ParticipantId,
    },
    PlayerJoined {
        player: Participant,
        players: Vec<Participant>,
    },
    PlayerLeft {
        player_id: ParticipantId,
        players: Vec<Participant>,
    },
    ColumnsUpdated {
        columns: ColumnSchema,
    },
    LetterSelectionStarted {
        round: u32,
    },
    LetterChanged {
        letter: String,
    },
    LetterSelected {
        letter: String,
    },
    SelectionCancelled {
        round: u32,
    },
    AnswerUpdated {
        player_id: ParticipantId,
        column_index: usize,
        answer: String,
    },
    ValidationStarted {
        answers: AnswerRows,
        players: Vec<Participant>,
        columns: ColumnSchema,
    },
    RoundEnded(RoundResult),
    GameOver(FinalStandings),
    HostChanged {
        host_id: ParticipantId,
    },
    GameReset {
        players: Vec<Participant>,
    },
    Error {
        code: ErrorCode,
        message: String,
    },
}

impl ServerMsg {
    /// The wire form of `event` as `viewer` receives it.
    pub fn render(event: &SessionEvent, viewer: ParticipantId) -> Self {
        match event {
            SessionEvent::Welcome {
                participant,
                is_host,
                snapshot,
            } => ServerMsg::Welcome {
                participant_id: *participant,
                is_host: *is_host,
                session: (**snapshot).clone(),
            },
            SessionEvent::HostAssigned { host } => ServerMsg::HostAssigned { host_id: *host },
            SessionEvent::PlayerJoined { player, players } => ServerMsg::PlayerJoined {
                player: player.clone(),
                players: players.clone(),
            },
            SessionEvent::PlayerLeft {
                participant,
                players,
            } => ServerMsg::PlayerLeft {
                player_id: *participant,
                players: players.clone(),
            },
            SessionEvent::ColumnsUpdated { columns } => ServerMsg::ColumnsUpdated {
                columns: columns.clone(),
            },
            SessionEvent::LetterSelectionStarted { round } => {
                ServerMsg::LetterSelectionStarted { round: *round }
            }
            SessionEvent::LetterChanged { letter, host } => ServerMsg::LetterChanged {
                letter: visible_letter(viewer, *host, *letter),
            },
            SessionEvent::LetterSelected { letter } => ServerMsg::LetterSelected {
                letter: letter.to_string(),
            },
            SessionEvent::SelectionCancelled { round } => {
                ServerMsg::SelectionCancelled { round: *round }
            }
            SessionEvent::AnswerUpdated {
                participant,
                column_index,
                answer,
            } => ServerMsg::AnswerUpdated {
                player_id: *participant,
                column_index: *column_index,
                answer: answer.clone(),
            },
            SessionEvent::ValidationStarted {
                answers,
                players,
                columns,
            } => ServerMsg::ValidationStarted {
                answers: answers.clone(),
                players: players.clone(),
                columns: columns.clone(),
            },
            SessionEvent::RoundEnded(result) => ServerMsg::RoundEnded((**result).clone()),
            SessionEvent::GameOver(standings) => ServerMsg::GameOver((**standings).clone()),
            SessionEvent::HostChanged { host } => ServerMsg::HostChanged { host_id: *host },
            SessionEvent::GameReset { players } => ServerMsg::GameReset {
                players: players.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
        }
    }
}
