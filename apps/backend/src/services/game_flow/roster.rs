use tracing::{debug, info};

use super::{commit, FlowResult, GameFlowService};
use crate::domain::columns::ColumnSchema;
use crate::domain::events::SessionEvent;
use crate::domain::session::Session;
use crate::domain::snapshot::snapshot_for;
use crate::domain::state::{Participant, ParticipantId, Phase};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

impl GameFlowService {
    /// Add a participant. The first one to join an empty session hosts it.
    pub fn join(&self, session: &mut Session, id: ParticipantId, name: &str) -> FlowResult {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Display name must not be empty",
            ));
        }
        if session.is_participant(id) {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyJoined,
                format!("Participant {id} already joined"),
            ));
        }

        let player = Participant::new(id, name);
        session.participants.push(player.clone());
        session.answers.add_row(id);

        let became_host = session.host.is_none();
        if became_host {
            session.host = Some(id);
        }

        info!(
            participant_id = %id,
            name = %player.name,
            is_host = became_host,
            participants = session.participants.len(),
            "Participant joined"
        );

        // Snapshot reflects this join and the version it will carry.
        let mut snapshot = snapshot_for(session, id);
        snapshot.version += 1;

        let mut events = vec![SessionEvent::Welcome {
            participant: id,
            is_host: became_host,
            snapshot: Box::new(snapshot),
        }];
        if became_host {
            events.push(SessionEvent::HostAssigned { host: id });
        }
        events.push(SessionEvent::PlayerJoined {
            player,
            players: session.players(),
        });
        commit(session, events)
    }

    /// Remove a participant and everything keyed by them.
    ///
    /// A departing host hands over to the oldest remaining participant and
    /// cancels a letter selection in progress. The last one out resets the
    /// whole session.
    pub fn leave(&self, session: &mut Session, id: ParticipantId) -> FlowResult {
        session.require_participant(id)?;

        session.participants.retain(|p| p.id != id);
        session.answers.remove_row(id);
        session.votes.remove_participant(id);

        if session.participants.is_empty() {
            session.replace_with_fresh();
            info!(participant_id = %id, "Last participant left; session reset");
            return commit(
                session,
                vec![SessionEvent::PlayerLeft {
                    participant: id,
                    players: Vec::new(),
                }],
            );
        }

        let mut events = Vec::new();
        if session.host == Some(id) {
            let successor = session.participants[0].id;
            session.host = Some(successor);

            if session.phase == Phase::SelectingLetter {
                session.selection = None;
                session.current_letter = None;
                session.phase = Phase::Idle;
                debug!(round = session.round, "Letter selection cancelled by host departure");
                events.push(SessionEvent::SelectionCancelled {
                    round: session.round,
                });
            }

            info!(from = %id, to = %successor, "Host changed");
            events.push(SessionEvent::HostChanged { host: successor });
        }

        info!(
            participant_id = %id,
            participants = session.participants.len(),
            phase = ?session.phase,
            "Participant left"
        );
        events.push(SessionEvent::PlayerLeft {
            participant: id,
            players: session.players(),
        });

        // Fewer voters may be needed now.
        events.extend(self.complete_round_if_ready(session));
        commit(session, events)
    }

    /// Replace the column schema. Host only, and never mid-round.
    pub fn set_columns(
        &self,
        session: &mut Session,
        requester: ParticipantId,
        labels: &[String],
    ) -> FlowResult {
        session.require_host(requester)?;
        if session.phase.is_mid_round() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot change columns during {:?}", session.phase),
            ));
        }
        let columns = ColumnSchema::new(labels)?;

        session.answers.resize(columns.len());
        session.votes.clear();
        session.columns = columns.clone();

        info!(columns = columns.len(), "Columns updated");
        commit(session, vec![SessionEvent::ColumnsUpdated { columns }])
    }

    /// Start the game over with the same roster and columns.
    pub fn reset_game(&self, session: &mut Session, requester: ParticipantId) -> FlowResult {
        session.require_host(requester)?;

        for player in &mut session.participants {
            player.score = 0;
        }
        session.round = 1;
        session.history.clear();
        session.votes.clear();
        session.phase = Phase::Idle;
        session.selection = None;
        session.current_letter = None;
        session.letters.restore();
        session.answers.blank_all();

        info!(requested_by = %requester, "Game reset");
        let events = vec![SessionEvent::GameReset {
            players: session.players(),
        }];
        commit(session, events)
    }
}
