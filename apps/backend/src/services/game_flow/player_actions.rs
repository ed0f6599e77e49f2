use tracing::debug;

use super::{commit, FlowResult, GameFlowService};
use crate::domain::events::SessionEvent;
use crate::domain::session::Session;
use crate::domain::state::{ParticipantId, Phase};
use crate::domain::votes::CellRef;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlowService {
    /// Write into the caller's own row while playing.
    ///
    /// Text is stored as sent; length limits belong to the client.
    pub fn update_answer(
        &self,
        session: &mut Session,
        participant: ParticipantId,
        column_index: usize,
        text: &str,
    ) -> FlowResult {
        session.require_participant(participant)?;
        session.require_phase(Phase::Playing)?;
        session.columns.require_index(column_index)?;
        session.answers.set(participant, column_index, text)?;

        debug!(participant_id = %participant, column_index, "Answer updated");
        commit(
            session,
            vec![SessionEvent::AnswerUpdated {
                participant,
                column_index,
                answer: text.to_string(),
            }],
        )
    }

    /// Record a peer verdict on someone else's cell.
    ///
    /// Voting again on the same cell overwrites. The round is scored as
    /// soon as the last required vote lands.
    pub fn submit_vote(
        &self,
        session: &mut Session,
        voter: ParticipantId,
        subject: ParticipantId,
        column_index: usize,
        accept: bool,
    ) -> FlowResult {
        session.require_participant(voter)?;
        session.require_phase(Phase::Validating)?;
        if voter == subject {
            return Err(DomainError::validation(
                ValidationKind::SelfVote,
                "Cannot vote on your own answer",
            ));
        }
        session.require_participant(subject)?;
        session.columns.require_index(column_index)?;

        let previous =
            session
                .votes
                .record(voter, CellRef::new(subject, column_index), accept)?;

        debug!(
            voter = %voter,
            subject = %subject,
            column_index,
            accept,
            overwrote = previous.is_some(),
            "Vote recorded"
        );

        let events = self.complete_round_if_ready(session);
        commit(session, events)
    }
}
