use tracing::{debug, info};

use super::{commit, FlowResult, GameFlowService};
use crate::domain::events::SessionEvent;
use crate::domain::scoring::score_round;
use crate::domain::session::{RoundRecord, Session};
use crate::domain::snapshot::{FinalStandings, RoundResult};
use crate::domain::state::{ParticipantId, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlowService {
    /// Host opens the letter cycle for the next round.
    ///
    /// Clears the previous letter, votes and answers. The caller drives
    /// [`GameFlowService::tick_letter`] with the returned selection's
    /// generation until the selection stops.
    pub fn start_round(&self, session: &mut Session, requester: ParticipantId) -> FlowResult {
        session.require_host(requester)?;
        session.require_phase(Phase::Idle)?;
        if session.letters.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::LetterPoolExhausted,
                "No letters left in the pool",
            ));
        }

        session.current_letter = None;
        session.votes.clear();
        session.answers.blank_all();
        session.phase = Phase::SelectingLetter;
        let selection = session.begin_selection();

        info!(
            round = session.round,
            generation = selection.generation,
            letters_remaining = session.letters.len(),
            "Letter selection started"
        );
        let events = vec![SessionEvent::LetterSelectionStarted {
            round: session.round,
        }];
        commit(session, events)
    }

    /// Advance the cycling letter by one.
    ///
    /// A tick whose generation does not match the running selection is
    /// stale and is refused without touching the session.
    pub fn tick_letter(&self, session: &mut Session, generation: u64) -> FlowResult {
        let selection = match session.selection {
            Some(selection)
                if selection.generation == generation
                    && session.phase == Phase::SelectingLetter =>
            {
                selection
            }
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!("Stale letter tick for generation {generation}"),
                ))
            }
        };

        let letter = session.letters.letter_at(selection.cursor).ok_or_else(|| {
            DomainError::validation(ValidationKind::LetterPoolExhausted, "No letters to cycle")
        })?;

        session.current_letter = Some(letter);
        if let Some(running) = session.selection.as_mut() {
            running.cursor = (selection.cursor + 1) % session.letters.len();
        }

        let events = vec![SessionEvent::LetterChanged {
            letter,
            host: session.host,
        }];
        commit(session, events)
    }

    /// Any participant locks in the letter currently showing.
    pub fn stop_selection(&self, session: &mut Session, requester: ParticipantId) -> FlowResult {
        session.require_participant(requester)?;
        session.require_phase(Phase::SelectingLetter)?;
        let letter = session.current_letter.ok_or_else(|| {
            DomainError::validation(ValidationKind::NoLetterDrawn, "No letter drawn yet")
        })?;

        session.selection = None;
        session.phase = Phase::Playing;

        info!(round = session.round, %letter, stopped_by = %requester, "Letter selected");
        commit(session, vec![SessionEvent::LetterSelected { letter }])
    }

    /// Any participant ends answering; peer review begins.
    ///
    /// The letter leaves the pool for good. A round where no cell needs
    /// votes is scored on the spot.
    pub fn stop_round(&self, session: &mut Session, requester: ParticipantId) -> FlowResult {
        session.require_participant(requester)?;
        session.require_phase(Phase::Playing)?;

        if let Some(letter) = session.current_letter.take() {
            session.letters.consume(letter);
        }
        let subjects = session.participant_ids();
        let width = session.columns.len();
        session.votes.open(subjects, width);
        session.phase = Phase::Validating;

        info!(
            round = session.round,
            stopped_by = %requester,
            letters_remaining = session.letters.len(),
            "Validation started"
        );

        let mut events = vec![SessionEvent::ValidationStarted {
            answers: session.answers.to_rows(),
            players: session.players(),
            columns: session.columns.clone(),
        }];
        events.extend(self.complete_round_if_ready(session));
        commit(session, events)
    }

    /// Score the round if every answered cell has all its votes.
    ///
    /// Fires at most once per round: scoring leaves `Validating`.
    pub(super) fn complete_round_if_ready(&self, session: &mut Session) -> Vec<SessionEvent> {
        if session.phase != Phase::Validating {
            return Vec::new();
        }
        if !session
            .votes
            .is_complete(&session.answers, session.participants.len())
        {
            debug!(round = session.round, "Validation still waiting for votes");
            return Vec::new();
        }
        self.finish_round(session)
    }

    fn finish_round(&self, session: &mut Session) -> Vec<SessionEvent> {
        let scoring = score_round(
            &session.participant_ids(),
            session.columns.len(),
            &session.answers,
            &session.votes,
        );

        for player in &mut session.participants {
            player.score += scoring.scores.get(&player.id).copied().unwrap_or(0);
        }

        let answers = session.answers.to_rows();
        session.history.push(RoundRecord {
            round: session.round,
            scores: scoring.scores.clone(),
            answers: answers.clone(),
            valid_answers: scoring.validity.clone(),
        });

        let played = session.round;
        let is_game_over = played >= session.max_rounds();

        let mut events = vec![SessionEvent::RoundEnded(Box::new(RoundResult {
            scores: scoring.scores,
            total_scores: session.players(),
            answers,
            valid_answers: scoring.validity,
            is_game_over,
            current_round: played,
            max_rounds: session.max_rounds(),
        }))];

        if is_game_over {
            session.phase = Phase::GameOver;
            info!(round = played, "Game over");
            events.push(SessionEvent::GameOver(Box::new(FinalStandings {
                final_scores: session.players(),
                round_scores: session.history.clone(),
            })));
        } else {
            session.round += 1;
            session.phase = Phase::Idle;
            info!(round = played, next_round = session.round, "Round ended");
        }

        events
    }
}
