//! The session aggregate: the one mutable object every operation works on.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::answers::{AnswerRows, AnswerTable};
use crate::domain::columns::ColumnSchema;
use crate::domain::letters::LetterPool;
use crate::domain::rules::DEFAULT_MAX_ROUNDS;
use crate::domain::state::{Participant, ParticipantId, Phase};
use crate::domain::votes::VoteLedger;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Values a fresh session starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub max_rounds: u32,
    pub default_columns: ColumnSchema,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            default_columns: ColumnSchema::defaults(),
        }
    }
}

/// One completed round, kept for the game-over payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub scores: BTreeMap<ParticipantId, u32>,
    pub answers: AnswerRows,
    pub valid_answers: BTreeMap<ParticipantId, Vec<bool>>,
}

/// An active letter cycle. Ticks carrying another generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSelection {
    pub generation: u64,
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    settings: SessionSettings,
    pub(crate) participants: Vec<Participant>,
    pub(crate) host: Option<ParticipantId>,
    pub(crate) columns: ColumnSchema,
    pub(crate) current_letter: Option<char>,
    pub(crate) round: u32,
    pub(crate) phase: Phase,
    pub(crate) answers: AnswerTable,
    pub(crate) votes: VoteLedger,
    pub(crate) history: Vec<RoundRecord>,
    pub(crate) letters: LetterPool,
    pub(crate) selection: Option<LetterSelection>,
    generations: u64,
    version: u64,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        let columns = settings.default_columns.clone();
        Self {
            answers: AnswerTable::new(columns.len()),
            columns,
            settings,
            participants: Vec::new(),
            host: None,
            current_letter: None,
            round: 1,
            phase: Phase::Idle,
            votes: VoteLedger::new(),
            history: Vec::new(),
            letters: LetterPool::full(),
            selection: None,
            generations: 0,
            version: 0,
        }
    }

    /// Swap in an empty session built from the same settings.
    ///
    /// The generation counter carries over so a tick scheduled against the
    /// old session can never match a selection in the new one.
    pub fn replace_with_fresh(&mut self) {
        let generations = self.generations;
        let version = self.version;
        *self = Self::new(self.settings.clone());
        self.generations = generations;
        self.version = version;
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn is_participant(&self, id: ParticipantId) -> bool {
        self.participant(id).is_some()
    }

    pub fn host(&self) -> Option<ParticipantId> {
        self.host
    }

    pub fn is_host(&self, id: ParticipantId) -> bool {
        self.host == Some(id)
    }

    pub fn columns(&self) -> &ColumnSchema {
        &self.columns
    }

    pub fn current_letter(&self) -> Option<char> {
        self.current_letter
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.settings.max_rounds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerTable {
        &self.answers
    }

    pub fn votes(&self) -> &VoteLedger {
        &self.votes
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn letters(&self) -> &LetterPool {
        &self.letters
    }

    pub fn selection(&self) -> Option<LetterSelection> {
        self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Start a new letter cycle under a never-used generation.
    pub(crate) fn begin_selection(&mut self) -> LetterSelection {
        self.generations += 1;
        let selection = LetterSelection {
            generation: self.generations,
            cursor: 0,
        };
        self.selection = Some(selection);
        selection
    }

    pub(crate) fn require_participant(&self, id: ParticipantId) -> Result<(), DomainError> {
        if self.is_participant(id) {
            Ok(())
        } else {
            Err(DomainError::not_found(
                NotFoundKind::Participant,
                format!("Participant {id} has not joined"),
            ))
        }
    }

    pub(crate) fn require_host(&self, id: ParticipantId) -> Result<(), DomainError> {
        if self.is_host(id) {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::NotHost,
                format!("Participant {id} is not the host"),
            ))
        }
    }

    pub(crate) fn require_phase(&self, expected: Phase) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Expected phase {expected:?}, current {:?}", self.phase),
            ))
        }
    }

    pub fn players(&self) -> Vec<Participant> {
        self.participants.clone()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
