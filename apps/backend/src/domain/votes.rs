//! Vote ledger for the validation phase.
//!
//! One entry per `(subject, column)` cell, keyed by voter. A voter holds at
//! most one vote per cell; voting again overwrites. Nobody votes on their
//! own row.

use std::collections::BTreeMap;

use crate::domain::answers::AnswerTable;
use crate::domain::state::ParticipantId;
use crate::errors::domain::{DomainError, ValidationKind};

/// A single answer cell: whose row, which column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub subject: ParticipantId,
    pub column: usize,
}

impl CellRef {
    pub const fn new(subject: ParticipantId, column: usize) -> Self {
        Self { subject, column }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub votes: usize,
    pub accepts: usize,
}

impl VoteTally {
    /// A cell nobody voted on stands; otherwise it needs a strict majority.
    /// A tie rejects.
    pub fn is_accepted(&self) -> bool {
        self.votes == 0 || self.accepts * 2 > self.votes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger {
    cells: BTreeMap<CellRef, BTreeMap<ParticipantId, bool>>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to an empty voter set for every `(participant, column)` pair.
    pub fn open<I>(&mut self, participants: I, width: usize)
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        self.cells.clear();
        for subject in participants {
            for column in 0..width {
                self.cells.insert(CellRef::new(subject, column), BTreeMap::new());
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Record or overwrite `voter`'s verdict on `cell`.
    ///
    /// Returns the previous verdict if there was one.
    pub fn record(
        &mut self,
        voter: ParticipantId,
        cell: CellRef,
        accept: bool,
    ) -> Result<Option<bool>, DomainError> {
        if voter == cell.subject {
            return Err(DomainError::validation(
                ValidationKind::SelfVote,
                "Cannot vote on your own answer",
            ));
        }
        Ok(self.cells.entry(cell).or_default().insert(voter, accept))
    }

    pub fn tally(&self, cell: CellRef) -> VoteTally {
        self.cells
            .get(&cell)
            .map(|voters| VoteTally {
                votes: voters.len(),
                accepts: voters.values().filter(|&&accept| accept).count(),
            })
            .unwrap_or_default()
    }

    pub fn verdict(&self, voter: ParticipantId, cell: CellRef) -> Option<bool> {
        self.cells.get(&cell).and_then(|voters| voters.get(&voter)).copied()
    }

    /// Drop a departing participant both as a subject and as a voter.
    pub fn remove_participant(&mut self, id: ParticipantId) {
        self.cells.retain(|cell, _| cell.subject != id);
        for voters in self.cells.values_mut() {
            voters.remove(&id);
        }
    }

    /// Validation is done once every non-blank cell has been voted on by
    /// all other participants.
    ///
    /// Only the number of distinct voters is checked, not who they are.
    pub fn is_complete(&self, answers: &AnswerTable, participant_count: usize) -> bool {
        let needed = participant_count.saturating_sub(1);
        answers
            .answered_cells()
            .all(|(subject, column)| self.tally(CellRef::new(subject, column)).votes >= needed)
    }

    /// True if any subject appears among the voters of its own cells.
    pub fn has_self_votes(&self) -> bool {
        self.cells
            .iter()
            .any(|(cell, voters)| voters.contains_key(&cell.subject))
    }
}
