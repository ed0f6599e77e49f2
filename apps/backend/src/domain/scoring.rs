use std::collections::{BTreeMap, HashMap};

use crate::domain::answers::AnswerTable;
use crate::domain::rules::award_for;
use crate::domain::state::ParticipantId;
use crate::domain::votes::{CellRef, VoteLedger};

/// Outcome of scoring one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundScoring {
    /// Points earned this round, one entry per participant.
    pub scores: BTreeMap<ParticipantId, u32>,
    /// Per-cell validity flags, same shape as the answer rows.
    pub validity: BTreeMap<ParticipantId, Vec<bool>>,
}

/// Comparison key for duplicate detection.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Score a round from the answer table and the vote ledger.
///
/// A cell is valid when it has text and no strict-majority rejection.
/// Within each column, valid cells sharing a normalized answer split the
/// low award; a lone valid answer scores more, most when it is the only
/// valid answer in the column.
pub fn score_round(
    participants: &[ParticipantId],
    width: usize,
    answers: &AnswerTable,
    votes: &VoteLedger,
) -> RoundScoring {
    let validity: BTreeMap<ParticipantId, Vec<bool>> = participants
        .iter()
        .map(|&id| {
            let flags = (0..width)
                .map(|column| {
                    answers.has_text(id, column)
                        && votes.tally(CellRef::new(id, column)).is_accepted()
                })
                .collect();
            (id, flags)
        })
        .collect();

    let mut scores: BTreeMap<ParticipantId, u32> =
        participants.iter().map(|&id| (id, 0)).collect();

    for column in 0..width {
        let mut groups: HashMap<String, usize> = HashMap::new();
        let mut valid_cells: Vec<(ParticipantId, String)> = Vec::new();
        for &id in participants {
            if !validity[&id][column] {
                continue;
            }
            let key = normalize_answer(answers.cell(id, column).unwrap_or_default());
            *groups.entry(key.clone()).or_default() += 1;
            valid_cells.push((id, key));
        }

        let respondents = valid_cells.len();
        for (id, key) in valid_cells {
            if let Some(total) = scores.get_mut(&id) {
                *total += award_for(groups[&key], respondents);
            }
        }
    }

    RoundScoring { scores, validity }
}
