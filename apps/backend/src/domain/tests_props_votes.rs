//! Property-based tests for the vote ledger.

use proptest::prelude::*;

use crate::domain::state::ParticipantId;
use crate::domain::votes::{CellRef, VoteLedger};
use crate::domain::test_prelude;

/// (voter, subject, column, accept) as indices into a small roster.
fn vote_attempts() -> impl Strategy<Value = Vec<(usize, usize, usize, bool)>> {
    prop::collection::vec((0usize..4, 0usize..4, 0usize..3, any::<bool>()), 0..40)
}

fn roster() -> Vec<ParticipantId> {
    (0..4).map(|_| ParticipantId::generate()).collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: whatever is attempted, no self-vote ends up in the ledger.
    #[test]
    fn prop_no_self_votes_recorded(attempts in vote_attempts()) {
        let ids = roster();
        let mut ledger = VoteLedger::new();
        ledger.open(ids.iter().copied(), 3);

        for (voter, subject, column, accept) in attempts {
            let result = ledger.record(ids[voter], CellRef::new(ids[subject], column), accept);
            prop_assert_eq!(result.is_err(), voter == subject);
        }
        prop_assert!(!ledger.has_self_votes());
    }

    /// Property: a cell's tally only ever reflects each voter's last verdict.
    #[test]
    fn prop_revotes_overwrite(attempts in vote_attempts()) {
        let ids = roster();
        let mut ledger = VoteLedger::new();
        let mut last = std::collections::HashMap::new();

        for (voter, subject, column, accept) in attempts {
            if voter == subject {
                continue;
            }
            ledger.record(ids[voter], CellRef::new(ids[subject], column), accept).unwrap();
            last.insert((voter, subject, column), accept);
        }

        for subject in 0..4 {
            for column in 0..3 {
                let expected: Vec<bool> = last
                    .iter()
                    .filter(|((_, s, c), _)| *s == subject && *c == column)
                    .map(|(_, accept)| *accept)
                    .collect();
                let tally = ledger.tally(CellRef::new(ids[subject], column));
                prop_assert_eq!(tally.votes, expected.len());
                prop_assert_eq!(tally.accepts, expected.iter().filter(|a| **a).count());
            }
        }
    }

    /// Property: a removed participant no longer counts as voter or subject.
    #[test]
    fn prop_removal_forgets_participant(attempts in vote_attempts(), gone in 0usize..4) {
        let ids = roster();
        let mut ledger = VoteLedger::new();
        ledger.open(ids.iter().copied(), 3);
        for (voter, subject, column, accept) in attempts {
            let _ = ledger.record(ids[voter], CellRef::new(ids[subject], column), accept);
        }

        ledger.remove_participant(ids[gone]);

        for subject in 0..4 {
            for column in 0..3 {
                let cell = CellRef::new(ids[subject], column);
                prop_assert_eq!(ledger.verdict(ids[gone], cell), None);
                if subject == gone {
                    prop_assert_eq!(ledger.tally(cell).votes, 0);
                }
            }
        }
    }
}
