use std::collections::BTreeMap;

use crate::domain::answers::AnswerTable;
use crate::domain::scoring::score_round;
use crate::domain::state::ParticipantId;
use crate::domain::votes::{CellRef, VoteLedger};

struct Round {
    ids: Vec<ParticipantId>,
    answers: AnswerTable,
    votes: VoteLedger,
}

impl Round {
    fn new(players: usize, columns: usize) -> Self {
        let ids: Vec<ParticipantId> = (0..players).map(|_| ParticipantId::generate()).collect();
        let mut answers = AnswerTable::new(columns);
        for id in &ids {
            answers.add_row(*id);
        }
        let mut votes = VoteLedger::new();
        votes.open(ids.iter().copied(), columns);
        Self { ids, answers, votes }
    }

    fn answer(&mut self, player: usize, column: usize, text: &str) {
        self.answers.set(self.ids[player], column, text).unwrap();
    }

    /// Every other participant votes `accept` on every non-blank cell.
    fn everyone_votes(&mut self, accept: bool) {
        let cells: Vec<_> = self.answers.answered_cells().collect();
        for (subject, column) in cells {
            for voter in self.ids.clone() {
                if voter != subject {
                    self.votes
                        .record(voter, CellRef::new(subject, column), accept)
                        .unwrap();
                }
            }
        }
    }

    fn scores(&self) -> Vec<u32> {
        let result = score_round(&self.ids, self.answers.width(), &self.answers, &self.votes);
        self.ids.iter().map(|id| result.scores[id]).collect()
    }
}

#[test]
fn shared_answer_scores_five_each() {
    // A and B both say "gato", C leaves it blank
    let mut round = Round::new(3, 1);
    round.answer(0, 0, "gato");
    round.answer(1, 0, "gato");
    round.everyone_votes(true);

    assert!(round.votes.is_complete(&round.answers, 3));
    assert_eq!(round.scores(), vec![5, 5, 0]);
}

#[test]
fn sole_respondent_scores_twenty() {
    let mut round = Round::new(3, 1);
    round.answer(0, 0, "oso");
    round.everyone_votes(true);

    assert_eq!(round.scores(), vec![20, 0, 0]);
}

#[test]
fn split_vote_invalidates_the_cell() {
    let mut round = Round::new(3, 1);
    round.answer(0, 0, "oso");
    let (a, b, c) = (round.ids[0], round.ids[1], round.ids[2]);
    round.votes.record(b, CellRef::new(a, 0), true).unwrap();
    round.votes.record(c, CellRef::new(a, 0), false).unwrap();

    let result = score_round(&round.ids, 1, &round.answers, &round.votes);
    assert_eq!(result.scores[&a], 0);
    assert_eq!(result.validity[&a], vec![false]);
}

#[test]
fn unique_answers_among_several_score_ten() {
    let mut round = Round::new(3, 1);
    round.answer(0, 0, "gato");
    round.answer(1, 0, "perro");
    round.answer(2, 0, "oso");
    round.everyone_votes(true);

    assert_eq!(round.scores(), vec![10, 10, 10]);
}

#[test]
fn duplicates_match_ignoring_case_and_padding() {
    let mut round = Round::new(2, 1);
    round.answer(0, 0, "  Gato");
    round.answer(1, 0, "gATO ");
    round.everyone_votes(true);

    assert_eq!(round.scores(), vec![5, 5]);
}

#[test]
fn rejected_duplicate_no_longer_shares_points() {
    // Two "gato"; one of them rejected, so the other stands alone
    let mut round = Round::new(3, 1);
    round.answer(0, 0, "gato");
    round.answer(1, 0, "gato");
    let (a, b, c) = (round.ids[0], round.ids[1], round.ids[2]);
    round.votes.record(b, CellRef::new(a, 0), true).unwrap();
    round.votes.record(c, CellRef::new(a, 0), true).unwrap();
    round.votes.record(a, CellRef::new(b, 0), false).unwrap();
    round.votes.record(c, CellRef::new(b, 0), false).unwrap();

    assert_eq!(round.scores(), vec![20, 0, 0]);
}

#[test]
fn single_player_answers_stand_without_votes() {
    let mut round = Round::new(1, 2);
    round.answer(0, 0, "Ana");
    round.answer(0, 1, "  ");

    let result = score_round(&round.ids, 2, &round.answers, &round.votes);
    assert_eq!(result.validity[&round.ids[0]], vec![true, false]);
    assert_eq!(result.scores[&round.ids[0]], 20);
}

#[test]
fn columns_score_independently() {
    let mut round = Round::new(2, 2);
    round.answer(0, 0, "gato");
    round.answer(1, 0, "gato");
    round.answer(0, 1, "mango");
    round.everyone_votes(true);

    let scores = round.scores();
    assert_eq!(scores, vec![25, 5]);

    let expected: BTreeMap<ParticipantId, Vec<bool>> = [
        (round.ids[0], vec![true, true]),
        (round.ids[1], vec![true, false]),
    ]
    .into_iter()
    .collect();
    let result = score_round(&round.ids, 2, &round.answers, &round.votes);
    assert_eq!(result.validity, expected);
}
