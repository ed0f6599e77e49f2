//! Answer table: one row per participant, one cell per column.
//!
//! Every row is exactly `width` cells long. Rows are only resized all at
//! once, through [`AnswerTable::resize`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::state::ParticipantId;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Plain copy of the table, used in payloads and round history.
pub type AnswerRows = BTreeMap<ParticipantId, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerTable {
    rows: AnswerRows,
    #[serde(skip)]
    width: usize,
}

impl AnswerTable {
    pub fn new(width: usize) -> Self {
        Self {
            rows: BTreeMap::new(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self, id: ParticipantId) {
        self.rows.insert(id, vec![String::new(); self.width]);
    }

    pub fn remove_row(&mut self, id: ParticipantId) {
        self.rows.remove(&id);
    }

    /// Blank every cell, keeping the width.
    pub fn blank_all(&mut self) {
        let width = self.width;
        self.resize(width);
    }

    /// Change the width of every row at once; all cells become blank.
    pub fn resize(&mut self, width: usize) {
        self.width = width;
        for row in self.rows.values_mut() {
            *row = vec![String::new(); width];
        }
    }

    pub fn set(
        &mut self,
        id: ParticipantId,
        column_index: usize,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        let width = self.width;
        let row = self.rows.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Participant, format!("No answer row for {id}"))
        })?;
        let cell = row.get_mut(column_index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::ColumnOutOfRange,
                format!("Column index {column_index} out of range (have {width})"),
            )
        })?;
        *cell = text.into();
        Ok(())
    }

    pub fn row(&self, id: ParticipantId) -> Option<&[String]> {
        self.rows.get(&id).map(Vec::as_slice)
    }

    pub fn cell(&self, id: ParticipantId, column_index: usize) -> Option<&str> {
        self.rows
            .get(&id)
            .and_then(|row| row.get(column_index))
            .map(String::as_str)
    }

    /// Whether the cell holds something other than whitespace.
    pub fn has_text(&self, id: ParticipantId, column_index: usize) -> bool {
        self.cell(id, column_index)
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// Every non-blank cell as `(participant, column)`.
    pub fn answered_cells(&self) -> impl Iterator<Item = (ParticipantId, usize)> + '_ {
        self.rows.iter().flat_map(|(id, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, text)| !text.trim().is_empty())
                .map(move |(column_index, _)| (*id, column_index))
        })
    }

    /// Sum of all row lengths; equals `len() * width()` at all times.
    pub fn total_cells(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn to_rows(&self) -> AnswerRows {
        self.rows.clone()
    }
}
