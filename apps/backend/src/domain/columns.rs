use serde::Serialize;

use crate::domain::rules::{column_count_range, DEFAULT_COLUMNS, MAX_LABEL_CHARS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Ordered column labels. Labels are distinguished by position, so
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnSchema {
    labels: Vec<String>,
}

impl ColumnSchema {
    /// Validate and build a schema: 1..=10 labels, each 1..=20 characters
    /// after trimming.
    pub fn new<I, S>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .collect();

        if !column_count_range().contains(&labels.len()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidColumns,
                format!(
                    "Column count must be between {} and {}, got {}",
                    column_count_range().start(),
                    column_count_range().end(),
                    labels.len()
                ),
            ));
        }

        if let Some((idx, label)) = labels
            .iter()
            .enumerate()
            .find(|(_, label)| label.is_empty() || label.chars().count() > MAX_LABEL_CHARS)
        {
            return Err(DomainError::validation(
                ValidationKind::InvalidColumns,
                format!("Column {idx} label {label:?} must be 1..={MAX_LABEL_CHARS} characters"),
            ));
        }

        Ok(Self { labels })
    }

    pub fn defaults() -> Self {
        Self {
            labels: DEFAULT_COLUMNS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a validated schema; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn require_index(&self, column_index: usize) -> Result<(), DomainError> {
        if column_index < self.labels.len() {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::ColumnOutOfRange,
                format!(
                    "Column index {column_index} out of range (have {})",
                    self.labels.len()
                ),
            ))
        }
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::defaults()
    }
}
