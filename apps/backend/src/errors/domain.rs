//! Domain-level error type returned by every game operation.
//!
//! This error type is transport-agnostic. A rejected action leaves the
//! `Session` untouched; the hub logs the error and drops it, so nothing here
//! ever reaches a participant.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a game action was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// The action requires the host role.
    NotHost,
    /// The action is not allowed in the current phase.
    PhaseMismatch,
    /// A participant tried to vote on their own answer.
    SelfVote,
    /// Column labels violate the schema shape rules.
    InvalidColumns,
    /// A column index outside the current schema.
    ColumnOutOfRange,
    /// Display name is empty after trimming.
    InvalidName,
    /// Selection was stopped before any letter was drawn.
    NoLetterDrawn,
    /// Every letter has already been used this session.
    LetterPoolExhausted,
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Participant,
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    AlreadyJoined,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Role, phase, self-reference or shape violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing entity in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
