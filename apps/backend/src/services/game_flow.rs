//! Game flow service: every Session Registry and Round Lifecycle operation.
//!
//! Each operation validates against the current phase and role first and
//! only then mutates, so a rejected call leaves the session untouched. An
//! accepted call bumps the session version and returns the events to
//! broadcast, in order.

mod player_actions;
mod roster;
mod round_lifecycle;

use crate::domain::events::SessionEvent;
use crate::domain::session::Session;

#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

/// Result of a game flow operation.
pub type FlowResult = Result<Vec<SessionEvent>, crate::errors::DomainError>;

fn commit(session: &mut Session, events: Vec<SessionEvent>) -> FlowResult {
    session.bump_version();
    Ok(events)
}
