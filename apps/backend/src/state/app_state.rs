use actix::{Actor, Addr};

use crate::config::GameConfig;
use crate::ws::hub::SessionHub;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    hub: Addr<SessionHub>,
}

impl AppState {
    /// Start the session hub on the current actix system.
    pub fn start(game: GameConfig) -> Self {
        let hub = SessionHub::new(game.session_settings(), game.letter_tick).start();
        Self { hub }
    }

    pub fn hub(&self) -> Addr<SessionHub> {
        self.hub.clone()
    }
}
