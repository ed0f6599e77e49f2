//! Game settings: round count, letter tick rate, default columns.

use std::env;
use std::time::Duration;

use crate::domain::columns::ColumnSchema;
use crate::domain::rules::{max_rounds_range, DEFAULT_MAX_ROUNDS};
use crate::domain::session::SessionSettings;
use crate::error::AppError;

pub const DEFAULT_LETTER_TICK_MS: u64 = 300;
pub const MIN_LETTER_TICK_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: u32,
    pub letter_tick: Duration,
    pub default_columns: ColumnSchema,
}

impl GameConfig {
    /// Read `GAME_MAX_ROUNDS`, `GAME_LETTER_TICK_MS` and `GAME_DEFAULT_COLUMNS`.
    ///
    /// Unset variables take their defaults; set but invalid ones are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let max_rounds = match env::var("GAME_MAX_ROUNDS") {
            Ok(raw) => {
                let value = raw.trim().parse::<u32>().map_err(|_| {
                    AppError::config(format!("GAME_MAX_ROUNDS must be a number, got {raw:?}"))
                })?;
                if !max_rounds_range().contains(&value) {
                    return Err(AppError::config(format!(
                        "GAME_MAX_ROUNDS must be between {} and {}, got {value}",
                        max_rounds_range().start(),
                        max_rounds_range().end()
                    )));
                }
                value
            }
            Err(_) => DEFAULT_MAX_ROUNDS,
        };

        let tick_ms = match env::var("GAME_LETTER_TICK_MS") {
            Ok(raw) => {
                let value = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("GAME_LETTER_TICK_MS must be a number, got {raw:?}"))
                })?;
                if value < MIN_LETTER_TICK_MS {
                    return Err(AppError::config(format!(
                        "GAME_LETTER_TICK_MS must be at least {MIN_LETTER_TICK_MS}, got {value}"
                    )));
                }
                value
            }
            Err(_) => DEFAULT_LETTER_TICK_MS,
        };

        let default_columns = match env::var("GAME_DEFAULT_COLUMNS") {
            Ok(raw) => ColumnSchema::new(raw.split(','))
                .map_err(|err| AppError::config(format!("GAME_DEFAULT_COLUMNS: {err}")))?,
            Err(_) => ColumnSchema::defaults(),
        };

        Ok(Self {
            max_rounds,
            letter_tick: Duration::from_millis(tick_ms),
            default_columns,
        })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            max_rounds: self.max_rounds,
            default_columns: self.default_columns.clone(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            letter_tick: Duration::from_millis(DEFAULT_LETTER_TICK_MS),
            default_columns: ColumnSchema::defaults(),
        }
    }
}
