//! Error types for the game driver and configuration

use thiserror::Error;

use crate::game::Command;
use crate::sim::GamePhase;

/// Game error type
#[derive(Debug, Error)]
pub enum GameError {
    /// A step was requested while no level is in play
    #[error("cannot step while {phase:?}")]
    NotPlaying { phase: GamePhase },

    /// A command was issued from a phase that does not accept it
    #[error("{command:?} is not valid while {phase:?}")]
    InvalidCommand { command: Command, phase: GamePhase },

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings could not be parsed
    #[error("settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("settings io error: {0}")]
    SettingsIo(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
