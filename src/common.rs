//! Common types for the Battleship engine: move outcomes, engine status and
//! engine errors.

use serde::{Deserialize, Serialize};

/// Outcome of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move landed on water (or off the board) and the turn passes.
    Miss,
    /// Move struck an unhit ship segment; the ship still floats.
    Hit,
    /// Move struck the last unhit segment of a ship.
    Sunk,
}

/// Lifecycle status of the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game has been started (or the last start attempt failed).
    Unknown,
    /// Boards are being generated; transient.
    Initializing,
    /// Both boards are populated and moves are accepted.
    InProgress,
    /// One fleet is fully sunk; no further moves are accepted.
    Completed,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid start parameter: blank player name or out-of-range map size.
    InvalidArgument(&'static str),
    /// Random placement ran out of attempts; the fleet does not fit.
    PlacementExhausted,
    /// Move submitted while no game is in progress.
    InvalidState,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            EngineError::PlacementExhausted => {
                write!(f, "failed to place ship after maximum attempts")
            }
            EngineError::InvalidState => {
                write!(f, "cannot make a move when the game is not in progress")
            }
        }
    }
}

impl std::error::Error for EngineError {}
