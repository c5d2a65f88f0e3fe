use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {height}x{width} board cannot hold {mines} mines")]
    InvalidConfiguration {
        height: Coord,
        width: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {coords:?} are outside the board")]
    OutOfBounds { coords: Coord2 },
    #[error(transparent)]
    IllegalAction(#[from] IllegalAction),
}

/// Reason an action was rejected, the session is left untouched.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Session was closed")]
    SessionClosed,
    #[error("Cell is flagged, unflag it before revealing")]
    CellFlagged,
    #[error("Cell is already revealed")]
    CellRevealed,
}

pub type Result<T> = core::result::Result<T, GameError>;
