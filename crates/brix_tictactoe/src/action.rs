//! Move results.
//!
//! Illegal moves are not errors: the engine leaves its state untouched and
//! reports a [`Rejection`] that callers are free to ignore.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::rules::Outcome;
use crate::types::Mark;

/// A mark that was placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Board index that received the mark.
    pub index: usize,
    /// The mark placed.
    pub mark: Mark,
    /// Outcome after the placement.
    pub outcome: Outcome,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// Index does not exist on this board.
    #[display("Index {} is outside a board of {} cells", index, len)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
    /// The game has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,
    /// It is the scripted opponent's turn, not the human's.
    #[display("It is {}'s turn", _0)]
    NotYourTurn(Mark),
}

/// Result of asking the engine to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// The mark was placed and the turn passed.
    Accepted(Placement),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveStatus {
    /// True when the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveStatus::Accepted(_))
    }

    /// The placement, if the move was accepted.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveStatus::Accepted(placement) => Some(*placement),
            MoveStatus::Rejected(_) => None,
        }
    }
}
