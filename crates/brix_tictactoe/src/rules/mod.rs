//! Game rules for n x n tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after
//! every accepted move and caches the result; nothing here mutates state.

mod draw;
mod lines;
mod win;

pub use draw::is_draw;
pub use lines::{Line, LineKind, lines};
pub use win::winning_line;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Board, Mark};

/// Classification of the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Winner(Mark),
    /// The board filled up with no completed line.
    Draw,
}

impl Outcome {
    /// True once the game has a winner or is drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// Outcome together with the line that produced a win.
///
/// `winning_line` is `Some` exactly when `outcome` is [`Outcome::Winner`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Current classification.
    outcome: Outcome,
    /// Completed line, for winners only.
    winning_line: Option<Line>,
}

impl Evaluation {
    /// Evaluation of a fresh board.
    pub fn in_progress() -> Self {
        Self::default()
    }
}

/// Evaluates a board.
///
/// The first completed line in search order wins (rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal). With no completed
/// line a full board is a draw, anything else is still in progress.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((mark, line)) = winning_line(board) {
        return Evaluation {
            outcome: Outcome::Winner(mark),
            winning_line: Some(line),
        };
    }

    let outcome = if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };

    Evaluation {
        outcome,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Cell};

    fn board_from(size: u8, marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new(BoardSize::new(size).unwrap());
        for &(index, mark) in marks {
            board.set(index, Cell::Occupied(mark)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        for size in BoardSize::all() {
            let evaluation = evaluate(&Board::new(size));
            assert_eq!(*evaluation.outcome(), Outcome::InProgress);
            assert!(evaluation.winning_line().is_none());
        }
    }

    #[test]
    fn test_top_row_wins() {
        let board = board_from(3, &[(0, Mark::X), (1, Mark::X), (2, Mark::X), (4, Mark::O)]);
        let evaluation = evaluate(&board);
        assert_eq!(*evaluation.outcome(), Outcome::Winner(Mark::X));
        assert_eq!(
            evaluation.winning_line().as_ref().map(Line::indices),
            Some(&[0, 1, 2][..])
        );
    }

    #[test]
    fn test_draw_has_no_line() {
        // X O O
        // O X X
        // X X O
        let board = board_from(
            3,
            &[
                (0, Mark::X),
                (1, Mark::O),
                (2, Mark::O),
                (3, Mark::O),
                (4, Mark::X),
                (5, Mark::X),
                (6, Mark::X),
                (7, Mark::X),
                (8, Mark::O),
            ],
        );
        let evaluation = evaluate(&board);
        assert_eq!(*evaluation.outcome(), Outcome::Draw);
        assert!(evaluation.winning_line().is_none());
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        // Contrived: row 0 and column 0 both full of O.
        let board = board_from(
            3,
            &[(0, Mark::O), (1, Mark::O), (2, Mark::O), (3, Mark::O), (6, Mark::O)],
        );
        let evaluation = evaluate(&board);
        let line = evaluation.winning_line().clone().unwrap();
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Winner(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
