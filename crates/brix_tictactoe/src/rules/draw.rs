//! Draw detection.

use tracing::instrument;

use super::win::winning_line;
use crate::types::Board;

/// Checks if the board is full with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
