//! Win detection for n x n boards.

use tracing::instrument;

use super::lines::{Line, lines};
use crate::types::{Board, Cell, Mark};

/// Finds the first completed line in search order.
///
/// A line is complete when its first cell holds a mark and every other
/// cell on it holds the same mark.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    lines(board.size()).into_iter().find_map(|line| {
        let (&first, rest) = line.indices().split_first()?;
        let Some(Cell::Occupied(mark)) = board.get(first) else {
            return None;
        };
        let complete = rest
            .iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(mark)));
        complete.then_some((mark, line))
    })
}
