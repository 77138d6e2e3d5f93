//! Cursor movement for keyboard navigation on an n x n board.

use brix_tictactoe::BoardSize;
use crossterm::event::KeyCode;

/// Moves the cursor one cell with the arrow keys (or `hjkl`).
///
/// The cursor stops at the edges; other keys leave it where it is.
pub fn move_cursor(cursor: usize, size: BoardSize, key: KeyCode) -> usize {
    let side = size.side();
    let (row, col) = (cursor / side, cursor % side);

    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(side - 1), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(side - 1)),
        _ => (row, col),
    };

    row * side + col
}
