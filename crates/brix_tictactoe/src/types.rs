//! Core domain types for n x n tic-tac-toe.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::instrument;

use crate::action::Rejection;
use crate::rules::Outcome;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true when no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Side length of a square board.
///
/// Only sizes in `MIN..=MAX` can be constructed, so every board the engine
/// sees has a supported size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: u8 = 3;
    /// Largest supported side length.
    pub const MAX: u8 = 7;
    /// The classic 3 x 3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Creates a board size, rejecting values outside `MIN..=MAX`.
    #[instrument]
    pub fn new(side: u8) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&side) {
            Ok(Self(side))
        } else {
            Err(SizeError { requested: side })
        }
    }

    /// Side length as an index-friendly `usize`.
    pub fn side(self) -> usize {
        usize::from(self.0)
    }

    /// Number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Every supported size, smallest first.
    pub fn all() -> impl Iterator<Item = BoardSize> {
        (Self::MIN..=Self::MAX).map(BoardSize)
    }

    /// Menu label such as `"4 x 4"`.
    pub fn label(self) -> String {
        format!("{} x {}", self.0, self.0)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = SizeError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Requested board size is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size {} is outside the supported range 3..=7", requested)]
pub struct SizeError {
    /// The side length that was asked for.
    pub requested: u8,
}

/// Who the marks belong to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// One human (X) against the scripted opponent (O).
    #[strum(to_string = "single", serialize = "single_opponent", serialize = "ai")]
    SingleOpponent,
    /// Two humans alternating on the same device.
    #[strum(to_string = "two", serialize = "two_player", serialize = "2p")]
    TwoPlayer,
}

impl Mode {
    /// Menu label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Mode::SingleOpponent => "VS AI",
            Mode::TwoPlayer => "2 Players",
        }
    }
}

/// Wins per mark for the current mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Games won by X.
    x: u32,
    /// Games won by O.
    o: u32,
}

impl Score {
    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Credits the winner of a finished game. Draws and unfinished games
    /// leave the score unchanged.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x += 1,
            Outcome::Winner(Mark::O) => self.o += 1,
            Outcome::Draw | Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X = {} | O = {}", self.x, self.o)
    }
}

/// Square grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a cell.
    ///
    /// This is raw board storage and does not enforce game rules; moves
    /// should go through [`GameEngine`](crate::GameEngine).
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), Rejection> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(Rejection::OutOfBounds { index, len })?;
        *slot = cell;
        Ok(())
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.side())
    }

    /// Converts an index into `(row, column)`.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let side = self.size.side();
        (index / side, index % side)
    }

    /// Converts `(row, column)` into an index.
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.size.side() + column
    }

    /// Formats the board as plain text, one row per line.
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".",
                        Cell::Occupied(Mark::X) => "X",
                        Cell::Occupied(Mark::O) => "O",
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
