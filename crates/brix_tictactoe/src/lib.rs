//! Brix tic-tac-toe engine.
//!
//! Pure game logic for square boards from 3 x 3 up to 7 x 7: win and draw
//! detection, turn order, single-opponent and two-player modes, score
//! keeping, and a cancellable schedule for the scripted opponent's reply.
//! Rendering lives elsewhere; callers drive the engine and re-render from
//! its read-only state.
//!
//! # Example
//!
//! ```
//! use brix_tictactoe::{BoardSize, GameEngine, Mark, Mode, Outcome};
//!
//! let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome(), Outcome::Winner(Mark::X));
//! assert_eq!(engine.winning_line().unwrap().indices(), &[0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod opponent;
mod rules;
mod session;
mod types;

pub use action::{MoveStatus, Placement, Rejection};
pub use engine::{GameEngine, Snapshot};
pub use opponent::{LowestEmpty, OpponentPolicy, PolicyKind, UniformRandom};
pub use rules::{Evaluation, Line, LineKind, Outcome, evaluate, is_draw, lines, winning_line};
pub use session::{
    DEFAULT_OPPONENT_DELAY, OpponentTicket, PendingOpponent, Session, SessionUpdate,
};
pub use types::{Board, BoardSize, Cell, Mark, Mode, Score, SizeError};
