//! Game engine: board, turn, outcome, mode, and score.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{MoveStatus, Placement, Rejection};
use crate::opponent::{LowestEmpty, OpponentPolicy};
use crate::rules::{self, Evaluation, Line, Outcome};
use crate::types::{Board, BoardSize, Cell, Mark, Mode, Score};

/// Mark controlled by the human in [`Mode::SingleOpponent`].
const HUMAN: Mark = Mark::X;

/// Tic-tac-toe engine for one board at a time.
///
/// Every mutating operation ends by re-evaluating the board, so the cached
/// outcome and winning line always match the cells. Illegal moves are
/// ignored and reported as [`MoveStatus::Rejected`].
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    evaluation: Evaluation,
    mode: Mode,
    score: Score,
    policy: Box<dyn OpponentPolicy>,
}

impl GameEngine {
    /// Creates an engine with the deterministic [`LowestEmpty`] opponent.
    #[instrument]
    pub fn new(size: BoardSize, mode: Mode) -> Self {
        Self::with_policy(size, mode, Box::new(LowestEmpty))
    }

    /// Creates an engine with a custom opponent policy.
    #[instrument(skip(policy), fields(policy_name = policy.name()))]
    pub fn with_policy(size: BoardSize, mode: Mode, policy: Box<dyn OpponentPolicy>) -> Self {
        info!("Creating game engine");
        Self {
            board: Board::new(size),
            turn: Mark::X,
            evaluation: Evaluation::in_progress(),
            mode,
            score: Score::default(),
            policy,
        }
    }

    /// Starts a fresh board of `size`. Score and mode are untouched.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, size: BoardSize) {
        debug!("Initializing board");
        self.board = Board::new(size);
        self.turn = Mark::X;
        self.evaluation = Evaluation::in_progress();
    }

    /// Places the current mark at `index` on behalf of a human player.
    ///
    /// In [`Mode::SingleOpponent`] only the human's mark may be placed
    /// through this call; the opponent moves via [`opponent_move`].
    ///
    /// [`opponent_move`]: GameEngine::opponent_move
    #[instrument(skip(self), fields(turn = %self.turn, mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize) -> MoveStatus {
        if self.mode == Mode::SingleOpponent && self.turn != HUMAN && !self.is_over() {
            debug!("Ignoring move made during the opponent's turn");
            return MoveStatus::Rejected(Rejection::NotYourTurn(self.turn));
        }
        self.place(index)
    }

    /// Lets the scripted opponent move.
    ///
    /// Returns the chosen index, or `None` when it is not the opponent's
    /// turn (two-player mode, finished game, or the human to move).
    #[instrument(skip(self), fields(policy_name = self.policy.name()))]
    pub fn opponent_move(&mut self) -> Option<usize> {
        if !self.awaiting_opponent() {
            debug!("Opponent move requested out of turn");
            return None;
        }

        let index = self.policy.select(&self.board)?;
        match self.place(index) {
            MoveStatus::Accepted(placement) => {
                debug!(index, outcome = ?placement.outcome, "Opponent moved");
                Some(index)
            }
            MoveStatus::Rejected(rejection) => {
                warn!(index, %rejection, "Opponent policy chose an illegal cell");
                None
            }
        }
    }

    /// Re-derives the outcome and winning line from the board.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> &Evaluation {
        self.evaluation = rules::evaluate(&self.board);
        &self.evaluation
    }

    /// Clears the board for another game of the same size and mode.
    ///
    /// A finished game's winner is credited before the board is cleared.
    #[instrument(skip(self), fields(outcome = ?self.outcome()))]
    pub fn reset_board(&mut self) {
        self.score.record(self.outcome());
        info!(score = %self.score, "Board reset");
        self.initialize(self.board.size());
    }

    /// Switches mode, clearing the board and the score.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: Mode) {
        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        self.score = Score::default();
        self.initialize(self.board.size());
    }

    /// Switches board size, clearing the board and the score.
    #[instrument(skip(self))]
    pub fn change_size(&mut self, size: BoardSize) {
        info!(from = %self.board.size(), to = %size, "Board size changed");
        self.score = Score::default();
        self.initialize(size);
    }

    /// True when the scripted opponent should move next.
    pub fn awaiting_opponent(&self) -> bool {
        self.mode == Mode::SingleOpponent && !self.is_over() && self.turn == HUMAN.opponent()
    }

    /// True once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        *self.evaluation.outcome()
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.evaluation.winning_line().as_ref()
    }

    /// Checks whether `index` is part of the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(index))
    }

    /// Returns the score for the current mode selection.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Name of the opponent policy, for logs and diagnostics.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Read-only copy of everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.outcome(),
            winning_line: self.winning_line().map(|line| line.indices().to_vec()),
            score: self.score,
            mode: self.mode,
            size: self.board.size(),
        }
    }

    fn place(&mut self, index: usize) -> MoveStatus {
        if self.is_over() {
            debug!(index, "Ignoring move after the game ended");
            return MoveStatus::Rejected(Rejection::GameOver);
        }

        match self.board.get(index) {
            None => {
                debug!(index, "Ignoring out-of-bounds move");
                MoveStatus::Rejected(Rejection::OutOfBounds {
                    index,
                    len: self.board.len(),
                })
            }
            Some(Cell::Occupied(_)) => {
                debug!(index, "Ignoring move on an occupied cell");
                MoveStatus::Rejected(Rejection::Occupied(index))
            }
            Some(Cell::Empty) => {
                let mark = self.turn;
                if let Err(rejection) = self.board.set(index, Cell::Occupied(mark)) {
                    return MoveStatus::Rejected(rejection);
                }
                self.turn = mark.opponent();
                let outcome = *self.evaluate().outcome();
                debug!(index, %mark, ?outcome, "Move accepted");
                MoveStatus::Accepted(Placement {
                    index,
                    mark,
                    outcome,
                })
            }
        }
    }
}

/// State exposed for rendering or logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Indices of the completed line, for winners only.
    pub winning_line: Option<Vec<usize>>,
    /// Wins per mark.
    pub score: Score,
    /// Current mode.
    pub mode: Mode,
    /// Board size.
    pub size: BoardSize,
}
