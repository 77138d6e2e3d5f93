//! Session: an engine plus the one pending opponent move.
//!
//! After a human move hands the turn to the scripted opponent, the session
//! issues an [`OpponentTicket`]. The caller arms a timer and hands the ticket
//! back through [`Session::fire`] once it elapses. Any reset, mode change, or
//! size change cancels the ticket, and `fire` ignores tickets that are no
//! longer pending, so a late timer can never touch a fresh board.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{MoveStatus, Placement};
use crate::engine::GameEngine;
use crate::types::{BoardSize, Mode};

/// Default pause before the opponent replies.
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(500);

/// Identifies one scheduled opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OpponentTicket(u64);

impl std::fmt::Display for OpponentTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether an opponent move is waiting on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOpponent {
    /// Nothing scheduled.
    #[default]
    Idle,
    /// Waiting for the timer carrying this ticket.
    Scheduled(OpponentTicket),
}

/// Result of a human move routed through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUpdate {
    /// What the engine did with the move.
    pub status: MoveStatus,
    /// Ticket to arm a timer with, if the opponent now has to reply.
    pub scheduled: Option<OpponentTicket>,
}

/// Owns a [`GameEngine`] and its pending opponent move.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    pending: PendingOpponent,
    next_ticket: u64,
    opponent_delay: Duration,
}

impl Session {
    /// Wraps an engine with the default opponent delay.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        Self::with_delay(engine, DEFAULT_OPPONENT_DELAY)
    }

    /// Wraps an engine with a custom opponent delay.
    #[instrument(skip(engine))]
    pub fn with_delay(engine: GameEngine, opponent_delay: Duration) -> Self {
        Self {
            engine,
            pending: PendingOpponent::Idle,
            next_ticket: 0,
            opponent_delay,
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The pending opponent ticket, if any.
    pub fn pending(&self) -> Option<OpponentTicket> {
        match self.pending {
            PendingOpponent::Idle => None,
            PendingOpponent::Scheduled(ticket) => Some(ticket),
        }
    }

    /// How long the caller should wait before firing a ticket.
    pub fn opponent_delay(&self) -> Duration {
        self.opponent_delay
    }

    /// Routes a human move to the engine and schedules the reply.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> SessionUpdate {
        let status = self.engine.apply_move(index);
        let scheduled = if status.is_accepted() && self.engine.awaiting_opponent() {
            Some(self.schedule())
        } else {
            None
        };
        SessionUpdate { status, scheduled }
    }

    /// Applies the opponent move for `ticket` if it is still pending.
    ///
    /// Returns the placement, or `None` for stale tickets and for games
    /// where the opponent has nothing to do.
    #[instrument(skip(self))]
    pub fn fire(&mut self, ticket: OpponentTicket) -> Option<Placement> {
        if self.pending != PendingOpponent::Scheduled(ticket) {
            debug!(current = ?self.pending, "Ignoring stale opponent ticket");
            return None;
        }
        self.pending = PendingOpponent::Idle;

        let index = self.engine.opponent_move()?;
        let mark = self.engine.board().get(index).and_then(|cell| cell.mark())?;
        Some(Placement {
            index,
            mark,
            outcome: self.engine.outcome(),
        })
    }

    /// Drops the pending opponent move, returning its ticket.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> Option<OpponentTicket> {
        let cancelled = self.pending();
        if let Some(ticket) = cancelled {
            debug!(%ticket, "Cancelled pending opponent move");
        }
        self.pending = PendingOpponent::Idle;
        cancelled
    }

    /// Cancels any pending reply, then resets the board.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) -> Option<OpponentTicket> {
        let cancelled = self.cancel();
        self.engine.reset_board();
        cancelled
    }

    /// Cancels any pending reply, then switches mode.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: Mode) -> Option<OpponentTicket> {
        let cancelled = self.cancel();
        self.engine.change_mode(mode);
        cancelled
    }

    /// Cancels any pending reply, then switches board size.
    #[instrument(skip(self))]
    pub fn change_size(&mut self, size: BoardSize) -> Option<OpponentTicket> {
        let cancelled = self.cancel();
        self.engine.change_size(size);
        cancelled
    }

    fn schedule(&mut self) -> OpponentTicket {
        self.next_ticket += 1;
        let ticket = OpponentTicket(self.next_ticket);
        self.pending = PendingOpponent::Scheduled(ticket);
        info!(%ticket, delay_ms = self.opponent_delay.as_millis() as u64, "Opponent move scheduled");
        ticket
    }
}
