//! Move selection for the scripted opponent.
//!
//! The opponent is not meant to play well. It picks an empty cell using a
//! pluggable [`OpponentPolicy`]; [`LowestEmpty`] is the deterministic
//! default and [`UniformRandom`] picks uniformly among empty cells.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::Board;

/// Chooses the opponent's next cell.
pub trait OpponentPolicy: std::fmt::Debug + Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Picks an empty cell, or `None` when the board is full.
    fn select(&mut self, board: &Board) -> Option<usize>;
}

/// Always takes the lowest-indexed empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowestEmpty;

impl OpponentPolicy for LowestEmpty {
    fn name(&self) -> &'static str {
        "lowest_empty"
    }

    #[instrument(skip(self, board))]
    fn select(&mut self, board: &Board) -> Option<usize> {
        board.empty_cells().next()
    }
}

/// Picks uniformly among the empty cells.
///
/// Seeded construction is reproducible: the same seed and the same sequence
/// of boards yield the same choices.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: ChaCha8Rng,
}

impl UniformRandom {
    /// Creates a reproducible policy from a seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a policy seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl OpponentPolicy for UniformRandom {
    fn name(&self) -> &'static str {
        "random"
    }

    #[instrument(skip(self, board))]
    fn select(&mut self, board: &Board) -> Option<usize> {
        let empty: Vec<usize> = board.empty_cells().collect();
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Random opponent picked a cell");
        choice
    }
}

/// Configurable choice of opponent policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// [`LowestEmpty`].
    #[default]
    LowestEmpty,
    /// [`UniformRandom`].
    Random,
}

impl PolicyKind {
    /// Builds the policy. `seed` only applies to [`PolicyKind::Random`];
    /// without one the random policy draws from OS entropy.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn OpponentPolicy> {
        match (self, seed) {
            (PolicyKind::LowestEmpty, _) => Box::new(LowestEmpty),
            (PolicyKind::Random, Some(seed)) => Box::new(UniformRandom::seeded(seed)),
            (PolicyKind::Random, None) => Box::new(UniformRandom::from_entropy()),
        }
    }
}
